// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Helpers shared by the unit tests.

use std::path::Path;

/// Evaluate a Go string expression made of raw and interpreted literals
/// joined with `+`, optionally parenthesized, and return its bytes.
pub fn eval_go_string(expr: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < expr.len() {
        match expr[i] {
            b'(' | b')' | b'+' | b' ' | b'\n' | b'\t' => i += 1,
            b'`' => {
                let end = expr[i + 1..]
                    .iter()
                    .position(|&b| b == b'`')
                    .expect("unterminated raw literal");
                out.extend_from_slice(&expr[i + 1..i + 1 + end]);
                i += end + 2;
            }
            b'"' => {
                i += 1;
                loop {
                    match expr[i] {
                        b'"' => {
                            i += 1;
                            break;
                        }
                        b'\\' => {
                            i += 1;
                            let esc = expr[i];
                            i += 1;
                            match esc {
                                b'x' => {
                                    out.push(hex(&expr[i..i + 2]) as u8);
                                    i += 2;
                                }
                                b'u' | b'U' => {
                                    let n = if esc == b'u' { 4 } else { 8 };
                                    let c = char::from_u32(hex(&expr[i..i + n]))
                                        .expect("valid scalar value");
                                    let mut buf = [0u8; 4];
                                    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                                    i += n;
                                }
                                b'a' => out.push(0x07),
                                b'b' => out.push(0x08),
                                b'f' => out.push(0x0c),
                                b'n' => out.push(b'\n'),
                                b'r' => out.push(b'\r'),
                                b't' => out.push(b'\t'),
                                b'v' => out.push(0x0b),
                                b'\\' => out.push(b'\\'),
                                b'"' => out.push(b'"'),
                                other => panic!("unexpected escape \\{}", other as char),
                            }
                        }
                        b => {
                            out.push(b);
                            i += 1;
                        }
                    }
                }
            }
            other => panic!("unexpected byte {:?} in expression", other as char),
        }
    }
    out
}

fn hex(digits: &[u8]) -> u32 {
    let s = std::str::from_utf8(digits).expect("ascii hex digits");
    u32::from_str_radix(s, 16).expect("hex digits")
}

/// Text between `start` and the first following `end`.
pub fn between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let from = text.find(start).expect("start marker present") + start.len();
    let len = text[from..].find(end).expect("end marker present");
    &text[from..from + len]
}

/// Write `content` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(path, content).expect("Failed to write fixture file");
}

/// Create the symlink fixture tree used throughout the scanner tests.
///
/// ```text
/// testdata/symlinkSrc/file{1,2,3,4}
/// testdata/symlinkFile/file1 -> ../symlinkSrc/file1
/// testdata/symlinkParent/symlinkTarget -> ../symlinkSrc
/// testdata/symlinkRecursiveParent/file1
/// testdata/symlinkRecursiveParent/symlinkRecursiveParent -> ../symlinkRecursiveParent
/// testdata/dupname/foo/bar
/// testdata/dupname/foo_bar
/// testdata/in/a/test.asset
/// ```
#[cfg(unix)]
pub fn create_testdata(root: &Path) {
    use std::os::unix::fs::symlink;

    for n in 1..=4 {
        write_file(
            root,
            &format!("testdata/symlinkSrc/file{n}"),
            format!("// symlink file {n}\n").as_bytes(),
        );
    }

    std::fs::create_dir_all(root.join("testdata/symlinkFile")).unwrap();
    symlink("../symlinkSrc/file1", root.join("testdata/symlinkFile/file1")).unwrap();

    std::fs::create_dir_all(root.join("testdata/symlinkParent")).unwrap();
    symlink("../symlinkSrc", root.join("testdata/symlinkParent/symlinkTarget")).unwrap();

    write_file(root, "testdata/symlinkRecursiveParent/file1", b"// recursive\n");
    symlink(
        "../symlinkRecursiveParent",
        root.join("testdata/symlinkRecursiveParent/symlinkRecursiveParent"),
    )
    .unwrap();

    write_file(root, "testdata/dupname/foo/bar", b"foo/bar\n");
    write_file(root, "testdata/dupname/foo_bar", b"foo_bar\n");
    write_file(root, "testdata/in/a/test.asset", b"// sample file\n");
}
