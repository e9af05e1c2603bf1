// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::*;
use crate::config::compile_pattern;
use crate::testutil::write_file;

#[cfg(unix)]
#[fixture]
fn testdata() -> TempDir {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    crate::testutil::create_testdata(tmp.path());
    tmp
}

fn config_for(root: &Path, inputs: &[(&str, bool)]) -> Config {
    Config {
        cwd: Some(root.to_path_buf()),
        input: inputs
            .iter()
            .map(|(path, recursive)| InputConfig::new(clean_path(path), *recursive))
            .collect(),
        ..Config::default()
    }
}

/// `(name, path, func_name)` for every asset, in name order.
fn scan(config: &Config) -> Vec<(String, String, String)> {
    FsScanner::new(config)
        .expect("Failed to create scanner")
        .scan_all()
        .expect("Scan should succeed")
        .into_sorted()
        .into_iter()
        .map(|a| (a.name, to_slash(&a.path), a.func_name))
        .collect()
}

fn entry(name: &str, func_name: &str) -> (String, String, String) {
    (name.to_string(), name.to_string(), func_name.to_string())
}

#[cfg(unix)]
#[rstest]
fn test_scan_single_file(testdata: TempDir) {
    let config = config_for(testdata.path(), &[("./testdata/symlinkSrc/file1", false)]);
    assert_eq!(
        scan(&config),
        vec![entry(
            "testdata/symlinkSrc/file1",
            "bindataTestdataSymlinkSrcFile1"
        )]
    );
}

#[cfg(unix)]
#[rstest]
fn test_scan_single_directory(testdata: TempDir) {
    let config = config_for(testdata.path(), &[("./testdata/symlinkSrc", true)]);
    let expected: Vec<_> = (1..=4)
        .map(|n| {
            entry(
                &format!("testdata/symlinkSrc/file{n}"),
                &format!("bindataTestdataSymlinkSrcFile{n}"),
            )
        })
        .collect();
    assert_eq!(scan(&config), expected);
}

#[cfg(unix)]
#[rstest]
fn test_scan_directory_and_file(testdata: TempDir) {
    let config = config_for(
        testdata.path(),
        &[
            ("./testdata/in/a", false),
            ("./testdata/in/a/test.asset", false),
        ],
    );
    assert_eq!(
        scan(&config),
        vec![entry(
            "testdata/in/a/test.asset",
            "bindataTestdataInATestasset"
        )]
    );
}

#[cfg(unix)]
#[rstest]
fn test_scan_symlink_to_file(testdata: TempDir) {
    let config = config_for(testdata.path(), &[("./testdata/symlinkFile", true)]);
    assert_eq!(
        scan(&config),
        vec![entry(
            "testdata/symlinkFile/file1",
            "bindataTestdataSymlinkSrcFile1"
        )]
    );
}

#[cfg(unix)]
#[rstest]
#[case(&[("testdata/symlinkSrc", true), ("testdata/symlinkFile", true)])]
#[case(&[("testdata/symlinkFile", true), ("testdata/symlinkSrc", true)])]
fn test_scan_symlink_aliases_share_function(testdata: TempDir, #[case] inputs: &[(&str, bool)]) {
    let config = config_for(testdata.path(), inputs);
    let mut expected = vec![entry(
        "testdata/symlinkFile/file1",
        "bindataTestdataSymlinkSrcFile1",
    )];
    expected.extend((1..=4).map(|n| {
        entry(
            &format!("testdata/symlinkSrc/file{n}"),
            &format!("bindataTestdataSymlinkSrcFile{n}"),
        )
    }));
    assert_eq!(scan(&config), expected);
}

#[cfg(unix)]
#[rstest]
fn test_scan_symlink_to_directory(testdata: TempDir) {
    let config = config_for(
        testdata.path(),
        &[
            ("testdata/symlinkParent", true),
            ("testdata/symlinkSrc", true),
        ],
    );
    let assets = scan(&config);
    assert_eq!(assets.len(), 8);
    for n in 1..=4 {
        let func = format!("bindataTestdataSymlinkSrcFile{n}");
        assert!(assets.contains(&entry(
            &format!("testdata/symlinkParent/symlinkTarget/file{n}"),
            &func
        )));
        assert!(assets.contains(&entry(&format!("testdata/symlinkSrc/file{n}"), &func)));
    }
}

#[cfg(unix)]
#[rstest]
fn test_scan_recursive_symlink(testdata: TempDir) {
    let config = config_for(testdata.path(), &[("testdata/symlinkRecursiveParent", true)]);
    assert_eq!(
        scan(&config),
        vec![entry(
            "testdata/symlinkRecursiveParent/file1",
            "bindataTestdataSymlinkRecursiveParentFile1"
        )]
    );
}

#[cfg(unix)]
#[rstest]
fn test_scan_dupname(testdata: TempDir) {
    let config = config_for(testdata.path(), &[("./testdata/dupname/", true)]);
    assert_eq!(
        scan(&config),
        vec![
            entry("testdata/dupname/foo/bar", "bindataTestdataDupnameFooBar"),
            entry("testdata/dupname/foo_bar", "bindataTestdataDupnameFoobar"),
        ]
    );
}

#[rstest]
fn test_scan_non_recursive_stays_at_one_level() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "site/index.html", b"<html/>");
    write_file(tmp.path(), "site/css/main.css", b"body{}");

    let flat = config_for(tmp.path(), &[("site", false)]);
    let names: Vec<String> = scan(&flat).into_iter().map(|a| a.0).collect();
    assert_eq!(names, vec!["site/index.html"]);

    let deep = config_for(tmp.path(), &[("site", true)]);
    let names: Vec<String> = scan(&deep).into_iter().map(|a| a.0).collect();
    assert_eq!(names, vec!["site/css/main.css", "site/index.html"]);
}

#[rstest]
fn test_scan_ignore_pattern() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "in/a.ignore", b"skip");
    write_file(tmp.path(), "in/b.keep", b"keep");

    let mut config = config_for(tmp.path(), &[("in", true)]);
    config.ignore.push(compile_pattern(r"\.ignore$").unwrap());
    let names: Vec<String> = scan(&config).into_iter().map(|a| a.0).collect();
    assert_eq!(names, vec!["in/b.keep"]);
}

#[rstest]
fn test_scan_include_pattern() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "web/app.js", b"js");
    write_file(tmp.path(), "web/site.css", b"css");
    write_file(tmp.path(), "web/readme.txt", b"txt");

    let mut config = config_for(tmp.path(), &[("web", true)]);
    // The input directory itself has to match for the walk to enter it.
    config.include.push(compile_pattern(r"^web$").unwrap());
    config.include.push(compile_pattern(r"\.(css|js)$").unwrap());
    let names: Vec<String> = scan(&config).into_iter().map(|a| a.0).collect();
    assert_eq!(names, vec!["web/app.js", "web/site.css"]);
}

#[rstest]
fn test_scan_prefix_is_removed() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "prefix/to/be/removed/file.txt", b"data");

    let mut config = config_for(tmp.path(), &[(".", true)]);
    config.prefix = Some(compile_pattern("prefix/*/to/be/removed").unwrap());
    let assets = scan(&config);
    assert_eq!(assets.len(), 1);
    let (name, path, func_name) = &assets[0];
    assert_eq!(name, "file.txt");
    assert_eq!(path, "prefix/to/be/removed/file.txt");
    assert_eq!(func_name, "bindataFiletxt");
}

#[rstest]
fn test_scan_prefix_removing_everything() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "only.txt", b"data");

    let mut config = config_for(tmp.path(), &[("only.txt", false)]);
    config.prefix = Some(compile_pattern(".*").unwrap());
    let err = FsScanner::new(&config).unwrap().scan_all().unwrap_err();
    assert!(matches!(err, Error::InvalidAsset(ref p) if p == Path::new("only.txt")));
}

#[rstest]
fn test_scan_absolute_input_has_no_leading_slash() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "abs/file.txt", b"data");
    let abs = dunce::canonicalize(tmp.path().join("abs/file.txt")).unwrap();

    let config = Config {
        cwd: Some(tmp.path().to_path_buf()),
        input: vec![InputConfig::new(abs.clone(), false)],
        ..Config::default()
    };
    let assets = scan(&config);
    assert_eq!(assets.len(), 1);
    assert!(!assets[0].0.starts_with('/'));
    assert!(assets[0].0.ends_with("abs/file.txt"));
    assert_eq!(assets[0].1, to_slash(&abs));
}

#[rstest]
fn test_scan_first_input_wins() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "one/shared.txt", b"first");
    write_file(tmp.path(), "two/shared.txt", b"second");

    let mut config = config_for(tmp.path(), &[("one", true), ("two", true)]);
    config.prefix = Some(compile_pattern("^(one|two)/").unwrap());
    let assets = scan(&config);
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].0, "shared.txt");
    assert_eq!(assets[0].1, "one/shared.txt");
}

#[rstest]
fn test_scan_collision_suffix() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "a/b.txt", b"1");
    write_file(tmp.path(), "a/bt/xt", b"2");
    write_file(tmp.path(), "a/b_txt", b"3");

    let config = config_for(tmp.path(), &[("a", true)]);
    let funcs: Vec<String> = scan(&config).into_iter().map(|a| a.2).collect();
    // Names sort as a/b.txt, a/b_txt, a/bt/xt; collisions are resolved in
    // scan order, which is the same here.
    assert_eq!(funcs, vec!["bindataABtxt", "bindataABtxt_2", "bindataABtXt"]);
}

#[cfg(unix)]
#[rstest]
fn test_scan_dangling_symlink_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("in")).unwrap();
    std::os::unix::fs::symlink("missing", tmp.path().join("in/broken")).unwrap();

    let config = config_for(tmp.path(), &[("in", true)]);
    let err = FsScanner::new(&config).unwrap().scan_all().unwrap_err();
    assert!(matches!(err, Error::ScanFailed { ref path, .. } if path == Path::new("in/broken")));
}

#[cfg(unix)]
#[rstest]
fn test_scan_skips_sockets() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "in/file.txt", b"data");
    let _listener = std::os::unix::net::UnixListener::bind(tmp.path().join("in/sock")).unwrap();

    let config = config_for(tmp.path(), &[("in", true)]);
    let names: Vec<String> = scan(&config).into_iter().map(|a| a.0).collect();
    assert_eq!(names, vec!["in/file.txt"]);
}

#[rstest]
fn test_reset_keeps_assets() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "d/x.txt", b"x");

    let config = config_for(tmp.path(), &[("d", false)]);
    let mut scanner = FsScanner::new(&config).unwrap();
    scanner.scan_input(&config.input[0]).unwrap();
    assert_eq!(scanner.registry().len(), 1);

    // The directory was visited already; a reset makes it walkable again
    // but the duplicate asset is dropped.
    scanner.reset();
    scanner.scan(Path::new("d"), None, false).unwrap();
    assert_eq!(scanner.into_registry().len(), 1);
}
