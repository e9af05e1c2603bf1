// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Byte encoders producing Go string literals.

use std::fmt::Write as _;
use std::io::{self, Write};

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

#[cfg(test)]
#[path = "./encode_test.rs"]
mod encode_test;

const LOWER_HEX: &[u8; 16] = b"0123456789abcdef";

/// Number of bytes written on one line of a hex-escaped literal.
pub const BYTES_PER_LINE: usize = 12;

const BACKQUOTE: &[u8] = b"`";
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writer turning every byte into a `\xHH` escape inside a Go string literal.
///
/// The caller opens the literal with `"`; every [`BYTES_PER_LINE`] bytes the
/// literal is closed and continued on the next line with `" +\n\t"`, so the
/// result is still one string value. The caller closes the final `"`.
pub struct HexWriter<W> {
    inner: W,
    count: usize,
}

impl<W: Write> HexWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    /// Number of bytes encoded so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for HexWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        let mut out = Vec::with_capacity(buf.len() * 4 + (buf.len() / BYTES_PER_LINE + 1) * 5);
        for &b in buf {
            if self.count > 0 && self.count % BYTES_PER_LINE == 0 {
                out.extend_from_slice(b"\" +\n\t\"");
            }
            out.extend_from_slice(&[
                b'\\',
                b'x',
                LOWER_HEX[usize::from(b >> 4)],
                LOWER_HEX[usize::from(b & 0x0f)],
            ]);
            self.count += 1;
        }
        self.inner.write_all(&out)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Whether `data` can be emitted as a Go raw string literal.
pub fn is_raw_safe(data: &[u8]) -> bool {
    !data.contains(&0) && std::str::from_utf8(data).is_ok()
}

/// Prepare valid UTF-8 content as a Go raw string expression.
///
/// Backquotes and byte order marks cannot appear inside a raw literal, so the
/// content is split around them and the pieces are joined again with `+`,
/// bisecting recursively so the expression nesting stays balanced.
pub fn sanitize(data: &[u8]) -> Vec<u8> {
    let mut chunks: Vec<&[u8]> = Vec::new();
    for (i, part) in split_bytes(data, BACKQUOTE).into_iter().enumerate() {
        if i > 0 {
            chunks.push(BACKQUOTE);
        }
        for (j, chunk) in split_bytes(part, BOM).into_iter().enumerate() {
            if j > 0 {
                chunks.push(BOM);
            }
            if !chunk.is_empty() {
                chunks.push(chunk);
            }
        }
    }

    let mut out = Vec::with_capacity(data.len() + 2);
    if chunks.is_empty() {
        out.extend_from_slice(b"``");
        return out;
    }
    sanitize_chunks(&mut out, &chunks);
    out
}

fn sanitize_chunks(out: &mut Vec<u8>, chunks: &[&[u8]]) {
    let n = chunks.len();
    if n >= 2 {
        out.push(b'(');
        sanitize_chunks(out, &chunks[..n / 2]);
        out.extend_from_slice(b" + ");
        sanitize_chunks(out, &chunks[n / 2..]);
        out.push(b')');
        return;
    }

    match chunks[0] {
        BACKQUOTE => out.extend_from_slice(b"\"`\""),
        BOM => out.extend_from_slice(br#""\xEF\xBB\xBF""#),
        text => {
            out.push(b'`');
            out.extend_from_slice(text);
            out.push(b'`');
        }
    }
}

fn split_bytes<'a>(data: &'a [u8], sep: &[u8]) -> Vec<&'a [u8]> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + sep.len() <= data.len() {
        if &data[i..i + sep.len()] == sep {
            parts.push(&data[start..i]);
            i += sep.len();
            start = i;
        } else {
            i += 1;
        }
    }
    parts.push(&data[start..]);
    parts
}

/// Quote arbitrary bytes as an ASCII-only Go interpreted string literal.
///
/// Matches Go's `%+q` verb: printable ASCII is kept, the usual control
/// characters use their short escapes, invalid UTF-8 and other control bytes
/// become `\xHH` and non-ASCII runes become `\uXXXX` or `\UXXXXXXXX`.
pub fn quote_ascii(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() + 2);
    out.push('"');

    let mut rest = data;
    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                push_escaped_str(&mut out, valid, true);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                // valid_up_to guarantees this prefix decodes
                push_escaped_str(&mut out, std::str::from_utf8(valid).unwrap_or_default(), true);
                let bad = err.error_len().unwrap_or(after.len());
                for &b in &after[..bad] {
                    push_hex_byte(&mut out, b);
                }
                rest = &after[bad..];
            }
        }
    }

    out.push('"');
    out
}

/// Quote a string as a Go interpreted string literal, like Go's `%q` verb.
///
/// Printable runes are kept. Control, format, private use and unassigned
/// runes are escaped, and so are separators other than the ASCII space.
pub fn go_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    push_escaped_str(&mut out, s, false);
    out.push('"');
    out
}

fn push_escaped_str(out: &mut String, s: &str, ascii_only: bool) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            c if c.is_ascii() => {
                if c.is_ascii_graphic() || c == ' ' {
                    out.push(c);
                } else {
                    push_hex_byte(out, c as u8);
                }
            }
            c if !ascii_only && is_printable(c) => out.push(c),
            c if (c as u32) < 0x10000 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
    }
}

/// Non-ASCII runes Go's `strconv.IsPrint` accepts.
fn is_printable(c: char) -> bool {
    !matches!(
        c.general_category_group(),
        GeneralCategoryGroup::Other | GeneralCategoryGroup::Separator
    )
}

fn push_hex_byte(out: &mut String, b: u8) {
    out.push_str("\\x");
    out.push(char::from(LOWER_HEX[usize::from(b >> 4)]));
    out.push(char::from(LOWER_HEX[usize::from(b & 0x0f)]));
}
