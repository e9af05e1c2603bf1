// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::testutil::eval_go_string;

#[rstest]
#[case("hello", "`hello`")]
#[case("hello\nworld", "`hello\nworld`")]
#[case("`ello", "(\"`\" + `ello`)")]
#[case(
    "`a`e`i`o`u`",
    "(((\"`\" + `a`) + (\"`\" + (`e` + \"`\"))) + ((`i` + (\"`\" + `o`)) + (\"`\" + (`u` + \"`\"))))"
)]
#[case("\u{FEFF}`s away!", "(\"\\xEF\\xBB\\xBF\" + (\"`\" + `s away!`))")]
#[case("", "``")]
fn test_sanitize(#[case] input: &str, #[case] expected: &str) {
    let out = sanitize(input.as_bytes());
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[rstest]
fn test_hex_writer_lowercase_escapes() {
    let mut w = HexWriter::new(Vec::new());
    w.write_all(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a]).unwrap();
    assert_eq!(w.count(), 7);
    assert_eq!(
        String::from_utf8(w.into_inner()).unwrap(),
        r"\x89\x50\x4e\x47\x0d\x0a\x1a"
    );
}

#[rstest]
fn test_hex_writer_breaks_lines_every_twelve_bytes() {
    let mut w = HexWriter::new(Vec::new());
    // Split across calls to check the counter survives between writes.
    w.write_all(&[0u8; 5]).unwrap();
    w.write_all(&[0u8; 20]).unwrap();
    let text = String::from_utf8(w.into_inner()).unwrap();

    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("{}\" +", r"\x00".repeat(12)));
    assert_eq!(lines[1], format!("\t\"{}\" +", r"\x00".repeat(12)));
    assert_eq!(lines[2], format!("\t\"{}", r"\x00"));
}

#[rstest]
fn test_hex_writer_empty_write() {
    let mut w = HexWriter::new(Vec::new());
    assert_eq!(w.write(&[]).unwrap(), 0);
    assert!(w.into_inner().is_empty());
}

#[rstest]
#[case(b"plain text\n", true)]
#[case(b"nul\x00inside", false)]
#[case(b"\xff\xfe invalid", false)]
#[case(b"", true)]
fn test_is_raw_safe(#[case] data: &[u8], #[case] expected: bool) {
    assert_eq!(is_raw_safe(data), expected);
}

#[rstest]
#[case(b"\x00abc", r#""\x00abc""#)]
#[case(b"tab\there\n", r#""tab\there\n""#)]
#[case(b"\x07\x08\x0c\x0b\r", r#""\a\b\f\v\r""#)]
#[case(b"quote \" and \\", r#""quote \" and \\""#)]
#[case(b"\x7f\xff", r#""\x7f\xff""#)]
#[case("é\u{1F600}".as_bytes(), r#""\u00e9\U0001f600""#)]
fn test_quote_ascii(#[case] data: &[u8], #[case] expected: &str) {
    assert_eq!(quote_ascii(data), expected);
}

#[rstest]
#[case("testdata/in/a/test.asset", r#""testdata/in/a/test.asset""#)]
#[case("été/\"x\"", r#""été/\"x\"""#)]
#[case("a\tb", r#""a\tb""#)]
#[case::bom("a\u{FEFF}b", r#""a\ufeffb""#)]
#[case::zero_width_joiner("\u{200D}", r#""\u200d""#)]
#[case::no_break_space("a\u{00A0}b", r#""a\u00a0b""#)]
#[case::line_separator("\u{2028}", r#""\u2028""#)]
#[case::private_use("\u{E000}", r#""\ue000""#)]
#[case::tag("\u{E0001}", r#""\U000e0001""#)]
#[case::symbol_and_mark("\u{2603}e\u{0301}", "\"\u{2603}e\u{0301}\"")]
fn test_go_quote(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(go_quote(input), expected);
}

fn hex_literal(data: &[u8]) -> Vec<u8> {
    let mut w = HexWriter::new(b"\"".to_vec());
    w.write_all(data).unwrap();
    let mut out = w.into_inner();
    out.push(b'"');
    out
}

proptest! {
    #[test]
    fn prop_sanitize_round_trips(s in "[a-z`\u{FEFF} \n]{0,40}") {
        let expr = sanitize(s.as_bytes());
        prop_assert_eq!(eval_go_string(&expr), s.as_bytes().to_vec());
    }

    #[test]
    fn prop_hex_literal_round_trips(data in proptest::collection::vec(any::<u8>(), 0..100)) {
        prop_assert_eq!(eval_go_string(&hex_literal(&data)), data);
    }

    #[test]
    fn prop_quote_ascii_round_trips(data in proptest::collection::vec(any::<u8>(), 0..100)) {
        let quoted = quote_ascii(&data);
        prop_assert!(quoted.is_ascii());
        prop_assert_eq!(eval_go_string(quoted.as_bytes()), data);
    }
}
