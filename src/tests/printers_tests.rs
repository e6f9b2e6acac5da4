// src/tests/printers_tests.rs

#![allow(non_snake_case)]

use ::test_case::test_case;

use crate::debug::printers::{char_to_char_noraw, de_wrn, e_err, e_wrn, key_to_String_noraw};

#[test_case('a', 'a'; "ascii")]
#[test_case('\r', '␍'; "CR")]
#[test_case('\n', '␊'; "LF")]
#[test_case('\t', '␉'; "TAB")]
#[test_case('\0', '␀'; "NUL")]
fn test_char_to_char_noraw(c: char, expect: char) {
    assert_eq!(char_to_char_noraw(c), expect);
}

#[test_case(b"", ""; "empty")]
#[test_case(b"abc", "abc"; "ascii")]
#[test_case(b"a\r", "a␍"; "carriage return")]
#[test_case(&[b'a', 0xFF], "a\u{FFFD}"; "invalid utf8")]
fn test_key_to_String_noraw(key: &[u8], expect: &str) {
    assert_eq!(key_to_String_noraw(key), expect);
}

#[test]
fn test_printer_macros() {
    e_err!("test {}", "e_err");
    e_wrn!("test {}", "e_wrn");
    de_wrn!("test {}", "de_wrn");
}
