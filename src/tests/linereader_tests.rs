// src/tests/linereader_tests.rs

#![allow(non_snake_case)]

use std::io::Cursor;
use std::rc::Rc;

use ::test_case::test_case;

use crate::common::{Count, FPath, Key, Keys, KeysP, QUERY_FN_ALIAS};
use crate::debug::helpers::{
    create_temp_file,
    create_temp_file_bytes,
    create_temp_key_file,
    fpath_nonexistent,
    ntf_fpath,
};
use crate::driver::error::{BenchError, InputRole, IoOp};
use crate::readers::linereader::{load_keys, load_queries, read_keys, LineReader};

fn keys_of(strs: &[&str]) -> Keys {
    strs.iter().map(|s| s.as_bytes().to_vec()).collect()
}

#[test_case(b"", &[]; "empty")]
#[test_case(b"a\nb\na\n", &["a", "b", "a"]; "duplicates")]
#[test_case(b"a\nb", &["a", "b"]; "unterminated final line")]
#[test_case(b"\n", &[""]; "one empty line")]
#[test_case(b"\n\n", &["", ""]; "two empty lines")]
#[test_case(b"a\n\nb\n", &["a", "", "b"]; "empty line between")]
#[test_case(b"a\r\nb\n", &["a\r", "b"]; "carriage return kept")]
#[test_case(b" a \n", &[" a "]; "spaces kept")]
fn test_read_keys(data: &[u8], expect: &[&str]) {
    let keys: Keys = read_keys(Cursor::new(data)).unwrap();
    assert_eq!(keys, keys_of(expect));
}

#[test]
fn test_read_keys_non_utf8() {
    let data: &[u8] = &[0xFF, 0xFE, b'\n', 0x00, b'\n'];
    let keys: Keys = read_keys(Cursor::new(data)).unwrap();
    assert_eq!(keys, vec![vec![0xFF, 0xFE], vec![0x00]]);
}

#[test]
fn test_LineReader_counts() {
    let data: &[u8] = b"abc\nde\nf";
    let mut linereader = LineReader::new(Cursor::new(data));
    let mut line = Key::new();
    let mut lines: Count = 0;
    while linereader.next_line(&mut line).unwrap() {
        lines += 1;
    }
    assert!(line.is_empty());
    assert_eq!(lines, 3);
    assert_eq!(linereader.count_lines_processed(), 3);
    assert_eq!(linereader.count_bytes_processed(), data.len() as Count);
}

#[test]
fn test_LineReader_open_file() {
    let ntf = create_temp_file("one\ntwo\n");
    let mut linereader = LineReader::open(&ntf_fpath(&ntf)).unwrap();
    let mut line = Key::new();
    assert!(linereader.next_line(&mut line).unwrap());
    assert_eq!(line, b"one");
    assert!(linereader.next_line(&mut line).unwrap());
    assert_eq!(line, b"two");
    assert!(!linereader.next_line(&mut line).unwrap());
}

#[test]
fn test_LineReader_open_nonexistent() {
    assert!(LineReader::open(&fpath_nonexistent()).is_err());
}

#[test]
fn test_load_keys() {
    let ntf = create_temp_key_file(&["a", "b", "a"]);
    let keys: KeysP = load_keys(&ntf_fpath(&ntf), InputRole::KeyFn).unwrap();
    assert_eq!(*keys, keys_of(&["a", "b", "a"]));
}

#[test]
fn test_load_keys_bytes() {
    let ntf = create_temp_file_bytes(&[b'a', 0xC0, b'\n', b'b']);
    let keys: KeysP = load_keys(&ntf_fpath(&ntf), InputRole::KeyFn).unwrap();
    assert_eq!(*keys, vec![vec![b'a', 0xC0], vec![b'b']]);
}

#[test_case(InputRole::KeyFn; "key_fn")]
#[test_case(InputRole::QueryFn; "query_fn")]
fn test_load_keys_nonexistent(role: InputRole) {
    let path: FPath = fpath_nonexistent();
    match load_keys(&path, role) {
        Err(BenchError::Io { op, role: role_, path: path_, .. }) => {
            assert_eq!(op, IoOp::Open);
            assert_eq!(role_, role);
            assert_eq!(path_, path);
        }
        Err(err) => panic!("unexpected error {}", err),
        Ok(keys) => panic!("loaded {:?}", keys),
    }
}

#[test]
fn test_load_queries_alias_shares() {
    let ntf = create_temp_key_file(&["a", "b", "a"]);
    let keys: KeysP = load_keys(&ntf_fpath(&ntf), InputRole::KeyFn).unwrap();
    let queries: KeysP = load_queries(&FPath::from(QUERY_FN_ALIAS), &keys).unwrap();
    assert!(Rc::ptr_eq(&keys, &queries));
    // element-wise equal, duplicates included
    assert_eq!(*queries, keys_of(&["a", "b", "a"]));
}

#[test]
fn test_load_queries_file() {
    let ntf_k = create_temp_key_file(&["a", "b"]);
    let ntf_q = create_temp_key_file(&["a", "b"]);
    let keys: KeysP = load_keys(&ntf_fpath(&ntf_k), InputRole::KeyFn).unwrap();
    let queries: KeysP = load_queries(&ntf_fpath(&ntf_q), &keys).unwrap();
    assert!(!Rc::ptr_eq(&keys, &queries));
    assert_eq!(*keys, *queries);
}

#[test]
fn test_load_queries_nonexistent() {
    let keys: KeysP = Rc::new(Keys::new());
    match load_queries(&fpath_nonexistent(), &keys) {
        Err(BenchError::Io { role, .. }) => assert_eq!(role, InputRole::QueryFn),
        Err(err) => panic!("unexpected error {}", err),
        Ok(queries) => panic!("loaded {:?}", queries),
    }
}

/// a directory opens but cannot be read
#[cfg(unix)]
#[test]
fn test_load_keys_directory_read_error() {
    let tmpdir = ::tempfile::tempdir().unwrap();
    let path: FPath = tmpdir.path().to_str().unwrap().to_string();
    match load_keys(&path, InputRole::KeyFn) {
        Err(err @ BenchError::Io { op: IoOp::Read, .. }) => {
            assert!(err.to_string().starts_with("read error: key_fn = "), "{}", err);
        }
        Err(err) => panic!("unexpected error {}", err),
        Ok(keys) => panic!("loaded {:?}", keys),
    }
}
