// src/tests/helpers_tests.rs

#![allow(non_snake_case)]

use std::path::Path;

use crate::debug::helpers::{
    create_temp_file,
    create_temp_key_file,
    fpath_nonexistent,
    ntf_fpath,
    STR_TEMPFILE_PREFIX,
};

#[test]
fn test_create_temp_key_file() {
    let ntf = create_temp_key_file(&["a", "", "b"]);
    let data = std::fs::read(ntf.path()).unwrap();
    assert_eq!(data, b"a\n\nb\n");
}

#[test]
fn test_create_temp_file_prefix() {
    let ntf = create_temp_file("x");
    let path = ntf_fpath(&ntf);
    let name = Path::new(&path).file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with(STR_TEMPFILE_PREFIX), "{:?}", name);
}

#[test]
fn test_fpath_nonexistent() {
    assert!(!Path::new(&fpath_nonexistent()).exists());
}
