// src/debug/helpers.rs

//! Miscellaneous helper functions for testing; temporary key files.

use crate::common::FPath;

#[allow(unused_imports)] // XXX: clippy wrongly marks this as unused
use std::io::Write; // for `NamedTempFile.write_all`

use ::lazy_static::lazy_static;
use ::si_trace_print::defñ;

#[doc(hidden)]
pub use ::tempfile::NamedTempFile;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// temporary file helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// NamedTempFile instances default to this file name prefix.
/// Makes leftover files easy to find and delete.
/// See <https://github.com/Stebalien/tempfile/issues/183>.
pub const STR_TEMPFILE_PREFIX: &str = "tmp-dbh-test-";

lazy_static! {
    pub static ref STRING_TEMPFILE_PREFIX: String = String::from(STR_TEMPFILE_PREFIX);
}

/// Small helper function for copying `NamedTempFile` path to a `FPath`.
pub fn ntf_fpath(ntf: &NamedTempFile) -> FPath {
    FPath::from(ntf.path().to_str().unwrap())
}

/// Testing helper function to write a `[u8]` to a temporary file.
///
/// BUG: `NamedTempFile` created within `lazy_static` will fail to remove itself
///      <https://github.com/Stebalien/tempfile/issues/183>.
pub fn create_temp_file_bytes(data: &[u8]) -> NamedTempFile {
    let mut ntf = match ::tempfile::Builder::new()
        // use known prefix for easier cleanup
        .prefix::<str>(&STRING_TEMPFILE_PREFIX)
        .tempfile()
    {
        Ok(val) => val,
        Err(err) => {
            panic!("tempfile::Builder::new()..tempfile() return Err {}", err);
        }
    };
    match ntf.write_all(data) {
        Ok(_) => {}
        Err(err) => {
            panic!("NamedTempFile::write_all() return Err {}", err);
        }
    }
    defñ!("created {:?} with {} bytes", ntf.path(), data.len());

    ntf
}

/// Testing helper function to write a `str` to a temporary file.
pub fn create_temp_file(data: &str) -> NamedTempFile {
    create_temp_file_bytes(data.as_bytes())
}

/// Testing helper function to write one key per line to a temporary file.
/// Every line, including the last, is newline-terminated.
pub fn create_temp_key_file(keys: &[&str]) -> NamedTempFile {
    let mut data = String::with_capacity(keys.iter().map(|k| k.len() + 1).sum());
    for key in keys.iter() {
        data.push_str(key);
        data.push('\n');
    }

    create_temp_file(data.as_str())
}

/// A path that does not exist, for testing failures to open files.
pub fn fpath_nonexistent() -> FPath {
    let tmpdir = ::tempfile::tempdir().unwrap();
    let path = tmpdir
        .path()
        .join("does-not-exist.keys");
    // `tmpdir` is removed on drop so the path certainly does not exist
    FPath::from(path.to_str().unwrap())
}
