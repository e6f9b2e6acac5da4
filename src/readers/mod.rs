// src/readers/mod.rs

//! "Readers" for _dbhlib_.
//!
//! A [`LineReader`] reads the key file and the query file. Those files are
//! read exactly once per benchmark invocation, plus once more for the
//! memory-measuring pass over the key file.
//!
//! [`LineReader`]: crate::readers::linereader::LineReader

pub mod linereader;
