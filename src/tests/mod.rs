// src/tests/mod.rs

//! Tests for _dbhlib_.
//!
//! Tests are placed at `src/tests/`, inside the `dbhlib`. This allows tests
//! crate-internal visibility, e.g. to parse `/proc/self/statm` content
//! without reading the real file.
//!
//! Tests of the `dbh` binary are placed at top-level path `tests/`.

pub mod helpers_tests;
pub mod linereader_tests;
pub mod memory_tests;
pub mod printers_tests;
pub mod report_tests;
