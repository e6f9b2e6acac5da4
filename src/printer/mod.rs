// src/printer/mod.rs

//! The `printer` module writes user-facing output: the benchmark report,
//! the adapter listing, and the `--summary`.

pub mod report;
pub mod summary;
