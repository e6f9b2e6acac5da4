// src/lib.rs

//! _dbhlib_ benchmarks interchangeable key-presence containers under an
//! identical workload.
//!
//! See [`driver::benchmark::run`].

pub mod adapters;
pub mod common;
pub mod debug;
pub mod driver;
pub mod measure;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
