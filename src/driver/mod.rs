// src/driver/mod.rs

//! The benchmark driver, its configuration, and its errors.

pub mod benchmark;
pub mod config;
pub mod error;
