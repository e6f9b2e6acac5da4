// src/measure/mod.rs

//! Low-level measurement primitives: a [`Timer`], a [`MemoryProbe`], and
//! aggregators of per-run timings.
//!
//! [`Timer`]: crate::measure::timer::Timer
//! [`MemoryProbe`]: crate::measure::memory::MemoryProbe

pub mod memory;
pub mod stats;
pub mod timer;
