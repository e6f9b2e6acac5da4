// src/tests/memory_tests.rs

#![allow(non_snake_case)]

use std::cell::Cell;

#[allow(unused_imports)]
use ::more_asserts::assert_gt;
#[allow(unused_imports)]
use ::test_case::test_case;

use crate::measure::memory::{MemoryProbe, ProcessMemoryProbe};

/// returns `samples` in order, then the last sample forever
pub(crate) struct ScriptedProbe {
    samples: Vec<u64>,
    at: Cell<usize>,
}

impl ScriptedProbe {
    pub(crate) fn new(samples: &[u64]) -> ScriptedProbe {
        ScriptedProbe {
            samples: samples.to_vec(),
            at: Cell::new(0),
        }
    }
}

impl MemoryProbe for ScriptedProbe {
    fn resident_bytes(&self) -> u64 {
        let at = self.at.get();
        self.at.set(at + 1);
        let index = at.min(self.samples.len() - 1);

        self.samples[index]
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
#[test]
fn test_ProcessMemoryProbe_resident_bytes_nonzero() {
    assert_gt!(ProcessMemoryProbe.resident_bytes(), 0);
}

/// whole pages, as procfs counts them
#[cfg(any(target_os = "linux", target_os = "android"))]
#[test]
fn test_ProcessMemoryProbe_resident_bytes_pages() {
    let page_size: u64 = ::procfs::page_size();
    assert_gt!(page_size, 0);
    assert_eq!(ProcessMemoryProbe.resident_bytes() % page_size, 0);
}

#[cfg(target_os = "macos")]
#[test]
fn test_ProcessMemoryProbe_resident_bytes_nonzero_macos() {
    assert_gt!(ProcessMemoryProbe.resident_bytes(), 0);
}

#[test]
fn test_ProcessMemoryProbe_delta_since_future() {
    assert_eq!(ProcessMemoryProbe.delta_since(u64::MAX), 0);
}

#[test_case(&[100, 4196], 4096; "grows")]
#[test_case(&[100, 100], 0; "same")]
#[test_case(&[4196, 100], 0; "shrinks")]
fn test_delta_since(samples: &[u64], expect: u64) {
    let probe = ScriptedProbe::new(samples);
    let before = probe.resident_bytes();
    assert_eq!(probe.delta_since(before), expect);
}
