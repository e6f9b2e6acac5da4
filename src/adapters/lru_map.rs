// src/adapters/lru_map.rs

//! Adapter over [`lru::LruCache`], a hash map threaded with a recency list.
//!
//! The cache is unbounded so no key is ever evicted. Re-insertion overwrites
//! the sentinel and moves the key to the most recently used position.
//! Searching uses `peek` so it never changes the recency order; a run's
//! search pass cannot affect later runs.

use std::io::{Result, Write};

use ::lru::LruCache;

use crate::adapters::ContainerAdapter;
use crate::common::{Key, Sentinel, PRESENT};
use crate::driver::error::ResultBench;

/// Unbounded [`LruCache`]; never evicts.
pub struct LruMapAdapter {
    cache: LruCache<Key, Sentinel>,
}

impl ContainerAdapter for LruMapAdapter {
    fn construct(_args: &[String]) -> ResultBench<Self> {
        Ok(LruMapAdapter {
            cache: LruCache::unbounded(),
        })
    }

    fn variant_name() -> String {
        String::from("lru_map")
    }

    fn insert(&mut self, key: &[u8]) -> bool {
        self.cache
            .put(key.to_vec(), PRESENT)
            .is_none()
    }

    fn search(&self, key: &[u8]) -> bool {
        self.cache.peek(key) == Some(&PRESENT)
    }

    fn name(&self) -> String {
        Self::variant_name()
    }

    fn report_internal_stats(&self, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "num_keys:{}", self.cache.len())
    }
}
