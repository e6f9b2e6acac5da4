// src/adapters/std_maps.rs

//! Adapters over `std::collections` maps.
//!
//! Re-insertion is a no-op for both: the stored key and sentinel are left
//! untouched. Each insert is a single lookup; the passed key is copied
//! before the lookup and dropped if it was already present.

use std::collections::{BTreeMap, HashMap};
use std::io::{Result, Write};
use std::mem::size_of;

use crate::adapters::ContainerAdapter;
use crate::common::{Key, Sentinel, PRESENT};
use crate::driver::error::ResultBench;

/// Ordered map, [`BTreeMap`].
#[derive(Default)]
pub struct StdBTreeMapAdapter {
    map: BTreeMap<Key, Sentinel>,
}

impl ContainerAdapter for StdBTreeMapAdapter {
    fn construct(_args: &[String]) -> ResultBench<Self> {
        Ok(StdBTreeMapAdapter::default())
    }

    fn variant_name() -> String {
        String::from("std_btree_map")
    }

    fn insert(&mut self, key: &[u8]) -> bool {
        self.map.insert(key.to_vec(), PRESENT).is_none()
    }

    fn search(&self, key: &[u8]) -> bool {
        self.map.get(key) == Some(&PRESENT)
    }

    fn name(&self) -> String {
        Self::variant_name()
    }

    fn report_internal_stats(&self, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "num_keys:{}", self.map.len())
    }
}

/// Hash map with the default SipHash hasher, [`HashMap`].
#[derive(Default)]
pub struct StdHashMapAdapter {
    map: HashMap<Key, Sentinel>,
}

impl ContainerAdapter for StdHashMapAdapter {
    fn construct(_args: &[String]) -> ResultBench<Self> {
        Ok(StdHashMapAdapter::default())
    }

    fn variant_name() -> String {
        String::from("std_hash_map")
    }

    fn insert(&mut self, key: &[u8]) -> bool {
        self.map.insert(key.to_vec(), PRESENT).is_none()
    }

    fn search(&self, key: &[u8]) -> bool {
        self.map.get(key) == Some(&PRESENT)
    }

    fn name(&self) -> String {
        Self::variant_name()
    }

    fn report_internal_stats(&self, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "num_keys:{}", self.map.len())?;
        writeln!(sink, "capacity:{}", self.map.capacity())?;
        // key heap allocations are not counted
        writeln!(sink, "bucket_bytes:{}", self.map.capacity() * size_of::<(Key, Sentinel)>())
    }
}
