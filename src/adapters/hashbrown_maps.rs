// src/adapters/hashbrown_maps.rs

//! Adapters over [`hashbrown::HashMap`], the SwissTable hash map.
//!
//! Re-insertion is a no-op. Each insert is a single probe and a new key is
//! copied only when it is absent.

use std::hash::BuildHasher;
use std::io::{Result, Write};
use std::mem::size_of;

use ::hashbrown::hash_map::EntryRef;
use ::hashbrown::HashMap;

use crate::adapters::{capacity_bits_arg, try_reserve_entries, ContainerAdapter};
use crate::common::{Key, Sentinel, PRESENT};
use crate::driver::error::ResultBench;

/// Insert `key` only if absent. Return `true` if it was absent.
pub(crate) fn insert_absent<S: BuildHasher>(map: &mut HashMap<Key, Sentinel, S>, key: &[u8]) -> bool {
    match map.entry_ref(key) {
        EntryRef::Occupied(_) => false,
        EntryRef::Vacant(entry) => {
            entry.insert(PRESENT);
            true
        }
    }
}

fn write_hashbrown_stats(map: &HashMap<Key, Sentinel>, sink: &mut dyn Write) -> Result<()> {
    writeln!(sink, "num_keys:{}", map.len())?;
    writeln!(sink, "capacity:{}", map.capacity())?;
    // one control byte per bucket plus the entry; key heap allocations are not counted
    writeln!(sink, "bucket_bytes:{}", map.capacity() * (size_of::<(Key, Sentinel)>() + 1))
}

/// Growing [`HashMap`] without a capacity hint.
#[derive(Default)]
pub struct HashbrownMapAdapter {
    map: HashMap<Key, Sentinel>,
}

impl ContainerAdapter for HashbrownMapAdapter {
    fn construct(_args: &[String]) -> ResultBench<Self> {
        Ok(HashbrownMapAdapter::default())
    }

    fn variant_name() -> String {
        String::from("hashbrown_hash_map")
    }

    fn insert(&mut self, key: &[u8]) -> bool {
        insert_absent(&mut self.map, key)
    }

    fn search(&self, key: &[u8]) -> bool {
        self.map.get(key) == Some(&PRESENT)
    }

    fn name(&self) -> String {
        Self::variant_name()
    }

    fn report_internal_stats(&self, sink: &mut dyn Write) -> Result<()> {
        write_hashbrown_stats(&self.map, sink)
    }
}

/// [`HashMap`] pre-sized for `2^CAPA_BITS` keys; it grows past that.
///
/// Adapter argument `args[0]`, if passed, overrides `CAPA_BITS`.
pub struct HashbrownReservedAdapter<const CAPA_BITS: u32> {
    map: HashMap<Key, Sentinel>,
    capa_bits: u32,
}

impl<const CAPA_BITS: u32> ContainerAdapter for HashbrownReservedAdapter<CAPA_BITS> {
    fn construct(args: &[String]) -> ResultBench<Self> {
        let capa_bits: u32 = capacity_bits_arg(args, CAPA_BITS)?;
        let mut map: HashMap<Key, Sentinel> = HashMap::new();
        try_reserve_entries(&mut map, 1usize << capa_bits, &capa_bits.to_string())?;

        Ok(HashbrownReservedAdapter { map, capa_bits })
    }

    fn variant_name() -> String {
        format!("hashbrown_reserved_{}", CAPA_BITS)
    }

    fn insert(&mut self, key: &[u8]) -> bool {
        insert_absent(&mut self.map, key)
    }

    fn search(&self, key: &[u8]) -> bool {
        self.map.get(key) == Some(&PRESENT)
    }

    fn name(&self) -> String {
        Self::variant_name()
    }

    fn report_internal_stats(&self, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "capa_bits:{}", self.capa_bits)?;
        write_hashbrown_stats(&self.map, sink)
    }
}
