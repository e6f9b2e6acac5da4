// src/adapters/tries.rs

//! Adapters over byte-string tries from crates.io.
//!
//! Both tries store the [`PRESENT`] sentinel as the value of a key.
//! Re-insertion overwrites the sentinel with itself and returns `false`.
//!
//! [`PRESENT`]: crate::common::PRESENT

use std::io::{Result, Write};

use ::patricia_tree::PatriciaMap;
use ::qp_trie::Trie;

use crate::adapters::ContainerAdapter;
use crate::common::{Key, Sentinel, PRESENT};
use crate::driver::error::ResultBench;

/// Path-compressed radix tree, [`PatriciaMap`].
///
/// A node holds a label of many bytes; a chain of single-child nodes is
/// merged into one node.
pub struct PatriciaMapAdapter {
    map: PatriciaMap<Sentinel>,
}

impl ContainerAdapter for PatriciaMapAdapter {
    fn construct(_args: &[String]) -> ResultBench<Self> {
        Ok(PatriciaMapAdapter {
            map: PatriciaMap::new(),
        })
    }

    fn variant_name() -> String {
        String::from("patricia_map")
    }

    fn insert(&mut self, key: &[u8]) -> bool {
        self.map.insert(key, PRESENT).is_none()
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

/// QP-trie, [`Trie`]; branches on nybbles and keeps each branch's children
/// in a popcount-indexed sparse array.
pub struct QpTrieAdapter {
    trie: Trie<Key, Sentinel>,
}

impl ContainerAdapter for QpTrieAdapter {
    fn construct(_args: &[String]) -> ResultBench<Self> {
        Ok(QpTrieAdapter { trie: Trie::new() })
    }

    fn variant_name() -> String {
        String::from("qp_trie")
    }

    fn insert(&mut self, key: &[u8]) -> bool {
        self.trie
            .insert(key.to_vec(), PRESENT)
            .is_none()
    }

    fn search(&self, key: &[u8]) -> bool {
        self.trie.get(key) == Some(&PRESENT)
    }

    fn name(&self) -> String {
        Self::variant_name()
    }

    fn report_internal_stats(&self, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "num_keys:{}", self.trie.count())
    }
}
