// src/adapters/hash_trie.rs

//! A byte-wise trie whose edges live in one hash table, [`HashTrieAdapter`].
//!
//! Node `0` is the root. The child of node `n` along byte `b` is found by
//! looking up `(n, b)` in the edge table, so a node costs no memory beyond
//! its incoming edge and its terminal flag. New nodes take the next dense
//! identifier.
//!
//! Re-insertion is a no-op.

use std::io::{Result, Write};

use ::hashbrown::hash_map::Entry;
use ::hashbrown::HashMap;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::adapters::{capacity_bits_arg, try_reserve_entries, ContainerAdapter};
use crate::driver::error::{BenchError, ResultBench};

/// Identifier of a trie node; an index into the terminal flags.
pub type NodeId = usize;

/// the root node, the empty prefix
const ROOT: NodeId = 0;

/// Hash-table trie with room reserved for `2^CAPA_BITS` nodes.
///
/// The capacity is a growth hint; the trie grows past it.
/// Adapter argument `args[0]`, if passed, overrides `CAPA_BITS`.
pub struct HashTrieAdapter<const CAPA_BITS: u32> {
    /// `(parent, byte)` to child
    edges: HashMap<(NodeId, u8), NodeId>,
    /// is a key ending at this node present, indexed by `NodeId`
    terminal: Vec<bool>,
    capa_bits: u32,
    num_keys: usize,
}

impl<const CAPA_BITS: u32> HashTrieAdapter<CAPA_BITS> {
    /// Count of nodes, including the root.
    pub fn count_nodes(&self) -> usize {
        self.terminal.len()
    }
}

impl<const CAPA_BITS: u32> ContainerAdapter for HashTrieAdapter<CAPA_BITS> {
    fn construct(args: &[String]) -> ResultBench<Self> {
        let capa_bits: u32 = capacity_bits_arg(args, CAPA_BITS)?;
        let capacity: usize = 1usize << capa_bits;
        defñ!("capa_bits {}, capacity {}", capa_bits, capacity);

        let mut edges: HashMap<(NodeId, u8), NodeId> = HashMap::new();
        try_reserve_entries(&mut edges, capacity, &capa_bits.to_string())?;
        let mut terminal: Vec<bool> = Vec::new();
        if let Err(err) = terminal.try_reserve(capacity) {
            return Err(BenchError::InvalidAdapterArg {
                arg: capa_bits.to_string(),
                reason: format!("cannot reserve {} nodes; {}", capacity, err),
            });
        }
        terminal.push(false);

        Ok(HashTrieAdapter {
            edges,
            terminal,
            capa_bits,
            num_keys: 0,
        })
    }

    fn variant_name() -> String {
        format!("hash_trie_{}", CAPA_BITS)
    }

    fn insert(&mut self, key: &[u8]) -> bool {
        let mut node: NodeId = ROOT;
        for &byte in key.iter() {
            let next: NodeId = self.terminal.len();
            node = match self.edges.entry((node, byte)) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    entry.insert(next);
                    self.terminal.push(false);
                    next
                }
            };
        }
        if self.terminal[node] {
            return false;
        }
        self.terminal[node] = true;
        self.num_keys += 1;

        true
    }

    fn search(&self, key: &[u8]) -> bool {
        let mut node: NodeId = ROOT;
        for &byte in key.iter() {
            node = match self.edges.get(&(node, byte)) {
                Some(child) => *child,
                None => return false,
            };
        }

        self.terminal[node]
    }

    fn name(&self) -> String {
        Self::variant_name()
    }

    fn report_internal_stats(&self, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "capa_bits:{}", self.capa_bits)?;
        writeln!(sink, "num_keys:{}", self.num_keys)?;
        writeln!(sink, "num_nodes:{}", self.count_nodes())?;
        writeln!(sink, "edge_capacity:{}", self.edges.capacity())
    }
}
