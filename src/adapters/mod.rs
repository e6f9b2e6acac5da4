// src/adapters/mod.rs

//! The [`ContainerAdapter`] contract and thin adapters over concrete
//! container implementations.
//!
//! An adapter exposes membership semantics only: insert a key with the
//! [`PRESENT`] sentinel, search for a key. No deletion, no iteration.
//!
//! Re-insertion of a key already present is adapter-specific; each adapter
//! documents whether it is a no-op or an overwrite. Every adapter returns
//! `false` from [`insert`] for a key already present and `true` from
//! [`search`] afterwards.
//!
//! [`PRESENT`]: crate::common::PRESENT
//! [`insert`]: ContainerAdapter::insert
//! [`search`]: ContainerAdapter::search

use std::hash::{BuildHasher, Hash};
use std::io::{Result, Write};

use ::hashbrown::HashMap;

use crate::driver::error::{BenchError, ResultBench};

pub mod hash_trie;
pub mod hashbrown_maps;
pub mod lru_map;
pub mod registry;
pub mod std_maps;
pub mod tries;

/// Uniform capabilities of a benchmarked container.
pub trait ContainerAdapter {
    /// Create an instance ready for insertions.
    ///
    /// `args` are free-form user-passed arguments; an adapter ignores
    /// arguments it does not use.
    fn construct(args: &[String]) -> ResultBench<Self>
    where
        Self: Sized;

    /// Stable human-readable name of the variant, for listing without an
    /// instance.
    fn variant_name() -> String
    where
        Self: Sized;

    /// Insert `key` with the sentinel. Return `true` if `key` was not present.
    fn insert(&mut self, key: &[u8]) -> bool;

    /// Is `key` present with the sentinel?
    fn search(&self, key: &[u8]) -> bool;

    /// Stable human-readable name of this instance's variant. Only for
    /// reporting.
    fn name(&self) -> String;

    /// Write zero or more `name:value` lines of implementation-specific
    /// statistics.
    fn report_internal_stats(&self, sink: &mut dyn Write) -> Result<()>;
}

/// A boxed [`ContainerAdapter`]; the driver only ever handles these.
pub type AdapterBox = Box<dyn ContainerAdapter>;

/// Build a boxed adapter of a concrete type. Instances of this generic
/// function are the registry's factories.
pub fn construct_boxed<A>(args: &[String]) -> ResultBench<AdapterBox>
where
    A: ContainerAdapter + 'static,
{
    let adapter: A = A::construct(args)?;

    Ok(Box::new(adapter))
}

/// largest accepted capacity exponent for pre-sized adapters
pub const CAPACITY_BITS_MAX: u32 = 24;

/// Parse an optional capacity exponent from `args[0]`, else `default_bits`.
///
/// Shared by the pre-sized variants. The exponent is a growth hint; a
/// pre-sized adapter still grows past `2^bits` keys.
pub(crate) fn capacity_bits_arg(args: &[String], default_bits: u32) -> ResultBench<u32> {
    let arg: &String = match args.first() {
        Some(val) => val,
        None => return Ok(default_bits),
    };
    let bits: u32 = match arg.parse::<u32>() {
        Ok(val) => val,
        Err(err) => {
            return Err(BenchError::InvalidAdapterArg {
                arg: arg.clone(),
                reason: format!("capacity bits must be a number; {}", err),
            });
        }
    };
    if bits > CAPACITY_BITS_MAX {
        return Err(BenchError::InvalidAdapterArg {
            arg: arg.clone(),
            reason: format!("capacity bits must be {} or less", CAPACITY_BITS_MAX),
        });
    }

    Ok(bits)
}

/// Reserve room for `additional` more entries in `map`.
///
/// A failed allocation is an [`InvalidAdapterArg`] for `arg` instead of an
/// abort.
///
/// [`InvalidAdapterArg`]: BenchError::InvalidAdapterArg
pub(crate) fn try_reserve_entries<K, V, S>(
    map: &mut HashMap<K, V, S>,
    additional: usize,
    arg: &str,
) -> ResultBench<()>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    match map.try_reserve(additional) {
        Ok(()) => Ok(()),
        Err(err) => Err(BenchError::InvalidAdapterArg {
            arg: arg.to_string(),
            reason: format!("cannot reserve {} entries; {:?}", additional, err),
        }),
    }
}
