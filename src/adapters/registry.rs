// src/adapters/registry.rs

//! Implements the adapter [`Registry`], an ordered table mapping an
//! [`AdapterId`] to a name and a factory.
//!
//! Identifiers are the 1-based position within the table so they are
//! always dense and gapless.
//!
//! [`AdapterId`]: crate::common::AdapterId

use std::fmt;

use ::lazy_static::lazy_static;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::adapters::hash_trie::HashTrieAdapter;
use crate::adapters::hashbrown_maps::{HashbrownMapAdapter, HashbrownReservedAdapter};
use crate::adapters::lru_map::LruMapAdapter;
use crate::adapters::std_maps::{StdBTreeMapAdapter, StdHashMapAdapter};
use crate::adapters::tries::{PatriciaMapAdapter, QpTrieAdapter};
use crate::adapters::{construct_boxed, AdapterBox, ContainerAdapter};
use crate::common::AdapterId;
use crate::driver::error::{BenchError, ResultBench};

/// Builds a ready [`AdapterBox`] from user-passed adapter arguments.
pub type AdapterFactory = fn(&[String]) -> ResultBench<AdapterBox>;

/// One entry of the [`Registry`].
#[derive(Clone)]
pub struct AdapterDescriptor {
    pub id: AdapterId,
    pub name: String,
    pub factory: AdapterFactory,
}

impl AdapterDescriptor {
    /// Build a new adapter instance.
    pub fn construct(&self, args: &[String]) -> ResultBench<AdapterBox> {
        (self.factory)(args)
    }
}

impl fmt::Debug for AdapterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// Ordered table of [`AdapterDescriptor`].
#[derive(Debug, Default)]
pub struct Registry {
    descriptors: Vec<AdapterDescriptor>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Append adapter type `A`. It is assigned the next identifier.
    pub fn register<A>(&mut self) -> &mut Registry
    where
        A: ContainerAdapter + 'static,
    {
        self.register_factory(A::variant_name(), construct_boxed::<A>)
    }

    /// Append a named factory. It is assigned the next identifier.
    pub fn register_factory(&mut self, name: String, factory: AdapterFactory) -> &mut Registry {
        let id: AdapterId = self.descriptors.len() + 1;
        defñ!("id {}, name {:?}", id, name);
        self.descriptors.push(AdapterDescriptor { id, name, factory });

        self
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// All `(id, name)` in identifier order.
    pub fn list(&self) -> Vec<(AdapterId, String)> {
        self.descriptors
            .iter()
            .map(|d| (d.id, d.name.clone()))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AdapterDescriptor> {
        self.descriptors.iter()
    }

    /// Find the descriptor for `id`.
    pub fn resolve(&self, id: AdapterId) -> ResultBench<&AdapterDescriptor> {
        if id == 0 || id > self.descriptors.len() {
            return Err(BenchError::UnknownAdapterId {
                id,
                count: self.descriptors.len(),
            });
        }

        Ok(&self.descriptors[id - 1])
    }
}

/// Build the registry of all adapters shipped with this crate.
///
/// The order is part of the user interface; append only.
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register::<StdBTreeMapAdapter>()
        .register::<StdHashMapAdapter>()
        .register::<HashbrownMapAdapter>()
        .register::<LruMapAdapter>()
        .register::<HashbrownReservedAdapter<10>>()
        .register::<HashbrownReservedAdapter<16>>()
        .register::<HashbrownReservedAdapter<20>>()
        .register::<PatriciaMapAdapter>()
        .register::<QpTrieAdapter>()
        .register::<HashTrieAdapter<10>>()
        .register::<HashTrieAdapter<16>>()
        .register::<HashTrieAdapter<20>>();

    registry
}

lazy_static! {
    /// The registry of all adapters shipped with this crate.
    pub static ref REGISTRY: Registry = {
        defñ!("lazy_static! REGISTRY");

        default_registry()
    };
}
