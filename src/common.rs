// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

use std::fmt;
use std::rc::Rc;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling, command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;

/// user-passed signifier that the query file is the key file
pub const QUERY_FN_ALIAS: &str = "-";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// keys and queries
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A single key or query; one line of an input file without the
/// terminating newline.
pub type Key = Vec<u8>;

/// An ordered sequence of [`Key`]s, in file order, duplicates included.
pub type Keys = Vec<Key>;

/// Shared pointer to a loaded [`Keys`].
///
/// The query sequence may be the very same `KeysP` as the key sequence,
/// see [`QUERY_FN_ALIAS`].
pub type KeysP = Rc<Keys>;

/// Generic count of things.
pub type Count = u64;

/// Registry identifier of an adapter. Valid identifiers begin at `1`.
pub type AdapterId = usize;

/// Value stored alongside every inserted key. Only signals presence.
pub type Sentinel = u8;

/// The "present" [`Sentinel`].
pub const PRESENT: Sentinel = 1;

/// Free-form arguments forwarded to an adapter's `construct`.
pub type AdapterArgs = Vec<String>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// global allocator
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The global allocator compiled into the binary. The allocator affects
/// the `process_size` measurement so it is printed with `--summary`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllocatorChosen {
    System,
    Jemalloc,
    Mimalloc,
}

impl fmt::Display for AllocatorChosen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocatorChosen::System => write!(f, "system"),
            AllocatorChosen::Jemalloc => write!(f, "jemalloc"),
            AllocatorChosen::Mimalloc => write!(f, "mimalloc"),
        }
    }
}
