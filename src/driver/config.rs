// src/driver/config.rs

//! Configuration of one benchmark invocation.

use crate::common::{AdapterArgs, AdapterId, FPath, QUERY_FN_ALIAS};
use crate::driver::error::{BenchError, ResultBench};

/// default `--adapter-id`
pub const ADAPTER_ID_DEFAULT: AdapterId = 2;

/// default `--runs`
pub const RUNS_DEFAULT: usize = 10;

/// What to benchmark and how many times.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BenchConfig {
    /// registry identifier of the adapter to benchmark
    pub adapter_id: AdapterId,
    /// newline-delimited key file
    pub key_fn: FPath,
    /// newline-delimited query file, or [`QUERY_FN_ALIAS`]
    pub query_fn: FPath,
    /// count of timed repetitions
    pub runs: usize,
    /// passed verbatim to the adapter's `construct`
    pub adapter_args: AdapterArgs,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            adapter_id: ADAPTER_ID_DEFAULT,
            key_fn: FPath::new(),
            query_fn: FPath::from(QUERY_FN_ALIAS),
            runs: RUNS_DEFAULT,
            adapter_args: AdapterArgs::new(),
        }
    }
}

impl BenchConfig {
    /// Create a `BenchConfig` with defaults for everything except `key_fn`.
    pub fn new(key_fn: FPath) -> BenchConfig {
        BenchConfig {
            key_fn,
            ..Default::default()
        }
    }

    /// Is the query sequence the key sequence?
    pub fn queries_are_keys(&self) -> bool {
        self.query_fn == QUERY_FN_ALIAS
    }

    /// Check values that do not depend on the registry or the filesystem.
    pub fn validate(&self) -> ResultBench<()> {
        if self.key_fn.is_empty() {
            return Err(BenchError::MissingKeyFile);
        }
        if self.runs == 0 {
            return Err(BenchError::InvalidRuns(self.runs));
        }

        Ok(())
    }
}
