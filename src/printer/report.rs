// src/printer/report.rs

//! Write the `key:value` benchmark report and the adapter listing.
//!
//! The report is consumed by scripts; the order of keys is fixed.

use std::io::{Result, Write};

use crate::adapters::registry::Registry;
use crate::driver::benchmark::BenchmarkResult;

/// heading line of the adapter listing
pub const ADAPTER_LIST_HEADER: &str = "wrapper_ids:";

/// separates the aggregate lines from the adapter's own lines
pub const EXTRA_STATS_HEADER: &str = "-- extra stats --";

/// Write the report of `result` to `writer`.
pub fn write_report<W: Write>(
    writer: &mut W,
    result: &BenchmarkResult,
) -> Result<()> {
    writeln!(writer, "mode:measure")?;
    writeln!(writer, "name:{}", result.name)?;
    writeln!(writer, "key_fn:{}", result.key_fn)?;
    writeln!(writer, "query_fn:{}", result.query_fn)?;
    writeln!(writer, "insert_runs:{}", result.runs)?;
    writeln!(writer, "num_keys:{}", result.num_keys)?;
    writeln!(writer, "insert_us_per_key:{}", result.insert_us_per_key)?;
    writeln!(writer, "best_insert_us_per_key:{}", result.best_insert_us_per_key)?;
    writeln!(writer, "search_runs:{}", result.runs)?;
    writeln!(writer, "num_queries:{}", result.num_queries)?;
    writeln!(writer, "search_us_per_query:{}", result.search_us_per_query)?;
    writeln!(writer, "best_search_us_per_query:{}", result.best_search_us_per_query)?;
    writeln!(writer, "ok:{}", result.ok)?;
    writeln!(writer, "ng:{}", result.ng)?;
    writeln!(writer, "process_size:{}", result.process_size)?;
    writeln!(writer, "{}", EXTRA_STATS_HEADER)?;
    // adapter lines are already newline-terminated
    write!(writer, "{}", result.internal_stats)?;

    writer.flush()
}

/// Write every `(id, name)` of `registry` to `writer`.
pub fn write_adapter_list<W: Write>(
    writer: &mut W,
    registry: &Registry,
) -> Result<()> {
    writeln!(writer, "{}", ADAPTER_LIST_HEADER)?;
    for (id, name) in registry.list() {
        writeln!(writer, "  - {:>2}: {}", id, name)?;
    }

    writer.flush()
}
