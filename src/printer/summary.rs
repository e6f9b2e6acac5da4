// src/printer/summary.rs

//! CLI option `--summary` printing.
//! Only used by `dbh.rs`.

use std::io::{Result, Write};
use std::time::Duration;

use crate::common::AllocatorChosen;
use crate::driver::benchmark::BenchmarkResult;

/// Write the program summary of `result` to `writer`.
///
/// `run_time` is the whole program run time.
pub fn write_summary<W: Write>(
    writer: &mut W,
    result: &BenchmarkResult,
    run_time: Duration,
    allocator_chosen: AllocatorChosen,
) -> Result<()> {
    writeln!(writer, "Program Summary:\n")?;
    writeln!(writer, "Adapter                : {}", result.name)?;
    writeln!(writer, "Runs                   : {}", result.runs)?;
    writeln!(writer, "Keys                   : {}", result.num_keys)?;
    writeln!(writer, "Queries                : {}", result.num_queries)?;
    for (run, measurement) in result.run_measurements.iter().enumerate() {
        writeln!(
            writer,
            "Run {:<4}               : insert {} (µs/key), search {} (µs/query)",
            run, measurement.insert_us_per_key, measurement.search_us_per_query,
        )?;
    }
    writeln!(writer, "Construction Time      : {:.6} (seconds)", result.construct_secs)?;
    writeln!(writer, "Process Size Gained    : {} (bytes)", result.process_size)?;
    writeln!(writer, "Program Run Time       : {:.3} (seconds)", run_time.as_secs_f64())?;
    writeln!(writer, "Allocator              : {}", allocator_chosen)?;

    writer.flush()
}
