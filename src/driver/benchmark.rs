// src/driver/benchmark.rs

//! Implements the benchmark driver, [`run`].
//!
//! One invocation:
//!
//! 1. resolves the adapter identifier in the [`Registry`],
//! 2. streams the key file once into a throwaway adapter, measuring the
//!    resident memory gained and the elapsed time,
//! 3. loads the key sequence and the query sequence,
//! 4. repeats _construct, insert all keys, search all queries_ `runs` times,
//!    timing the insert pass and the search pass of each run,
//! 5. aggregates the per-run timings.
//!
//! Every run must find the same count of queries as the first run. A
//! disagreement means the adapter is buggy (non-deterministic, or state leaks
//! across instances) and the invocation fails with
//! [`BenchError::CorrectnessViolation`].
//!
//! Nothing here is concurrent; timing a multi-threaded harness would add
//! scheduling jitter to microsecond-level measurements.
//!
//! [`Registry`]: crate::adapters::registry::Registry

use std::time::Duration;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::adapters::registry::{AdapterDescriptor, Registry, REGISTRY};
use crate::adapters::AdapterBox;
use crate::common::{Count, FPath, Key, KeysP};
use crate::debug::printers::e_wrn;
use crate::driver::config::BenchConfig;
use crate::driver::error::{BenchError, InputRole, ResultBench};
use crate::measure::memory::{MemoryProbe, ProcessMemoryProbe};
use crate::measure::stats;
use crate::measure::timer::{TimeUnit, Timer};
use crate::readers::linereader::{load_keys, load_queries, LineReader};

/// Measurements of one repetition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunMeasurement {
    /// insert pass elapsed microseconds divided by count of keys
    pub insert_us_per_key: f64,
    /// search pass elapsed microseconds divided by count of queries
    pub search_us_per_query: f64,
    /// count of queries found
    pub ok: usize,
    /// count of queries not found
    pub ng: usize,
}

/// Aggregate measurements of all repetitions.
#[derive(Clone, Debug, Default)]
pub struct BenchmarkResult {
    /// adapter display name
    pub name: String,
    pub key_fn: FPath,
    pub query_fn: FPath,
    /// count of repetitions
    pub runs: usize,
    pub num_keys: usize,
    pub num_queries: usize,
    /// mean of [`RunMeasurement::insert_us_per_key`]
    pub insert_us_per_key: f64,
    /// minimum of [`RunMeasurement::insert_us_per_key`]
    pub best_insert_us_per_key: f64,
    /// mean of [`RunMeasurement::search_us_per_query`]
    pub search_us_per_query: f64,
    /// minimum of [`RunMeasurement::search_us_per_query`]
    pub best_search_us_per_query: f64,
    /// count of queries found, same for every run
    pub ok: usize,
    /// count of queries not found, same for every run
    pub ng: usize,
    /// resident memory gained while streaming the key file into a fresh
    /// adapter, in bytes
    pub process_size: u64,
    /// seconds elapsed streaming the key file into a fresh adapter
    pub construct_secs: f64,
    /// every run's measurements, in run order
    pub run_measurements: Vec<RunMeasurement>,
    /// `name:value` lines written by the last constructed adapter
    pub internal_stats: String,
}

/// Elapsed microseconds per item. Zero items is defined as zero.
pub fn per_item_micros(elapsed: Duration, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }

    TimeUnit::Micros.convert(elapsed) / count as f64
}

/// Benchmark `config` using the default [`REGISTRY`] and the
/// [`ProcessMemoryProbe`].
pub fn run(config: &BenchConfig) -> ResultBench<BenchmarkResult> {
    run_with(&REGISTRY, &ProcessMemoryProbe, config)
}

/// Benchmark `config` using adapters from `registry`, sampling memory with
/// `probe`.
pub fn run_with(
    registry: &Registry,
    probe: &dyn MemoryProbe,
    config: &BenchConfig,
) -> ResultBench<BenchmarkResult> {
    defn!("{:?}", config);
    config.validate()?;

    let descriptor: &AdapterDescriptor = registry.resolve(config.adapter_id)?;
    defo!("resolved {:?}", descriptor);

    let (process_size, construct_secs) = measure_construction(descriptor, probe, config)?;
    defo!("process_size {}, construct_secs {}", process_size, construct_secs);

    let keys: KeysP = load_keys(&config.key_fn, InputRole::KeyFn)?;
    let queries: KeysP = load_queries(&config.query_fn, &keys)?;
    defo!("num_keys {}, num_queries {}", keys.len(), queries.len());

    let mut run_measurements: Vec<RunMeasurement> = Vec::with_capacity(config.runs);
    let mut adapter_last: Option<AdapterBox> = None;
    for run in 0..config.runs {
        // drop the previous instance before constructing the next
        drop(adapter_last.take());
        let mut adapter: AdapterBox = descriptor.construct(&config.adapter_args)?;
        let measurement = run_once(&mut adapter, &keys, &queries);
        defo!("run {} {:?}", run, measurement);
        if let Some(first) = run_measurements.first() {
            check_consistent(run, first, &measurement)?;
        }
        run_measurements.push(measurement);
        adapter_last = Some(adapter);
    }

    let mut internal_stats: Vec<u8> = Vec::new();
    if let Some(adapter) = adapter_last.as_ref() {
        if let Err(err) = adapter.report_internal_stats(&mut internal_stats) {
            // the timings stand; the stats are cut short
            e_wrn!("{} failed to report internal stats; {}", adapter.name(), err);
        }
    }

    let result = aggregate(
        descriptor,
        config,
        &run_measurements,
        keys.len(),
        queries.len(),
        process_size,
        construct_secs,
        String::from_utf8_lossy(&internal_stats).into_owned(),
    );
    defx!("ok {}, ng {}", result.ok, result.ng);

    Ok(result)
}

/// Stream every line of the key file into a new adapter.
///
/// Return the resident memory gained, in bytes, and the elapsed seconds.
/// The key file is streamed, not loaded, so the memory gained is due to the
/// adapter.
fn measure_construction(
    descriptor: &AdapterDescriptor,
    probe: &dyn MemoryProbe,
    config: &BenchConfig,
) -> ResultBench<(u64, f64)> {
    defn!();
    let mut linereader = match LineReader::open(&config.key_fn) {
        Ok(val) => val,
        Err(err) => {
            defx!("open failed {}", err);
            return Err(BenchError::open(InputRole::KeyFn, &config.key_fn, err));
        }
    };
    let resident_before: u64 = probe.resident_bytes();
    let mut adapter: AdapterBox = descriptor.construct(&config.adapter_args)?;

    let mut key = Key::with_capacity(1024);
    let timer = Timer::start();
    loop {
        match linereader.next_line(&mut key) {
            Ok(true) => {
                adapter.insert(&key);
            }
            Ok(false) => break,
            Err(err) => {
                defx!("read failed {}", err);
                return Err(BenchError::read(InputRole::KeyFn, &config.key_fn, err));
            }
        }
    }
    let construct_secs: f64 = timer.elapsed_secs();
    let process_size: u64 = probe.delta_since(resident_before);
    let _lines: Count = linereader.count_lines_processed();
    defx!("{} lines, {} bytes gained, {} seconds", _lines, process_size, construct_secs);

    Ok((process_size, construct_secs))
}

/// One repetition: insert all `keys` then search all `queries` in `adapter`.
pub fn run_once(
    adapter: &mut AdapterBox,
    keys: &KeysP,
    queries: &KeysP,
) -> RunMeasurement {
    let ((), insert_elapsed) = Timer::measure(|| {
        for key in keys.iter() {
            adapter.insert(key);
        }
    });

    let ((ok, ng), search_elapsed) = Timer::measure(|| {
        let mut ok: usize = 0;
        let mut ng: usize = 0;
        for query in queries.iter() {
            if adapter.search(query) {
                ok += 1;
            } else {
                ng += 1;
            }
        }
        (ok, ng)
    });
    debug_assert_eq!(ok + ng, queries.len(), "ok + ng must be the count of queries");

    RunMeasurement {
        insert_us_per_key: per_item_micros(insert_elapsed, keys.len()),
        search_us_per_query: per_item_micros(search_elapsed, queries.len()),
        ok,
        ng,
    }
}

/// The correctness oracle; run `run` must find what the first run found.
pub fn check_consistent(
    run: usize,
    first: &RunMeasurement,
    this: &RunMeasurement,
) -> ResultBench<()> {
    if first.ok != this.ok || first.ng != this.ng {
        defñ!("run {} disagrees with first run", run);
        return Err(BenchError::CorrectnessViolation {
            run,
            ok: this.ok,
            ng: this.ng,
            expected_ok: first.ok,
            expected_ng: first.ng,
        });
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn aggregate(
    descriptor: &AdapterDescriptor,
    config: &BenchConfig,
    run_measurements: &[RunMeasurement],
    num_keys: usize,
    num_queries: usize,
    process_size: u64,
    construct_secs: f64,
    internal_stats: String,
) -> BenchmarkResult {
    let insert_times: Vec<f64> = run_measurements
        .iter()
        .map(|m| m.insert_us_per_key)
        .collect();
    let search_times: Vec<f64> = run_measurements
        .iter()
        .map(|m| m.search_us_per_query)
        .collect();
    let first: RunMeasurement = run_measurements
        .first()
        .copied()
        .unwrap_or_default();

    BenchmarkResult {
        name: descriptor.name.clone(),
        key_fn: config.key_fn.clone(),
        query_fn: config.query_fn.clone(),
        runs: run_measurements.len(),
        num_keys,
        num_queries,
        insert_us_per_key: stats::mean(&insert_times),
        best_insert_us_per_key: stats::min(&insert_times),
        search_us_per_query: stats::mean(&search_times),
        best_search_us_per_query: stats::min(&search_times),
        ok: first.ok,
        ng: first.ng,
        process_size,
        construct_secs,
        run_measurements: run_measurements.to_vec(),
        internal_stats,
    }
}
