// src/tests/report_tests.rs

#![allow(non_snake_case)]

use std::time::Duration;

use crate::adapters::registry::{Registry, REGISTRY};
use crate::common::AllocatorChosen;
use crate::driver::benchmark::{BenchmarkResult, RunMeasurement};
use crate::printer::report::{write_adapter_list, write_report, EXTRA_STATS_HEADER};
use crate::printer::summary::write_summary;

fn new_result() -> BenchmarkResult {
    BenchmarkResult {
        name: String::from("std_btree_map"),
        key_fn: String::from("/tmp/keys"),
        query_fn: String::from("-"),
        runs: 2,
        num_keys: 3,
        num_queries: 2,
        insert_us_per_key: 0.25,
        best_insert_us_per_key: 0.125,
        search_us_per_query: 1.5,
        best_search_us_per_query: 1.0,
        ok: 1,
        ng: 1,
        process_size: 4096,
        construct_secs: 0.5,
        run_measurements: vec![
            RunMeasurement { insert_us_per_key: 0.375, search_us_per_query: 2.0, ok: 1, ng: 1 },
            RunMeasurement { insert_us_per_key: 0.125, search_us_per_query: 1.0, ok: 1, ng: 1 },
        ],
        internal_stats: String::from("num_keys:2\n"),
    }
}

fn report_string(result: &BenchmarkResult) -> String {
    let mut buffer: Vec<u8> = Vec::new();
    write_report(&mut buffer, result).unwrap();

    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_write_report_exact() {
    let expect = "\
mode:measure
name:std_btree_map
key_fn:/tmp/keys
query_fn:-
insert_runs:2
num_keys:3
insert_us_per_key:0.25
best_insert_us_per_key:0.125
search_runs:2
num_queries:2
search_us_per_query:1.5
best_search_us_per_query:1
ok:1
ng:1
process_size:4096
-- extra stats --
num_keys:2
";
    assert_eq!(report_string(&new_result()), expect);
}

#[test]
fn test_write_report_no_stats() {
    let mut result = new_result();
    result.internal_stats = String::new();
    let report = report_string(&result);
    assert!(report.ends_with(&format!("process_size:4096\n{}\n", EXTRA_STATS_HEADER)), "{:?}", report);
}

#[test]
fn test_write_report_every_line_key_value() {
    let report = report_string(&new_result());
    for line in report.lines().filter(|line| *line != EXTRA_STATS_HEADER) {
        assert!(line.contains(':'), "{:?}", line);
    }
}

#[test]
fn test_write_adapter_list_REGISTRY() {
    let mut buffer: Vec<u8> = Vec::new();
    write_adapter_list(&mut buffer, &REGISTRY).unwrap();
    let listing = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), REGISTRY.len() + 1);
    assert_eq!(lines[0], "wrapper_ids:");
    assert_eq!(lines[1], "  -  1: std_btree_map");
    assert_eq!(lines[2], "  -  2: std_hash_map");
    assert_eq!(lines[8], "  -  8: patricia_map");
    assert_eq!(lines[12], "  - 12: hash_trie_20");
}

#[test]
fn test_write_adapter_list_empty() {
    let mut buffer: Vec<u8> = Vec::new();
    write_adapter_list(&mut buffer, &Registry::new()).unwrap();
    assert_eq!(buffer, b"wrapper_ids:\n");
}

#[test]
fn test_write_summary() {
    let mut buffer: Vec<u8> = Vec::new();
    write_summary(&mut buffer, &new_result(), Duration::from_millis(1_250), AllocatorChosen::System).unwrap();
    let summary = String::from_utf8(buffer).unwrap();
    assert!(summary.starts_with("Program Summary:\n"), "{:?}", summary);
    assert!(summary.contains("Adapter                : std_btree_map\n"), "{:?}", summary);
    assert!(summary.contains("Construction Time      : 0.500000 (seconds)\n"), "{:?}", summary);
    assert!(summary.contains("Program Run Time       : 1.250 (seconds)\n"), "{:?}", summary);
    assert!(summary.contains("Allocator              : system\n"), "{:?}", summary);
    assert_eq!(summary.matches("(µs/query)").count(), 2);
}
