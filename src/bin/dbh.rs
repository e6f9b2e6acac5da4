// src/bin/dbh.rs

//! Driver program _dbh_ drives the [_dbhlib_].
//!
//! Processes user-passed command-line arguments into a [`BenchConfig`], runs
//! the benchmark, and prints the `key:value` report to STDOUT.
//!
//! Every failure prints an error message, the usage, and the adapter listing
//! to STDERR, then exits with value `1`. Passing `--list-all` prints only the
//! adapter listing and also exits with value `1`.
//!
//! If passed CLI option `--summary`, prints a program summary to STDERR after
//! the report.
//!
//! [_dbhlib_]: dbhlib
//! [`BenchConfig`]: dbhlib::driver::config::BenchConfig

#![allow(non_camel_case_types)]

// first setup the custom global allocator
use ::dbhlib::common::AllocatorChosen;

cfg_if::cfg_if! {
    if #[cfg(feature = "jemalloc")] {
        use ::tikv_jemallocator::Jemalloc;
        #[global_allocator]
        static GLOBAL: Jemalloc = Jemalloc;
        const ALLOCATOR_CHOSEN: AllocatorChosen = AllocatorChosen::Jemalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "jemalloc";
    }
    else if #[cfg(feature = "mimalloc")] {
        use ::mimalloc::MiMalloc;
        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
        const ALLOCATOR_CHOSEN: AllocatorChosen = AllocatorChosen::Mimalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "mimalloc";
    }
    else {
        const ALLOCATOR_CHOSEN: AllocatorChosen = AllocatorChosen::System;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "system";
    }
}

use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

use ::anyhow::Context;
use ::clap::error::ErrorKind;
use ::clap::{CommandFactory, Parser};
use ::const_format::concatcp;
use ::dbhlib::adapters::registry::REGISTRY;
use ::dbhlib::common::{AdapterId, QUERY_FN_ALIAS};
use ::dbhlib::debug::printers::e_err;
use ::dbhlib::driver::benchmark::{run, BenchmarkResult};
use ::dbhlib::driver::config::{BenchConfig, ADAPTER_ID_DEFAULT, RUNS_DEFAULT};
use ::dbhlib::printer::report::{write_adapter_list, write_report};
use ::dbhlib::printer::summary::write_summary;
#[allow(unused_imports)]
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

#[cfg(debug_assertions)]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "\nDEBUG BUILD";
#[cfg(not(debug_assertions))]
const CLI_HELP_AFTER_NOTE_DEBUG: &str = "";

/// `--help` _afterword_ message.
const CLI_HELP_AFTER: &str = concatcp!(
    "\
KEY_FN and QUERY_FN are newline-delimited files, one key per line.
Every byte up to the newline is part of the key, including a '\\r'.
An empty line is an empty key.

Adapter arguments are passed after \"--\". The pre-sized adapters,
hashbrown_reserved_* and hash_trie_*, accept one argument, the initial
capacity as a power of two from 0 to 24, e.g. \"-- 18\". They still grow
past that capacity.

Exit value is 0 only if the benchmark completed and every run found the same
count of queries.

---

Version: ", env!("CARGO_PKG_VERSION"), r#"
MSRV: "#, env!("CARGO_PKG_RUST_VERSION"), r#"
Allocator: "#, CLI_HELP_AFTER_ALLOCATOR, r#"
License: "#, env!("CARGO_PKG_LICENSE"), r#"
"#,
    CLI_HELP_AFTER_NOTE_DEBUG,
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
// * `key_fn` is not `required` in clap; a missing `key_fn` must print the
//   adapter listing like every other configuration error.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "dbh",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(Dictionary Benchmark Harness)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "Allocator: ", CLI_HELP_AFTER_ALLOCATOR , "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Adapter identifier to benchmark. See --list-all.
    #[clap(
        short = 'w',
        long = "adapter-id",
        verbatim_doc_comment,
        default_value_t = ADAPTER_ID_DEFAULT,
    )]
    adapter_id: AdapterId,

    /// Key file path. Every key is inserted, in file order.
    #[clap(
        short = 'k',
        long = "key-fn",
        verbatim_doc_comment,
    )]
    key_fn: Option<String>,

    /// Query file path. Every query is searched, in file order.
    /// Pass "-" to search the keys of KEY_FN.
    #[clap(
        short = 'q',
        long = "query-fn",
        verbatim_doc_comment,
        default_value_t = String::from(QUERY_FN_ALIAS),
    )]
    query_fn: String,

    /// Count of timed repetitions. Must be 1 or more.
    #[clap(
        short = 'r',
        long,
        verbatim_doc_comment,
        default_value_t = RUNS_DEFAULT,
    )]
    runs: usize,

    /// Print every adapter identifier and name, then exit.
    #[clap(
        short = 'l',
        long = "list-all",
        verbatim_doc_comment,
    )]
    list_all: bool,

    /// Print a summary of the benchmark to STDERR after the report.
    #[clap(
        short = 's',
        long,
        verbatim_doc_comment,
    )]
    summary: bool,

    /// Arguments passed to the adapter's constructor.
    #[clap(
        last = true,
        verbatim_doc_comment,
    )]
    adapter_args: Vec<String>,
}

/// Map the parsed `CLI_Args` to a `BenchConfig`. Values are validated by the
/// benchmark driver.
fn cli_process_args(args: CLI_Args) -> BenchConfig {
    defn!();
    let config = BenchConfig {
        adapter_id: args.adapter_id,
        key_fn: args.key_fn.unwrap_or_default(),
        query_fn: args.query_fn,
        runs: args.runs,
        adapter_args: args.adapter_args,
    };
    defx!("{:?}", config);

    config
}

/// Print the usage and the adapter listing to STDERR.
fn print_usage_and_listing() {
    let usage = CLI_Args::command().render_usage();
    eprintln!("{}", usage);
    print_listing();
}

/// Print the adapter listing to STDERR.
fn print_listing() {
    let mut stderr = std::io::stderr().lock();
    if let Err(err) = write_adapter_list(&mut stderr, &REGISTRY) {
        e_err!("failed to print adapter listing; {}", err);
    }
}

/// Print the report to STDOUT and, if requested, the summary to STDERR.
fn print_result(
    result: &BenchmarkResult,
    cli_opt_summary: bool,
    start_time: Instant,
) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, result).context("failed to write the report to STDOUT")?;
    stdout.flush().context("failed to flush STDOUT")?;

    if cli_opt_summary {
        let mut stderr = std::io::stderr().lock();
        write_summary(&mut stderr, result, start_time.elapsed(), ALLOCATOR_CHOSEN)
            .context("failed to write the summary to STDERR")?;
    }

    Ok(())
}

pub fn main() -> ExitCode {
    let start_time = Instant::now();
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let args: CLI_Args = match CLI_Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                    defx!("help or version");
                    return ExitCode::SUCCESS;
                }
                _ => {
                    let _ = err.print();
                    print_listing();
                    defx!("parse error {:?}", err.kind());
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    if args.list_all {
        print_listing();
        defx!("list_all");
        return ExitCode::FAILURE;
    }

    let cli_opt_summary: bool = args.summary;
    let config: BenchConfig = cli_process_args(args);

    let result: BenchmarkResult = match run(&config) {
        Ok(result) => result,
        Err(err) => {
            e_err!("{}", err);
            print_usage_and_listing();
            defx!("error class {:?}", err.class());
            return ExitCode::FAILURE;
        }
    };

    let exitcode = match print_result(&result, cli_opt_summary, start_time) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            e_err!("{:#}", err);
            ExitCode::FAILURE
        }
    };
    defx!("exitcode {:?}", exitcode);

    exitcode
}
