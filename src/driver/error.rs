// src/driver/error.rs

//! Errors of a benchmark invocation.

use crate::common::{AdapterId, FPath};

/// Broad classes of [`BenchError`]. Every class aborts the invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// Bad configuration; detected before anything is allocated.
    Config,
    /// An input file could not be opened or read.
    Io,
    /// A later run disagreed with the first run. The adapter under test is
    /// buggy, any aggregate would be meaningless.
    CorrectnessViolation,
}

/// Which input file an [`BenchError::Io`] concerns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputRole {
    KeyFn,
    QueryFn,
}

impl std::fmt::Display for InputRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputRole::KeyFn => write!(f, "key_fn"),
            InputRole::QueryFn => write!(f, "query_fn"),
        }
    }
}

/// The input file operation that failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IoOp {
    Open,
    Read,
}

impl std::fmt::Display for IoOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoOp::Open => write!(f, "open"),
            IoOp::Read => write!(f, "read"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("key_fn is required")]
    MissingKeyFile,

    #[error("adapter_id {id} is out of range, valid adapter_id are 1 to {count}")]
    UnknownAdapterId { id: AdapterId, count: usize },

    #[error("runs must be 1 or more, it was {0}")]
    InvalidRuns(usize),

    #[error("invalid adapter argument {arg:?}; {reason}")]
    InvalidAdapterArg { arg: String, reason: String },

    #[error("{op} error: {role} = {path}; {source}")]
    Io {
        op: IoOp,
        role: InputRole,
        path: FPath,
        #[source]
        source: std::io::Error,
    },

    #[error("critical error for search results: run {run} found ok {ok} ng {ng}, first run found ok {expected_ok} ng {expected_ng}")]
    CorrectnessViolation {
        run: usize,
        ok: usize,
        ng: usize,
        expected_ok: usize,
        expected_ng: usize,
    },
}

impl BenchError {
    pub fn class(&self) -> ErrorClass {
        match self {
            BenchError::MissingKeyFile
            | BenchError::UnknownAdapterId { .. }
            | BenchError::InvalidRuns(_)
            | BenchError::InvalidAdapterArg { .. } => ErrorClass::Config,
            BenchError::Io { .. } => ErrorClass::Io,
            BenchError::CorrectnessViolation { .. } => ErrorClass::CorrectnessViolation,
        }
    }

    /// `path` could not be opened.
    pub(crate) fn open(role: InputRole, path: &FPath, source: std::io::Error) -> BenchError {
        BenchError::Io {
            op: IoOp::Open,
            role,
            path: path.clone(),
            source,
        }
    }

    /// `path` was opened but reading it failed.
    pub(crate) fn read(role: InputRole, path: &FPath, source: std::io::Error) -> BenchError {
        BenchError::Io {
            op: IoOp::Read,
            role,
            path: path.clone(),
            source,
        }
    }
}

pub type ResultBench<T> = std::result::Result<T, BenchError>;
