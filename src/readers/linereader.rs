// src/readers/linereader.rs

//! Implements a [`LineReader`], the reader of newline-delimited key and query
//! files, and the loaders of [`KeysP`] sequences.
//!
//! A line is every byte up to, not including, a `'\n'`. There is no escaping
//! and no other byte is special; a `'\r'` before the `'\n'` stays part of the
//! line. An empty line is a zero-length key. A final line without a
//! terminating `'\n'` is still a line. A final `'\n'` does not begin another
//! line.
//!
//! [`KeysP`]: crate::common::KeysP

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Result};
use std::rc::Rc;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{Count, FPath, Key, Keys, KeysP, QUERY_FN_ALIAS};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::key_to_String_noraw;
use crate::driver::error::{BenchError, InputRole, ResultBench};

/// The newline byte
#[allow(non_upper_case_globals)]
pub const NLu8: u8 = b'\n';

/// Initial capacity of the reusable line buffer
const LINE_CAPACITY: usize = 1024;

/// Reads lines of bytes, in order, from an underlying [`BufRead`].
pub struct LineReader<R: BufRead> {
    reader: R,
    /// `Count` of lines returned
    lines_processed: Count,
    /// `Count` of bytes consumed, including newlines
    bytes_processed: Count,
}

impl<R: BufRead> fmt::Debug for LineReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("lines_processed", &self.lines_processed)
            .field("bytes_processed", &self.bytes_processed)
            .finish()
    }
}

impl LineReader<BufReader<File>> {
    /// Open the file at `path` for reading lines.
    pub fn open(path: &FPath) -> Result<LineReader<BufReader<File>>> {
        defn!("({:?})", path);
        let file: File = File::open(path)?;
        defx!();

        Ok(LineReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> LineReader<R> {
        LineReader {
            reader,
            lines_processed: 0,
            bytes_processed: 0,
        }
    }

    /// Read the next line into `line`, replacing its contents.
    ///
    /// Returns `false` when there are no more lines; `line` is then empty.
    /// Reusing one `line` avoids an allocation per line.
    pub fn next_line(&mut self, line: &mut Key) -> Result<bool> {
        line.clear();
        let read: usize = self.reader.read_until(NLu8, line)?;
        if read == 0 {
            return Ok(false);
        }
        self.bytes_processed += read as Count;
        if line.last() == Some(&NLu8) {
            line.pop();
        }
        self.lines_processed += 1;

        Ok(true)
    }

    pub fn count_lines_processed(&self) -> Count {
        self.lines_processed
    }

    pub fn count_bytes_processed(&self) -> Count {
        self.bytes_processed
    }
}

/// Read all lines from `reader`.
pub fn read_keys<R: BufRead>(reader: R) -> Result<Keys> {
    let mut keys = Keys::new();
    let mut linereader = LineReader::new(reader);
    let mut line = Key::with_capacity(LINE_CAPACITY);
    while linereader.next_line(&mut line)? {
        keys.push(line.clone());
    }
    defñ!(
        "read {} lines, {} bytes, first line {:?}",
        linereader.count_lines_processed(),
        linereader.count_bytes_processed(),
        keys.first().map(|key| key_to_String_noraw(key))
    );

    Ok(keys)
}

/// Load the file at `path` as a shared key sequence.
pub fn load_keys(path: &FPath, role: InputRole) -> ResultBench<KeysP> {
    defn!("({:?}, {})", path, role);
    let file: File = match File::open(path) {
        Ok(val) => val,
        Err(err) => {
            defx!("open failed {}", err);
            return Err(BenchError::open(role, path, err));
        }
    };
    let keys: Keys = match read_keys(BufReader::new(file)) {
        Ok(val) => val,
        Err(err) => {
            defx!("read failed {}", err);
            return Err(BenchError::read(role, path, err));
        }
    };
    defx!("loaded {} keys", keys.len());

    Ok(Rc::new(keys))
}

/// Load the query sequence.
///
/// If `query_fn` is [`QUERY_FN_ALIAS`] then return the very same `keys`;
/// nothing is read or copied.
pub fn load_queries(query_fn: &FPath, keys: &KeysP) -> ResultBench<KeysP> {
    if query_fn == QUERY_FN_ALIAS {
        defñ!("query_fn is {:?}, queries are keys", QUERY_FN_ALIAS);
        return Ok(Rc::clone(keys));
    }

    load_keys(query_fn, InputRole::QueryFn)
}
