//! JSON Lines (NDJSON) helpers for streaming sequences in and partitions out.
//!
//! - **Reader**: an iterator that *owns* its buffered reader, yielding one
//!   `Result<Sequence>` per line so callers can surface per-line errors.
//! - **Writer**: drains any iterator of serializable items lazily, one JSON
//!   value per line, optionally stopping after a limit.
//!
//! We treat both `.jsonl` and `.ndjson` as equivalent line-delimited JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::io::{parse_sequence, Sequence};

/// Owning JSONL iterator: one sequence (JSON array) per line.
pub struct JsonlSequenceIter<R> {
    rdr: R,
    buf: String,
    line_no: usize,
}

impl<R: BufRead> JsonlSequenceIter<R> {
    /// Wrap an already-buffered reader.
    pub fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::with_capacity(8 << 10),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for JsonlSequenceIter<R> {
    type Item = Result<Sequence>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.rdr.read_line(&mut self.buf) {
            Ok(0) => None, // EOF
            Ok(_) => {
                self.line_no += 1;
                let line = self.buf.trim_end_matches(['\n', '\r']);
                if line.is_empty() {
                    return Some(Err(anyhow::anyhow!(
                        "parse jsonl line {}: empty line",
                        self.line_no
                    )));
                }
                let line_no = self.line_no;
                Some(parse_sequence(line).with_context(|| format!("parse jsonl line {line_no}")))
            }
            Err(e) => Some(Err(e).with_context(|| format!("read line {}", self.line_no + 1))),
        }
    }
}

/// Stream read: one sequence per line of a `.jsonl` / `.ndjson` file.
///
/// # Errors
/// Opening the file may fail. Individual items are `Err` if a line is
/// malformed.
pub fn stream_sequences_jsonl<P: AsRef<Path>>(
    path: P,
) -> Result<JsonlSequenceIter<BufReader<File>>> {
    let f = File::open(path.as_ref())
        .with_context(|| format!("open {}", path.as_ref().display()))?;
    Ok(JsonlSequenceIter::new(BufReader::new(f)))
}

/// Write items as JSON Lines, pulling from `items` only as needed.
///
/// Stops after `limit` items when set, leaving the rest of the iterator
/// unconsumed. Returns the number of lines written.
pub fn write_jsonl_stream<W, I>(mut w: W, items: I, limit: Option<usize>) -> Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut n = 0usize;
    for it in items.into_iter().take(limit.unwrap_or(usize::MAX)) {
        serde_json::to_writer(&mut w, &it).context("serialize jsonl item")?;
        w.write_all(b"\n").context("write newline")?;
        n += 1;
    }
    w.flush().context("flush writer")?;
    Ok(n)
}
