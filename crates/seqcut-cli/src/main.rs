// crates/seqcut-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use seqcut_core::{
    count::{cumulative_cut_count, cut_count, subrange_count},
    enumerate_cuts, enumerate_cuts_upto, enumerate_subrange_recuts, enumerate_tilings,
    io::{create_output, range_sequence, read_sequence_auto, read_sequence_from_reader, Sequence},
    io_jsonl::{stream_sequences_jsonl, write_jsonl_stream, JsonlSequenceIter},
    Partition, Tiling,
};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "seqcut",
    about = "Enumerate contiguous partitions of a sequence",
    long_about = "Enumerate contiguous partitions of a sequence.\n\nReads one sequence (or a JSONL batch), runs one enumeration policy and streams the results as JSON Lines.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Sequence file: `.json` array or `.txt` tokens (`.jsonl` with --batch)
    #[arg(long, conflicts_with_all = ["range", "tokens"])]
    input: Option<PathBuf>,

    /// Use the sequence 0, 1, …, N-1
    #[arg(long, conflicts_with = "tokens")]
    range: Option<u64>,

    /// Inline comma-separated elements, e.g. `--tokens J,O,H,N`
    #[arg(long, value_delimiter = ',')]
    tokens: Option<Vec<String>>,

    /// Treat the input (file or stdin) as JSONL, one sequence per line
    #[arg(long, default_value_t = false)]
    batch: bool,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output path for JSONL results (default: stdout)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Stop after this many results per sequence
    #[arg(long)]
    limit: Option<usize>,

    /// Print the closed-form result count instead of enumerating
    #[arg(long, default_value_t = false, conflicts_with = "check")]
    count: bool,

    /// Verify every result covers the input in order; fail on the first miss
    #[arg(long, default_value_t = false)]
    check: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Cmd {
    /// Every partition with exactly K cuts
    Cuts {
        /// Cut count (negative or ≥ n yields nothing)
        #[arg(long, allow_negative_numbers = true)]
        k: i64,
    },

    /// Every partition with 0..=MAX_CUTS cuts (clamped to n-1)
    Upto {
        /// Maximum cut count (negative yields nothing)
        #[arg(long, allow_negative_numbers = true)]
        max_cuts: i64,
    },

    /// Re-cut the sequence once per contiguous sub-range of its indices
    Recuts,

    /// Non-overlapping fixed-width windows for every width 1..=n
    Tilings,
}

/// One JSONL record in batch mode.
#[derive(Serialize)]
struct Record<I> {
    sequence: usize,
    result: I,
}

#[derive(Serialize)]
struct CountLine {
    count: Option<u128>,
}

type SequenceStream = Box<dyn Iterator<Item = Result<Sequence>>>;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    run(&cli)
}

/// Initialize tracing with an env-driven filter (default INFO), on stderr.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let sequences = open_sequences(&cli.input)?;
    let batch = cli.input.batch;

    let mut w: Box<dyn Write> = match &cli.output.out {
        Some(path) => Box::new(create_output(path)?),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    info!(cmd = ?cli.cmd, batch, limit = ?cli.output.limit, "enumerating");
    let mut total = 0usize;
    let mut seen = 0usize;
    for (i, seq) in sequences.enumerate() {
        let seq = seq.with_context(|| format!("reading sequence {i}"))?;
        let index = batch.then_some(i);
        total += emit(&mut w, &seq, cli.cmd, &cli.output, index)
            .with_context(|| format!("enumerating sequence {i} (n={})", seq.len()))?;
        seen += 1;
    }
    w.flush().context("flush output")?;

    match &cli.output.out {
        Some(path) => println!("Wrote {total} lines for {seen} sequence(s) → {}", path.display()),
        None => info!(lines = total, sequences = seen, "done"),
    }
    Ok(())
}

/// Resolve the input flags into a stream of sequences.
fn open_sequences(input: &InputArgs) -> Result<SequenceStream> {
    if input.batch {
        if input.range.is_some() || input.tokens.is_some() {
            bail!("--batch reads JSONL from --input or stdin; it cannot be combined with --range/--tokens");
        }
        return Ok(match &input.input {
            Some(path) => Box::new(
                stream_sequences_jsonl(path)
                    .with_context(|| format!("open batch {}", path.display()))?,
            ),
            None => Box::new(JsonlSequenceIter::new(io::stdin().lock())),
        });
    }

    let seq = if let Some(path) = &input.input {
        read_sequence_auto(path).with_context(|| format!("reading {}", path.display()))?
    } else if let Some(n) = input.range {
        range_sequence(n)
    } else if let Some(tokens) = &input.tokens {
        tokens.iter().cloned().map(Value::String).collect()
    } else {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            bail!("no input: pass --input, --range or --tokens, or pipe a sequence on stdin");
        }
        read_sequence_from_reader(stdin.lock()).context("reading stdin")?
    };
    Ok(Box::new(std::iter::once(Ok(seq))))
}

/// Non-negative cut counts pass through; negatives select the empty stream.
fn cut_param(k: i64) -> Option<usize> {
    let k = usize::try_from(k).ok();
    if k.is_none() {
        debug!("negative cut count, nothing to enumerate");
    }
    k
}

/// Run one policy over one sequence, returning the number of lines written.
fn emit<W: Write>(
    w: &mut W,
    seq: &[Value],
    cmd: Cmd,
    out: &OutputArgs,
    index: Option<usize>,
) -> Result<usize> {
    let n = seq.len();
    if out.count {
        let count = match cmd {
            Cmd::Cuts { k } => cut_param(k).map_or(Some(0), |k| cut_count(n, k)),
            Cmd::Upto { max_cuts } => {
                cut_param(max_cuts).map_or(Some(0), |m| cumulative_cut_count(n, m))
            }
            Cmd::Recuts => subrange_count(n),
            Cmd::Tilings => Some(n as u128),
        };
        return write_items(w, std::iter::once(CountLine { count }), None, index);
    }

    match cmd {
        Cmd::Cuts { k } => match cut_param(k) {
            Some(k) => write_partitions(w, seq, enumerate_cuts(seq, k), out, index),
            None => Ok(0),
        },
        Cmd::Upto { max_cuts } => match cut_param(max_cuts) {
            Some(m) => write_partitions(w, seq, enumerate_cuts_upto(seq, m), out, index),
            None => Ok(0),
        },
        Cmd::Recuts => write_partitions(w, seq, enumerate_subrange_recuts(seq), out, index),
        Cmd::Tilings => {
            let mut miss = None;
            let items = enumerate_tilings(seq).map_while(|t| {
                if out.check && !tiling_ok(seq, &t) {
                    miss = Some(t.width);
                    return None;
                }
                Some(t)
            });
            let written = write_items(w, items, out.limit, index)?;
            if let Some(width) = miss {
                bail!("tiling of width {width} does not tile the input prefix");
            }
            Ok(written)
        }
    }
}

fn write_partitions<'a, W, I>(
    w: &mut W,
    seq: &'a [Value],
    parts: I,
    out: &OutputArgs,
    index: Option<usize>,
) -> Result<usize>
where
    W: Write,
    I: Iterator<Item = Partition<'a, Value>>,
{
    let mut miss = None;
    let items = parts.enumerate().map_while(|(i, p)| {
        if out.check && !covers(seq, &p) {
            miss = Some(i);
            return None;
        }
        Some(p)
    });
    let written = write_items(w, items, out.limit, index)?;
    if let Some(i) = miss {
        bail!("partition {i} does not reconstruct the input");
    }
    Ok(written)
}

fn write_items<W, I>(w: &mut W, items: I, limit: Option<usize>, index: Option<usize>) -> Result<usize>
where
    W: Write,
    I: Iterator,
    I::Item: Serialize,
{
    match index {
        Some(sequence) => write_jsonl_stream(
            &mut *w,
            items.map(|result| Record { sequence, result }),
            limit,
        ),
        None => write_jsonl_stream(&mut *w, items, limit),
    }
}

/// Non-empty groups whose concatenation is exactly `seq`.
fn covers(seq: &[Value], p: &[&[Value]]) -> bool {
    p.iter().all(|g| !g.is_empty()) && p.iter().flat_map(|g| g.iter()).eq(seq.iter())
}

/// `⌊n / width⌋` full-width windows tiling the prefix of `seq` in order.
fn tiling_ok(seq: &[Value], t: &Tiling<'_, Value>) -> bool {
    t.windows.len() == seq.len() / t.width
        && t.windows.iter().all(|w| w.len() == t.width)
        && t.windows
            .iter()
            .flat_map(|w| w.iter())
            .eq(seq[..t.covered()].iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    fn john() -> Sequence {
        ["J", "O", "H", "N"].iter().map(|s| json!(s)).collect()
    }

    fn out_args(limit: Option<usize>, count: bool, check: bool) -> OutputArgs {
        OutputArgs {
            out: None,
            limit,
            count,
            check,
        }
    }

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_cut_counts() {
        let cli = Cli::try_parse_from(["seqcut", "--range", "4", "cuts", "--k", "-1"]).unwrap();
        assert_eq!(cli.cmd, Cmd::Cuts { k: -1 });
        assert_eq!(cli.input.range, Some(4));
    }

    #[test]
    fn parses_comma_tokens() {
        let cli = Cli::try_parse_from(["seqcut", "--tokens", "J,O,H,N", "tilings"]).unwrap();
        assert_eq!(cli.input.tokens.as_deref().map(<[String]>::len), Some(4));
        assert_eq!(cli.cmd, Cmd::Tilings);
    }

    #[test]
    fn rejects_conflicting_inputs() {
        assert!(Cli::try_parse_from(["seqcut", "--range", "3", "--tokens", "a", "recuts"]).is_err());
    }

    #[test]
    fn tilings_stream_as_json_lines() {
        let mut buf = Vec::new();
        let n = emit(&mut buf, &john(), Cmd::Tilings, &out_args(None, false, true), None).unwrap();
        assert_eq!(n, 4);
        let got = lines(&buf);
        assert_eq!(got[1], r#"{"width":2,"windows":[["J","O"],["H","N"]]}"#);
        assert_eq!(got[2], r#"{"width":3,"windows":[["J","O","H"]]}"#);
    }

    #[test]
    fn recuts_first_line_and_limit() {
        let mut buf = Vec::new();
        let n = emit(&mut buf, &john(), Cmd::Recuts, &out_args(Some(2), false, true), None).unwrap();
        assert_eq!(n, 2);
        assert_eq!(lines(&buf)[0], r#"[["J"],["O","H","N"]]"#);
    }

    #[test]
    fn negative_counts_emit_nothing() {
        let mut buf = Vec::new();
        let n = emit(&mut buf, &john(), Cmd::Upto { max_cuts: -3 }, &out_args(None, false, false), None)
            .unwrap();
        assert_eq!(n, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn count_mode_uses_closed_forms() {
        let mut buf = Vec::new();
        emit(&mut buf, &john(), Cmd::Upto { max_cuts: 9 }, &out_args(None, true, false), Some(7))
            .unwrap();
        assert_eq!(lines(&buf), vec![r#"{"sequence":7,"result":{"count":8}}"#.to_owned()]);
    }

    #[test]
    fn coverage_check_detects_gaps() {
        let seq = john();
        let good: Vec<&[Value]> = vec![&seq[..2], &seq[2..]];
        let bad: Vec<&[Value]> = vec![&seq[..1], &seq[2..]];
        assert!(covers(&seq, &good));
        assert!(!covers(&seq, &bad));
    }
}
