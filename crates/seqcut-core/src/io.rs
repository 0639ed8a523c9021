//! Reading input sequences from files or readers.
//!
//! Elements are opaque, so sequences are loaded as `serde_json::Value`s and
//! written back out unchanged. Two source formats are accepted:
//!
//! - **JSON** (`.json`): a single top-level array, any element types.
//! - **Text** (`.txt` or no extension): whitespace-separated tokens, each
//!   becoming a JSON string.
//!
//! Unknown extensions are rejected for reads.

use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

/// An input sequence of opaque elements.
pub type Sequence = Vec<Value>;

/// Ensure the parent directory for a file exists (no-op if none).
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", display(path)))?;
        }
    }
    Ok(())
}

/// Create (truncating) an output file behind a buffered writer.
pub fn create_output<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let path_ref = path.as_ref();
    ensure_parent_dir(path_ref)?;
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    Ok(BufWriter::new(f))
}

/// Read a sequence from a **JSON** array.
pub fn read_sequence_json<P: AsRef<Path>>(path: P) -> Result<Sequence> {
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", display(path_ref)))?;
    let v: Value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("deserialize JSON sequence from {}", display(path_ref)))?;
    into_array(v)
}

/// Read a sequence of whitespace-separated **text** tokens.
pub fn read_sequence_text<P: AsRef<Path>>(path: P) -> Result<Sequence> {
    let path_ref = path.as_ref();
    let src =
        fs::read_to_string(path_ref).with_context(|| format!("read {}", display(path_ref)))?;
    Ok(tokens(&src))
}

/// Auto-detect read by extension `.json` / `.txt` / none (case-insensitive).
pub fn read_sequence_auto<P: AsRef<Path>>(path: P) -> Result<Sequence> {
    match ext_lower(path.as_ref()).as_deref() {
        Some("json") => read_sequence_json(path),
        Some("txt") | None => read_sequence_text(path),
        Some(other) => Err(anyhow!(
            "unsupported sequence extension: {} (supported: .json, .txt)",
            other
        )),
    }
}

/// Read a whole reader (e.g. stdin) and parse it with [`parse_sequence`].
pub fn read_sequence_from_reader<R: Read>(mut rdr: R) -> Result<Sequence> {
    let mut src = String::new();
    rdr.read_to_string(&mut src).context("read sequence input")?;
    parse_sequence(&src)
}

/// Parse a JSON array if the input starts with `[`, else split on whitespace.
pub fn parse_sequence(src: &str) -> Result<Sequence> {
    if src.trim_start().starts_with('[') {
        let v: Value = serde_json::from_str(src).context("deserialize JSON sequence")?;
        into_array(v)
    } else {
        Ok(tokens(src))
    }
}

/// The sequence `0, 1, …, n - 1` as JSON numbers.
#[must_use]
pub fn range_sequence(n: u64) -> Sequence {
    (0..n).map(Value::from).collect()
}

fn tokens(src: &str) -> Sequence {
    src.split_whitespace().map(|t| Value::String(t.to_owned())).collect()
}

fn into_array(v: Value) -> Result<Sequence> {
    match v {
        Value::Array(items) => Ok(items),
        other => bail!("expected a JSON array, found {}", kind(&other)),
    }
}

const fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn ext_lower(p: &Path) -> Option<String> {
    p.extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
}

fn display(p: &Path) -> String {
    p.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write as _;

    fn tmp_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("seqcut_io_{}_{}", std::process::id(), name));
        p
    }

    #[test]
    fn parses_tokens_and_arrays() {
        assert_eq!(
            parse_sequence("J O\nH  N").unwrap(),
            vec![json!("J"), json!("O"), json!("H"), json!("N")]
        );
        assert_eq!(parse_sequence(" [1, \"a\", null]").unwrap(), vec![json!(1), json!("a"), json!(null)]);
        assert!(parse_sequence("").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_json() {
        let err = parse_sequence("[1, 2").unwrap_err();
        assert!(err.to_string().contains("deserialize"));
        let err = into_array(json!({"a": 1})).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn range_is_ascending_numbers() {
        assert_eq!(range_sequence(3), vec![json!(0), json!(1), json!(2)]);
        assert!(range_sequence(0).is_empty());
    }

    #[test]
    fn auto_detects_by_extension() {
        let pj = tmp_path("seq.json");
        let pt = tmp_path("seq.txt");
        {
            let mut f = File::create(&pj).unwrap();
            write!(f, r#"["x", 2]"#).unwrap();
            let mut f = File::create(&pt).unwrap();
            writeln!(f, "a b c").unwrap();
        }
        assert_eq!(read_sequence_auto(&pj).unwrap(), vec![json!("x"), json!(2)]);
        assert_eq!(read_sequence_auto(&pt).unwrap().len(), 3);
        assert!(read_sequence_auto(tmp_path("seq.cbor")).is_err());
        let _ = fs::remove_file(pj);
        let _ = fs::remove_file(pt);
    }

    #[test]
    fn create_output_makes_parent_dirs() {
        let dir = tmp_path("nested");
        let out = dir.join("deeper").join("out.jsonl");
        {
            let mut w = create_output(&out).unwrap();
            w.write_all(b"{}\n").unwrap();
        }
        assert!(out.exists());
        let _ = fs::remove_dir_all(dir);
    }
}
