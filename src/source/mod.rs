//! Record input.
//!
//! Records arrive as one JSON array, either from a file or piped on stdin.
//! Keys are read from the controlling terminal, so piping data in does not
//! take the keyboard away from the browser.

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, IsTerminal, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to obtain a record list.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The given file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// No file was given and stdin is an interactive terminal.
    #[error("No input: pass a FILE or pipe a JSON array on stdin")]
    NoInput,

    /// Reading the file or stdin failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a JSON array of the expected records.
    #[error("Invalid record JSON at line {line}, column {column}: {source}")]
    Json {
        /// 1-based line of the offending token.
        line: usize,
        /// 1-based column of the offending token.
        column: usize,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for SourceError {
    fn from(source: serde_json::Error) -> Self {
        if source.is_io() {
            return SourceError::Io(source.into());
        }
        SourceError::Json {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

/// Load records from `path`, or from stdin when `path` is `None`.
///
/// # Errors
///
/// See [`SourceError`]. An interactive stdin is rejected up front instead of
/// blocking on the keyboard.
pub fn load_records<R: DeserializeOwned>(path: Option<&Path>) -> Result<Vec<R>, SourceError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(SourceError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            let file = File::open(path)?;
            let records = read_records(BufReader::new(file))?;
            tracing::info!(path = %path.display(), count = records.len(), "Loaded records");
            Ok(records)
        }
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(SourceError::NoInput);
            }
            let records = read_records(stdin.lock())?;
            tracing::info!(count = records.len(), "Loaded records from stdin");
            Ok(records)
        }
    }
}

/// Parse a JSON array of records from any reader.
///
/// # Errors
///
/// Returns [`SourceError::Json`] for malformed input and
/// [`SourceError::Io`] when the reader fails.
pub fn read_records<R: DeserializeOwned>(reader: impl Read) -> Result<Vec<R>, SourceError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Consumable, Personnel, RecordId, Series, Status};
    use std::fs;

    #[test]
    fn read_records_parses_series_array() {
        let json = r#"[{"id": 4, "name": "Discworld"}, {"id": 9, "name": "Foundation"}]"#;
        let series: Vec<Series> = read_records(json.as_bytes()).expect("valid series JSON");

        assert_eq!(series.len(), 2);
        assert_eq!(series[1].id, RecordId::new(9));
        assert_eq!(series[1].name, "Foundation");
    }

    #[test]
    fn read_records_applies_consumable_defaults() {
        let json = r#"[{"id": 1, "type": "Novel", "name": "Dune"}]"#;
        let consumables: Vec<Consumable> =
            read_records(json.as_bytes()).expect("valid consumable JSON");

        let dune = &consumables[0];
        assert_eq!(dune.kind, "Novel");
        assert_eq!(dune.parts, 0);
        assert_eq!(dune.max_parts, None);
        assert_eq!(dune.status, Status::Planning);
    }

    #[test]
    fn read_records_accepts_empty_array() {
        let personnel: Vec<Personnel> = read_records("[]".as_bytes()).expect("empty array");
        assert!(personnel.is_empty());
    }

    #[test]
    fn malformed_json_reports_position() {
        let json = "[\n  {\"id\": 1, \"name\": }\n]";
        let result: Result<Vec<Series>, _> = read_records(json.as_bytes());

        match result {
            Err(SourceError::Json { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_shape_is_a_json_error() {
        let result: Result<Vec<Series>, _> = read_records(r#"{"id": 1}"#.as_bytes());
        assert!(matches!(result, Err(SourceError::Json { .. })));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let path = Path::new("/nonexistent/conbrowse/records.json");
        let result: Result<Vec<Series>, _> = load_records(Some(path));

        match result {
            Err(SourceError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn load_records_reads_file() {
        let path = std::env::temp_dir().join("conbrowse_source_test.json");
        fs::write(&path, r#"[{"id": 3, "first_name": "Jean", "pseudonym": "Moebius"}]"#)
            .expect("Failed to write test fixture");

        let result: Result<Vec<Personnel>, _> = load_records(Some(&path));
        fs::remove_file(&path).ok();

        let personnel = result.expect("fixture should load");
        assert_eq!(personnel[0].pseudonym.as_deref(), Some("Moebius"));
        assert_eq!(personnel[0].last_name, None);
    }
}
