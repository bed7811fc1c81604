//! # Transcript Module
//!
//! Streams a Claude Code JSONL transcript into [`TranscriptRecord`]s.
//!
//! A missing transcript is normal (new sessions, hooks without a path) and yields no records.
//! Lines that are not valid JSON are skipped and reported as [`LineWarning`]s; they never stop
//! the load.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use crate::models::TranscriptRecord;

/// A transcript line that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based line number in the transcript
    pub line_number: usize,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct TranscriptLoad {
    pub records: Vec<TranscriptRecord>,
    pub warnings: Vec<LineWarning>,
}

impl TranscriptLoad {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn load_transcript(path: Option<&Path>) -> TranscriptLoad {
    let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
        return TranscriptLoad::default();
    };
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "transcript not found");
            return TranscriptLoad::default();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot open transcript");
            return TranscriptLoad::default();
        }
    };
    match read_records(BufReader::new(file)) {
        Ok(load) => load,
        Err(e) => {
            // Opening a directory succeeds on unix; the first read is what fails.
            tracing::warn!(path = %path.display(), error = %e, "cannot read transcript");
            TranscriptLoad::default()
        }
    }
}

/// Folds each line into the load. Only a hard I/O error on the very first read is returned,
/// so a file that cannot be read at all is told apart from a damaged line.
pub fn read_records<R: BufRead>(reader: R) -> io::Result<TranscriptLoad> {
    let mut load = TranscriptLoad::default();
    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        match line.map_err(LineError::Io).and_then(|l| parse_line(&l)) {
            Ok(Some(record)) => load.records.push(record),
            Ok(None) => {}
            Err(LineError::Io(e)) if e.kind() != io::ErrorKind::InvalidData => {
                if idx == 0 {
                    return Err(e);
                }
                // The reader cannot make progress past a hard I/O error.
                tracing::warn!(line = line_number, error = %e, "transcript read aborted");
                load.warnings.push(LineWarning {
                    line_number,
                    message: LineError::Io(e).to_string(),
                });
                break;
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(line = line_number, error = %message, "skipping transcript line");
                load.warnings.push(LineWarning {
                    line_number,
                    message,
                });
            }
        }
    }
    Ok(load)
}

enum LineError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineError::Io(e) => write!(f, "read error: {e}"),
            LineError::Json(e) => write!(f, "invalid JSON: {e}"),
        }
    }
}

fn parse_line(line: &str) -> Result<Option<TranscriptRecord>, LineError> {
    let t = line.trim();
    if t.is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(t).map_err(LineError::Json)?;
    Ok(Some(TranscriptRecord::from_value(&value)))
}
