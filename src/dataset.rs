use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::remote;

pub const DEFAULT_DATASET_PATH: &str = "data/world_cup_finals.csv";

const REQUIRED_COLUMNS: [&str; 6] = ["Year", "Winner", "Runner-up", "Score", "Venue", "Attendance"];

/// One tournament final. Immutable after load; the loaded slice is the
/// single source of truth for every derived table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalRecord {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
    pub score: String,
    pub venue: String,
    pub attendance: u32,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is missing required column {0:?}")]
    MissingColumn(&'static str),
    #[error("row {row}: {column} value {value:?} is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("dataset has no rows")]
    Empty,
    #[error("dataset is not readable: {0}")]
    Csv(#[from] csv::Error),
}

/// Resolve and load the finals table once at startup. Any schema violation
/// aborts here; the dashboard never runs on a partially-loaded dataset.
/// Returns the records plus a label for the header line.
pub fn load_startup() -> Result<(Vec<FinalRecord>, String)> {
    if let Ok(url) = std::env::var("WC_DATASET_URL")
        && !url.trim().is_empty()
    {
        let url = url.trim().to_string();
        let body = remote::fetch_text_cached(&url)?;
        let finals = parse_finals(&body).with_context(|| format!("parse dataset from {url}"))?;
        return Ok((finals, url));
    }

    let path = std::env::var("WC_DATASET")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH));
    let finals = load_finals(&path)?;
    Ok((finals, path.display().to_string()))
}

pub fn load_finals(path: &Path) -> Result<Vec<FinalRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read dataset {}", path.display()))?;
    parse_finals(&raw).with_context(|| format!("parse dataset {}", path.display()))
}

pub fn parse_finals(raw: &str) -> std::result::Result<Vec<FinalRecord>, DatasetError> {
    let mut reader = csv::Reader::from_reader(raw.as_bytes());

    let headers = reader.headers()?.clone();
    let mut columns = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        let Some(pos) = headers.iter().position(|h| h.trim() == *name) else {
            return Err(DatasetError::MissingColumn(name));
        };
        columns[slot] = pos;
    }
    let [year_col, winner_col, runner_up_col, score_col, venue_col, attendance_col] = columns;

    let mut out = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based file row, counting the header line.
        let row = idx + 2;

        let year_raw = field(&record, year_col);
        let year = year_raw
            .parse::<u16>()
            .map_err(|_| DatasetError::InvalidNumber {
                row,
                column: "Year",
                value: year_raw.to_string(),
            })?;

        let attendance_raw = field(&record, attendance_col);
        let attendance =
            parse_attendance(attendance_raw).ok_or_else(|| DatasetError::InvalidNumber {
                row,
                column: "Attendance",
                value: attendance_raw.to_string(),
            })?;

        out.push(FinalRecord {
            year,
            winner: field(&record, winner_col).to_string(),
            runner_up: field(&record, runner_up_col).to_string(),
            score: field(&record, score_col).to_string(),
            venue: field(&record, venue_col).to_string(),
            attendance,
        });
    }

    if out.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(out)
}

fn field<'a>(record: &'a csv::StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("").trim()
}

/// Attendance arrives as display text ("78,011"). Strip thousands
/// separators and parse; anything else is a data-quality error for the
/// caller to surface, never a silent zero.
pub fn parse_attendance(raw: &str) -> Option<u32> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<u32>().ok()
}
