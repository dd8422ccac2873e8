//! Reading a CSV source into an ordered sequence of records.
//!
//! Only whole-source failures (missing file, unreadable or undecodable
//! content) are errors. Ragged rows and unparseable cells are absorbed by
//! the schema mapping and never fail a load.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{AllotmentError, Result};
use crate::schema::{Record, clean_header};

/// Cell contents treated as "no value" by spreadsheet exports.
pub const DEFAULT_MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Exact cell contents that count as an absent value.
    pub missing_markers: Vec<String>,
    /// Number of loaded records echoed at debug level after each load.
    pub sample_rows: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            missing_markers: DEFAULT_MISSING_MARKERS.iter().map(|m| m.to_string()).collect(),
            sample_rows: 5,
        }
    }
}

impl LoaderOptions {
    pub fn is_missing(&self, cell: &str) -> bool {
        cell.is_empty() || self.missing_markers.iter().any(|m| m == cell)
    }
}

/// Locations of the two source files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sources {
    pub allocation: PathBuf,
    pub station: PathBuf,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            allocation: PathBuf::from("Tài liệu phân bổ Allotment.xlsm - Phân bổ tải.csv"),
            station: PathBuf::from("Tài liệu phân bổ Allotment.xlsm - Station.csv"),
        }
    }
}

/// Parses a CSV stream with a header row into records of type `R`.
///
/// Rows in which every cell is missing are dropped before mapping; the
/// check looks at the whole raw row, so a row carrying only a trailing
/// annotation beyond the record width is still kept.
pub fn load_from_reader<R: Record, S: Read>(source: S, options: &LoaderOptions) -> Result<Vec<R>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let table = R::KIND;

    let headers: Vec<String> = reader.headers()?.iter().map(clean_header).collect();
    debug!(%table, ?headers, "source header");
    if headers.len() < R::FIELDS.len() {
        warn!(
            %table,
            found = headers.len(),
            expected = R::FIELDS.len(),
            "header is narrower than the record, missing columns will be null"
        );
    }

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;
    for row in reader.records() {
        let row = row?;
        rows_read += 1;
        let cells: Vec<Option<&str>> = row
            .iter()
            .map(|cell| if options.is_missing(cell) { None } else { Some(cell) })
            .collect();
        if cells.iter().all(Option::is_none) {
            rows_skipped += 1;
            continue;
        }
        records.push(R::from_cells(&cells));
    }

    info!(%table, rows_read, rows_skipped, records = records.len(), "source loaded");
    for (i, record) in records.iter().take(options.sample_rows).enumerate() {
        debug!(%table, row = i, ?record, "sample");
    }
    Ok(records)
}

/// Loads the file at `path`. Any failure is reported against that path.
pub fn load_table<R: Record>(path: &Path, options: &LoaderOptions) -> Result<Vec<R>> {
    let source_error = |message: String| AllotmentError::Source {
        path: path.display().to_string(),
        message,
    };
    if !path.exists() {
        return Err(source_error("file not found".to_string()));
    }
    let file = File::open(path).map_err(|e| source_error(e.to_string()))?;
    load_from_reader(file, options).map_err(|e| source_error(e.to_string()))
}
