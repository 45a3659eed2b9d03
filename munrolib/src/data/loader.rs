//! Reading the Munro tables from CSV.
//!
//! The tables are published as ISO-8859-1 encoded CSV with one row per hill
//! plus header and footer rows. A row is treated as a record row when its
//! first column is a running number and its category column is filled in;
//! everything else is ignored. Record rows that cannot be turned into a
//! complete [`Munro`] are skipped and logged.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use serde::{Deserialize, Serialize};

use crate::data::munro::{Category, Munro};
use crate::error::MunroError;
use crate::Result;

/// Column positions within a row of the tables.
///
/// Defaults match `munrotab_v6.2.csv`. Columns left out of a serialized
/// layout keep their default position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Column holding the running number
    pub id_column: usize,
    /// Column holding the hill name
    pub name_column: usize,
    /// Column holding the height in metres
    pub height_column: usize,
    /// Column holding the grid reference
    pub grid_reference_column: usize,
    /// Column holding the current category (MUN/TOP)
    pub category_column: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            id_column: 0,
            name_column: 6,
            height_column: 10,
            grid_reference_column: 14,
            category_column: 28,
        }
    }
}

impl LoaderOptions {
    /// Create options for the v6.2 column layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the running number column
    pub fn id_column(mut self, index: usize) -> Self {
        self.id_column = index;
        self
    }

    /// Builder: set the name column
    pub fn name_column(mut self, index: usize) -> Self {
        self.name_column = index;
        self
    }

    /// Builder: set the height column
    pub fn height_column(mut self, index: usize) -> Self {
        self.height_column = index;
        self
    }

    /// Builder: set the grid reference column
    pub fn grid_reference_column(mut self, index: usize) -> Self {
        self.grid_reference_column = index;
        self
    }

    /// Builder: set the category column
    pub fn category_column(mut self, index: usize) -> Self {
        self.category_column = index;
        self
    }
}

/// Counts gathered while loading a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Rows read from the source, including headers and footers
    pub rows_read: usize,
    /// Records that made it into the dataset
    pub loaded: usize,
    /// Non-record rows (headers, footers, deleted entries)
    pub ignored: usize,
    /// Record rows dropped because a field was missing or invalid
    pub skipped: usize,
}

/// Load the tables from a file with the given column layout.
pub fn load(path: impl AsRef<Path>, options: &LoaderOptions) -> Result<Vec<Munro>> {
    load_with_summary(path, options).map(|(munros, _)| munros)
}

/// Load the tables from a file, also returning what was read and dropped.
pub fn load_with_summary(
    path: impl AsRef<Path>,
    options: &LoaderOptions,
) -> Result<(Vec<Munro>, LoadSummary)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MunroError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (munros, summary) = load_from_reader(BufReader::new(file), options)?;
    tracing::info!(path = %path.display(), count = munros.len(), "loaded munro tables");
    Ok((munros, summary))
}

/// Load the tables from any byte source.
pub fn load_from_reader<R: Read>(
    reader: R,
    options: &LoaderOptions,
) -> Result<(Vec<Munro>, LoadSummary)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut munros = Vec::new();
    let mut summary = LoadSummary::default();
    let mut row = ByteRecord::new();

    while reader.read_byte_record(&mut row)? {
        summary.rows_read += 1;

        if !is_record_row(&row, options) {
            summary.ignored += 1;
            continue;
        }

        match parse_row(&row, options) {
            Ok(munro) => munros.push(munro),
            Err(reason) => {
                let line = row.position().map(|p| p.line()).unwrap_or_default();
                tracing::warn!(line, %reason, "skipping malformed row");
                summary.skipped += 1;
            }
        }
    }

    summary.loaded = munros.len();
    tracing::debug!(?summary, "finished reading munro tables");
    Ok((munros, summary))
}

/// Decode a field as ISO-8859-1, where every byte is its own code point.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn field(row: &ByteRecord, index: usize) -> Option<String> {
    row.get(index).map(latin1)
}

/// A record row starts with a running number and has a category.
fn is_record_row(row: &ByteRecord, options: &LoaderOptions) -> bool {
    let id = row.get(options.id_column).unwrap_or_default();
    if id.is_empty() || !id.iter().all(u8::is_ascii_digit) {
        return false;
    }
    row.get(options.category_column)
        .is_some_and(|c| !c.trim_ascii().is_empty())
}

fn parse_row(row: &ByteRecord, options: &LoaderOptions) -> std::result::Result<Munro, String> {
    let name = non_blank(row, options.name_column, "name")?;
    let grid_reference = non_blank(row, options.grid_reference_column, "grid reference")?;

    let height_text = non_blank(row, options.height_column, "height")?;
    let height: f64 = height_text
        .parse()
        .map_err(|_| format!("invalid height '{height_text}'"))?;
    if !height.is_finite() || height <= 0.0 {
        return Err(format!("invalid height '{height_text}'"));
    }

    let category_text = non_blank(row, options.category_column, "category")?;
    let category: Category = category_text.parse().map_err(|e: MunroError| e.to_string())?;

    Ok(Munro::new(name, height, grid_reference, category))
}

fn non_blank(row: &ByteRecord, index: usize, what: &str) -> std::result::Result<String, String> {
    match field(row, index) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Some(_) => Err(format!("blank {what}")),
        None => Err(format!("missing {what} column {index}")),
    }
}
