// src/load/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;

use std::{fs::File, io::Read, path::Path, sync::Arc};
use tracing::debug;

/// One line of the schedule export.
///
/// Cells are addressable both by column header (exact text, never trimmed —
/// the export's course-label header carries significant interior whitespace)
/// and by column position. Empty cells read as absent, the way the upstream
/// spreadsheet leaves untouched grid squares blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    headers: Arc<Vec<String>>,
    cells: Vec<String>,
}

impl Row {
    pub fn new(headers: Arc<Vec<String>>, cells: Vec<String>) -> Self {
        Self { headers, cells }
    }

    /// Cell under `header`, or `None` when the column is missing or blank.
    pub fn get(&self, header: &str) -> Option<&str> {
        let index = self.headers.iter().position(|h| h == header)?;
        self.field(index)
    }

    /// Cell at positional `index`, or `None` when out of range or blank.
    pub fn field(&self, index: usize) -> Option<&str> {
        match self.cells.get(index) {
            Some(cell) if !cell.is_empty() => Some(cell),
            _ => None,
        }
    }

    /// All cells in column order, blanks included.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(String::as_str)
    }
}

/// Read the schedule export at `path` into rows.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let file = File::open(&path)
        .with_context(|| format!("failed to open schedule file {:?}", path.as_ref()))?;
    read_rows(file).with_context(|| format!("failed to read schedule file {:?}", path.as_ref()))
}

/// Parse CSV from `reader` into rows. The first record is the header row;
/// data records may have any width (trailing grid columns are often cut
/// short by the exporter), so the reader is flexible.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Arc<Vec<String>> =
        Arc::new(rdr.headers().context("reading header row")?.iter().map(str::to_string).collect());

    let mut rows = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", index))?;
        rows.push(Row::new(
            Arc::clone(&headers),
            record.iter().map(str::to_string).collect(),
        ));
    }
    debug!(rows = rows.len(), columns = headers.len(), "loaded schedule rows");

    Ok(rows)
}
