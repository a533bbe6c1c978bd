//! Minimal CSV-with-header reader.
//!
//! Telemetry CSVs here are plain comma-separated numbers with one
//! header row, so the parser is a line/`split(',')` pass. Only the
//! first two columns are ever plotted, so only those must be numeric;
//! extra columns are carried as raw text headers but their cells are
//! not validated.

use std::path::Path;

use crate::error::ViewerError;

/// How many leading columns must parse as `f64`.
const NUMERIC_COLUMNS: usize = 2;

/// A parsed CSV file: header texts plus numeric values for the first
/// two columns of every row.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    /// One entry per data row; each inner vec has
    /// `min(headers.len(), 2)` parsed values.
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    /// Parse CSV text. `path` is only used for error context.
    pub fn parse(path: &Path, text: &str) -> Result<Table, ViewerError> {
        let malformed = |reason: String| ViewerError::DataMalformed {
            path: path.to_path_buf(),
            reason,
        };

        let mut lines = text.lines().enumerate();
        let headers: Vec<String> = match lines.next() {
            Some((_, line)) if !line.trim().is_empty() => {
                line.split(',').map(|h| h.trim().to_string()).collect()
            }
            _ => return Err(malformed("missing header row".into())),
        };

        let parsed_cols = headers.len().min(NUMERIC_COLUMNS);
        let mut rows = Vec::new();
        for (lineno, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let cells: Vec<&str> = line.split(',').collect();
            if cells.len() < headers.len() {
                return Err(malformed(format!(
                    "row {} has {} field(s), header has {}",
                    lineno + 1,
                    cells.len(),
                    headers.len()
                )));
            }
            let mut row = Vec::with_capacity(parsed_cols);
            for (col, cell) in cells.iter().take(parsed_cols).enumerate() {
                let v: f64 = cell.trim().parse().map_err(|_| {
                    malformed(format!(
                        "row {}, column {} ({:?}) is not numeric: {:?}",
                        lineno + 1,
                        col,
                        headers[col],
                        cell.trim()
                    ))
                })?;
                row.push(v);
            }
            rows.push(row);
        }
        Ok(Table { headers, rows })
    }

    /// Read and parse a CSV file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Table, ViewerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ViewerError::DataUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// The last `n` rows, or all of them if there are fewer.
    pub fn tail(&self, n: usize) -> &[Vec<f64>] {
        let start = self.rows.len().saturating_sub(n);
        &self.rows[start..]
    }
}
