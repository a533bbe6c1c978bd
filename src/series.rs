//! Turning one plot descriptor into plottable points.
//!
//! This is the data half of the renderer: resolve the CSV relative to
//! the app directory, read it, keep the trailing window of rows, and
//! pair column 0 (X) with column 1 (Y). Drawing happens in `viewer`.

use std::path::Path;

use crate::config::PlotDescriptor;
use crate::error::ViewerError;
use crate::table::Table;

/// Rows plotted from the end of the file. Telemetry CSVs are
/// append-only, so the tail is the most recent data.
pub const TAIL_ROWS: usize = 20;

/// Everything the plot surface needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    /// Plot name the series was activated under (the map key).
    pub name: String,
    pub title: String,
    /// Header text of column 0.
    pub x_label: String,
    /// Header text of column 1.
    pub y_label: String,
    pub points: Vec<[f64; 2]>,
}

/// Load the series for `descriptor`, resolving its CSV against
/// `app_dir`.
///
/// Columns are picked by position, not by name: column 0 is X, column
/// 1 is Y. Fewer than [`TAIL_ROWS`] rows is fine; fewer than two
/// columns is [`ViewerError::InsufficientColumns`].
pub fn load_series(
    app_dir: &Path,
    name: &str,
    descriptor: &PlotDescriptor,
) -> Result<PlotSeries, ViewerError> {
    let csv_path = app_dir.join(&descriptor.data);
    let table = Table::read(&csv_path)?;

    if table.column_count() < 2 {
        return Err(ViewerError::InsufficientColumns {
            path: csv_path,
            found: table.column_count(),
        });
    }

    let points: Vec<[f64; 2]> = table
        .tail(TAIL_ROWS)
        .iter()
        .map(|row| [row[0], row[1]])
        .collect();

    Ok(PlotSeries {
        name: name.to_string(),
        title: descriptor.title.clone(),
        x_label: table.headers[0].clone(),
        y_label: table.headers[1].clone(),
        points,
    })
}
