//! Telemview crate root: re-exports and module wiring.
//!
//! Telemview is a small desktop viewer for telemetry app directories.
//! It shows a selector for the apps listed in `start.json`, then opens
//! the chosen app: one button per configured plot, and an egui_plot
//! line chart of the last rows of the referenced CSV file.
//!
//! The crate is split into cohesive modules:
//! - `error`: diagnostic taxonomy shared by every loader
//! - `startup`: `start.json` parsing into the app list
//! - `config`: per-app `config.json` (plot name -> data + title)
//! - `table`: minimal CSV-with-header reader
//! - `series`: turning one plot descriptor into plottable points
//! - `selector`: the app selection screen
//! - `viewer`: the per-app session (trigger row + plot surface)
//! - `app`: the native window and screen state machine

pub mod error;
pub mod startup;
pub mod config;
pub mod table;
pub mod series;
pub mod selector;
pub mod viewer;
pub mod app;

// Public re-exports for a compact external API
pub use app::{run, MainApp};
pub use config::{AppConfig, PlotConfig, PlotDescriptor};
pub use error::ViewerError;
pub use series::{load_series, PlotSeries, TAIL_ROWS};
pub use startup::{AppDescriptor, StartupConfig};
pub use viewer::ViewerSession;
