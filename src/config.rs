//! Per-app configuration: `config.json` maps plot names to a CSV file
//! and a chart title.
//!
//! The plots map is a `BTreeMap` on purpose: the trigger row is built
//! in iteration order, and a sorted map makes that order reproducible
//! instead of depending on whatever order the JSON happened to be
//! written in.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ViewerError;

/// One configured chart: where its data lives and what to call it.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PlotDescriptor {
    /// CSV path relative to the app directory. Only checked when the
    /// plot is activated, never at load time.
    pub data: String,
    /// Chart title shown above the plot.
    pub title: String,
}

/// Plot name -> descriptor, sorted by name.
pub type PlotConfig = BTreeMap<String, PlotDescriptor>;

/// Wire shape of an app's `config.json`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Legacy layout resource reference. Accepted so existing app
    /// directories parse, but the layout is built in code here.
    #[serde(default)]
    pub gui: Option<String>,
    #[serde(default)]
    pub plots: PlotConfig,
}

impl AppConfig {
    /// Read and parse one app's `config.json`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| ViewerError::ConfigUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&text).map_err(|source| ViewerError::ConfigMalformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`AppConfig::load`], but never fails: problems are logged
    /// and an empty config comes back. An empty config means "no plots
    /// available", which the viewer renders as such.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("{e}");
                Self::default()
            }
        }
    }
}
