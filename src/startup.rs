//! Startup file handling: `start.json` names the app directories the
//! selector offers.
//!
//! The file is read once at launch. Any problem here (missing file,
//! bad JSON, empty list) is fatal: without an app list there is
//! nothing to select.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ViewerError;

/// One selectable application directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Directory name as listed in `start.json`; doubles as the label
    /// shown in the selector.
    pub identifier: String,
    /// `<identifier>/config.json`, resolved when the app is opened.
    pub config_path: PathBuf,
}

impl AppDescriptor {
    pub fn new<S: Into<String>>(identifier: S) -> Self {
        let identifier = identifier.into();
        let config_path = Path::new(&identifier).join("config.json");
        Self {
            identifier,
            config_path,
        }
    }

    /// The directory CSV paths from this app's config are resolved against.
    pub fn dir(&self) -> &Path {
        Path::new(&self.identifier)
    }
}

/// Wire shape of `start.json`.
#[derive(Debug, Deserialize)]
struct StartupFile {
    #[serde(rename = "list-of-app-directories")]
    app_directories: Vec<String>,
}

/// The ordered app list loaded from `start.json`.
#[derive(Clone, Debug)]
pub struct StartupConfig {
    pub apps: Vec<AppDescriptor>,
}

impl StartupConfig {
    /// Read and parse the startup file.
    ///
    /// The read and the parse are kept separate so the two failure
    /// kinds stay distinct: I/O problems report
    /// [`ViewerError::StartupFileMissing`], everything after that
    /// (bad JSON, wrong shape, empty list)
    /// [`ViewerError::StartupJsonMalformed`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            ViewerError::StartupFileMissing {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let file: StartupFile =
            serde_json::from_str(&text).map_err(|e| ViewerError::StartupJsonMalformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        if file.app_directories.is_empty() {
            return Err(ViewerError::StartupJsonMalformed {
                path: path.to_path_buf(),
                reason: "list-of-app-directories is empty".into(),
            });
        }
        let apps = file
            .app_directories
            .into_iter()
            .map(AppDescriptor::new)
            .collect();
        Ok(Self { apps })
    }
}
