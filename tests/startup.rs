use std::fs;

use telemview::error::ViewerError;
use telemview::startup::StartupConfig;

fn write_start(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("start.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn loads_app_list_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_start(
        dir.path(),
        r#"{ "list-of-app-directories": ["app-b", "app-a", "app-c"] }"#,
    );
    let startup = StartupConfig::load(&path).unwrap();
    let ids: Vec<&str> = startup
        .apps
        .iter()
        .map(|a| a.identifier.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["app-b", "app-a", "app-c"],
        "startup order must be preserved, not sorted"
    );
    assert_eq!(
        startup.apps[0].config_path,
        std::path::Path::new("app-b").join("config.json")
    );
}

#[test]
fn missing_file_is_fatal_startup_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StartupConfig::load(dir.path().join("start.json")).unwrap_err();
    assert!(matches!(err, ViewerError::StartupFileMissing { .. }));
    assert!(err.is_fatal());
}

#[test]
fn malformed_json_is_fatal_startup_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_start(dir.path(), "{ not json");
    let err = StartupConfig::load(&path).unwrap_err();
    assert!(matches!(err, ViewerError::StartupJsonMalformed { .. }));
    assert!(err.is_fatal());
}

#[test]
fn empty_app_list_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_start(dir.path(), r#"{ "list-of-app-directories": [] }"#);
    let err = StartupConfig::load(&path).unwrap_err();
    assert!(
        matches!(err, ViewerError::StartupJsonMalformed { .. }),
        "an empty app list leaves nothing to select and must be fatal"
    );
}

#[test]
fn wrong_top_level_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_start(dir.path(), r#"{ "apps": ["a"] }"#);
    let err = StartupConfig::load(&path).unwrap_err();
    assert!(matches!(err, ViewerError::StartupJsonMalformed { .. }));
}
