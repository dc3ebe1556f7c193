use super::*;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("settings.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn invalid_json_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert_eq!(load_settings_from(&path), Settings::default());
}

#[test]
fn valid_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "model": "llama3", "port": 9000 }"#).unwrap();

    let settings = load_settings_from(&path);
    assert_eq!(settings.model.as_deref(), Some("llama3"));
    assert_eq!(settings.port, Some(9000));
}

#[test]
fn settings_and_logs_share_the_app_dir() {
    if let (Some(settings), Some(logs)) = (get_settings_path(), get_log_dir()) {
        assert!(settings.ends_with(".code-xray/settings.json"));
        assert!(logs.ends_with(".code-xray/logs"));
        assert_eq!(settings.parent(), logs.parent());
    }
}
