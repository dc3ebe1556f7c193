use super::*;

#[test]
fn empty_settings_keep_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    let mut config = ExplainConfig::default();
    settings.apply_to(&mut config);

    assert_eq!(config, ExplainConfig::default());
    assert_eq!(settings.viewer_config(), ViewerConfig::default());
}

#[test]
fn present_fields_override_defaults() {
    let settings: Settings = serde_json::from_str(
        r#"{
            "host": "gpu-box",
            "port": 8080,
            "model": "codellama",
            "timeout_secs": 5,
            "tab_size": 2
        }"#,
    )
    .unwrap();
    let mut config = ExplainConfig::default();
    settings.apply_to(&mut config);

    assert_eq!(config.endpoint(), "http://gpu-box:8080/api/generate");
    assert_eq!(config.model, "codellama");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(settings.viewer_config().tab_size, 2);
}

#[test]
fn zero_values_are_ignored() {
    let settings = Settings {
        timeout_secs: Some(0),
        tab_size: Some(0),
        ..Default::default()
    };
    let mut config = ExplainConfig::default();
    settings.apply_to(&mut config);

    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(settings.viewer_config().tab_size, 4);
}

#[test]
fn keybinding_rules_deserialize() {
    let settings: Settings = serde_json::from_str(
        r#"{ "keybindings": [
            { "key": "x", "command": "explain" },
            { "key": "ctrl+q", "command": "quit", "context": "global" }
        ] }"#,
    )
    .unwrap();

    assert_eq!(settings.keybindings.len(), 2);
    assert_eq!(settings.keybindings[0].context, None);
    assert_eq!(settings.keybindings[1].context.as_deref(), Some("global"));
}
