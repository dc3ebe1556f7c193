use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::explain::ExplainConfig;

/// On-disk settings. Every field is optional; absent fields keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_size: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keybindings: Vec<KeybindingRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Settings {
    pub fn apply_to(&self, config: &mut ExplainConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(path) = &self.path {
            config.path = path.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(secs) = self.timeout_secs.filter(|secs| *secs > 0) {
            config.timeout = Duration::from_secs(secs);
        }
    }

    pub fn viewer_config(&self) -> ViewerConfig {
        let mut config = ViewerConfig::default();
        if let Some(tab_size) = self.tab_size.filter(|size| *size > 0) {
            config.tab_size = tab_size;
        }
        config
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
    pub tab_size: u8,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self { tab_size: 4 }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
