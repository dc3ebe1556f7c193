use crate::kernel::services::ports::settings::Settings;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".code-xray";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

pub fn get_settings_path() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(SETTINGS_DIR).join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Loads settings from the default location. A missing file means defaults.
pub fn load_settings() -> Settings {
    match get_settings_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

pub fn load_settings_from(path: &Path) -> Settings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read settings");
            return Settings::default();
        }
    };

    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Settings::default()
        }
    }
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
