use std::path::Path;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Settings structure to hold global configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub fetch: FetchSettings,
}

/// Web server settings, used by `--serve`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    #[serde(default = "default_max_concur_threads")]
    pub max_concur_threads: usize,
}

/// Settings for retrieving remote Surge configurations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// `NONE`, `SYSTEM` or a proxy URL
    #[serde(default = "default_proxy")]
    pub proxy: String,
    #[serde(default = "default_max_download_size")]
    pub max_download_size: usize,
}

// Default value functions for serde
pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_listen_address() -> String {
    "127.0.0.1".to_string()
}

pub fn default_listen_port() -> u16 {
    25500
}

pub fn default_max_concur_threads() -> usize {
    4
}

pub fn default_timeout_secs() -> u64 {
    15
}

pub fn default_user_agent() -> String {
    "surge2clash".to_string()
}

pub fn default_proxy() -> String {
    "NONE".to_string()
}

pub fn default_max_download_size() -> usize {
    32 * 1024 * 1024 // 32MB
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: default_log_level(),
            server: ServerSettings::default(),
            fetch: FetchSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            listen_address: default_listen_address(),
            listen_port: default_listen_port(),
            max_concur_threads: default_max_concur_threads(),
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        FetchSettings {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            proxy: default_proxy(),
            max_download_size: default_max_download_size(),
        }
    }
}

impl Settings {
    /// Create a new settings instance with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current() -> Arc<Settings> {
        match GLOBAL.read() {
            Ok(settings) => settings.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Parse settings from TOML, or YAML when the content looks like YAML
    pub fn load_from_content(content: &str) -> Result<Self, SettingsError> {
        if looks_like_yaml(content) {
            return Ok(serde_yaml::from_str(content)?);
        }
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a file, picking the format from its extension
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Settings::load_from_content(&content),
        }
    }

    /// Listen address in `host:port` form
    pub fn listen_address(&self) -> String {
        let address = self.server.listen_address.trim();
        if address.is_empty() {
            format!("{}:{}", default_listen_address(), self.server.listen_port)
        } else if address.contains(':') {
            address.to_string()
        } else {
            format!("{}:{}", address, self.server.listen_port)
        }
    }
}

fn looks_like_yaml(content: &str) -> bool {
    content.lines().any(|line| {
        let line = line.trim_end();
        line == "server:" || line == "fetch:" || line.starts_with("log_level:")
    })
}

// Global settings instance
pub static GLOBAL: LazyLock<RwLock<Arc<Settings>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Settings::new())));

fn set_current(settings: Settings) {
    match GLOBAL.write() {
        Ok(mut guard) => *guard = Arc::new(settings),
        Err(poisoned) => *poisoned.into_inner() = Arc::new(settings),
    }
}

/// Initialize the global settings from `path`, empty path keeps defaults
pub fn init_settings(path: &str) -> Result<(), SettingsError> {
    if path.is_empty() {
        return Ok(());
    }
    set_current(Settings::load_from_file(path)?);
    Ok(())
}

pub fn update_settings_from_content(content: &str) -> Result<(), SettingsError> {
    set_current(Settings::load_from_content(content)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_gives_defaults() {
        assert_eq!(Settings::load_from_content("").unwrap(), Settings::default());
    }

    #[test]
    fn test_looks_like_yaml() {
        assert!(looks_like_yaml("server:\n  listen_port: 8080\n"));
        assert!(looks_like_yaml("log_level: debug\n"));
        assert!(!looks_like_yaml("[server]\nlisten_port = 8080\n"));
    }

    #[test]
    fn test_listen_address() {
        let mut settings = Settings::default();
        assert_eq!(settings.listen_address(), "127.0.0.1:25500");

        settings.server.listen_address = "0.0.0.0".to_string();
        settings.server.listen_port = 8080;
        assert_eq!(settings.listen_address(), "0.0.0.0:8080");

        settings.server.listen_address = "[::]:9000".to_string();
        assert_eq!(settings.listen_address(), "[::]:9000");

        settings.server.listen_address = "  ".to_string();
        assert_eq!(settings.listen_address(), "127.0.0.1:8080");
    }
}
