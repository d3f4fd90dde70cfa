// src/config.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{instrument, trace};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_url: String,

    /// Address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Base URL of the reader/summarization endpoint
    #[serde(default = "default_reader_base_url")]
    pub reader_base_url: String,
}

fn default_db_path() -> String {
    let db_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("../db"))
        .join(".config/linkstash");

    db_dir
        .join("linkstash.db")
        .to_str()
        .unwrap_or("../db/linkstash.db")
        .to_string()
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_reader_base_url() -> String {
    "https://r.jina.ai".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_url: default_db_path(),
            listen_addr: default_listen_addr(),
            reader_base_url: default_reader_base_url(),
        }
    }
}

/// Load settings from an optional config file path (falling back to
/// `~/.config/linkstash/config.toml`), then apply environment overrides.
#[instrument(level = "debug")]
pub fn load_settings(config_path: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = Settings::default();

    let config_sources = [
        config_path.map(Path::to_path_buf),
        dirs::home_dir().map(|p| p.join(".config/linkstash/config.toml")),
    ];

    for path in config_sources.iter().flatten() {
        if path.exists() {
            trace!("Loading config from: {:?}", path);

            let config_text = std::fs::read_to_string(path).map_err(DomainError::Io)?;
            let file_settings: Settings = toml::from_str(&config_text)
                .map_err(|e| DomainError::Other(format!("Invalid config file: {}", e)))?;
            settings = file_settings;
            break;
        }
    }

    if let Ok(db_url) = std::env::var("LINKSTASH_DB_URL") {
        trace!("Using LINKSTASH_DB_URL from environment: {}", db_url);
        settings.db_url = db_url;
    }

    if let Ok(listen_addr) = std::env::var("LINKSTASH_LISTEN_ADDR") {
        trace!("Using LINKSTASH_LISTEN_ADDR from environment: {}", listen_addr);
        settings.listen_addr = listen_addr;
    }

    if let Ok(reader_url) = std::env::var("LINKSTASH_READER_URL") {
        trace!("Using LINKSTASH_READER_URL from environment: {}", reader_url);
        settings.reader_base_url = reader_url;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::EnvGuard;
    use serial_test::serial;
    use std::env;
    use std::fs;

    #[test]
    #[serial]
    fn test_default_settings() {
        let _guard = EnvGuard::new();
        env::remove_var("LINKSTASH_DB_URL");
        env::remove_var("LINKSTASH_LISTEN_ADDR");
        env::remove_var("LINKSTASH_READER_URL");

        let settings = load_settings(None).unwrap();

        assert!(settings.db_url.contains("linkstash.db"));
        assert_eq!(settings.listen_addr, "127.0.0.1:3000");
        assert_eq!(settings.reader_base_url, "https://r.jina.ai");
    }

    #[test]
    #[serial]
    fn test_environment_variables_override() {
        let _guard = EnvGuard::new();

        env::set_var("LINKSTASH_DB_URL", "/test/custom.db");
        env::set_var("LINKSTASH_LISTEN_ADDR", "0.0.0.0:8080");
        env::set_var("LINKSTASH_READER_URL", "http://localhost:9999");

        let settings = load_settings(None).unwrap();

        assert_eq!(settings.db_url, "/test/custom.db");
        assert_eq!(settings.listen_addr, "0.0.0.0:8080");
        assert_eq!(settings.reader_base_url, "http://localhost:9999");
    }

    #[test]
    #[serial]
    fn test_explicit_config_file() {
        let _guard = EnvGuard::new();
        env::remove_var("LINKSTASH_DB_URL");
        env::remove_var("LINKSTASH_LISTEN_ADDR");
        env::remove_var("LINKSTASH_READER_URL");

        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
            db_url = "/config/file/path.db"
            listen_addr = "127.0.0.1:4000"
            "#,
        )
        .unwrap();

        let settings = load_settings(Some(&config_path)).unwrap();

        assert_eq!(settings.db_url, "/config/file/path.db");
        assert_eq!(settings.listen_addr, "127.0.0.1:4000");
        // Unset keys fall back to serde defaults
        assert_eq!(settings.reader_base_url, "https://r.jina.ai");
    }

    #[test]
    #[serial]
    fn test_environment_overrides_config_file() {
        let _guard = EnvGuard::new();

        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, r#"db_url = "/config/non-override.db""#).unwrap();

        env::set_var("LINKSTASH_DB_URL", "/env/override.db");
        env::remove_var("LINKSTASH_LISTEN_ADDR");
        env::remove_var("LINKSTASH_READER_URL");

        let settings = load_settings(Some(&config_path)).unwrap();

        assert_eq!(settings.db_url, "/env/override.db");
    }
}
