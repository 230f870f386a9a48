use crate::notify::DEFAULT_TOAST_DURATION;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const APP_DIR_NAME: &str = "debate-assistant-tui";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the analysis backend; `/analyze` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout, none by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_toast_ms")]
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_ms(),
        }
    }
}

fn default_toast_ms() -> u64 {
    DEFAULT_TOAST_DURATION.as_millis() as u64
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        let app_dir = home_dir.join(".config").join(APP_DIR_NAME);

        if !app_dir.exists() {
            fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir.join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&config_path, toml_string)?;
        Ok(())
    }

    /// Set the server base URL and save
    pub fn set_base_url(&mut self, base_url: String) -> Result<()> {
        self.server.base_url = base_url.trim_end_matches('/').to_string();
        self.save()
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.notifications.duration_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.server.timeout_secs.map(Duration::from_secs)
    }

    /// Where downloads go: configured dir, platform download dir, or cwd
    pub fn download_dir(&self) -> PathBuf {
        self.output
            .download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn log_file(&self) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(format!("{APP_DIR_NAME}.log")))
    }
}

/// Simple URL validation
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    url::Url::parse(url).map_err(|e| format!("Invalid URL format: {e}"))?;

    Ok(())
}

/// Build the analyze endpoint URL from the server base URL
/// Example: http://localhost:8000/ -> http://localhost:8000/analyze
pub fn analyze_url(base_url: &str) -> Result<String, String> {
    let full = format!("{}/analyze", base_url.trim_end_matches('/'));
    let url = url::Url::parse(&full).map_err(|e| format!("Invalid URL: {e}"))?;
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.toast_duration(), Duration::from_millis(3000));
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            [server]
            base_url = "https://debate.example.com"
            timeout_secs = 45

            [notifications]
            duration_ms = 1500
            "#,
        )
        .unwrap();

        assert_eq!(config.server.base_url, "https://debate.example.com");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(45)));
        assert_eq!(config.toast_duration(), Duration::from_millis(1500));
        assert_eq!(config.output.download_dir, None);
    }

    #[test]
    fn test_configured_download_dir_wins() {
        let mut config = Config::default();
        config.output.download_dir = Some(PathBuf::from("/srv/exports"));
        assert_eq!(config.download_dir(), PathBuf::from("/srv/exports"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.logging.level = Some("debug".to_string());
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("http://localhost:8000").is_ok());
        assert!(validate_url("https://example.com/api").is_ok());
        assert_eq!(validate_url("").unwrap_err(), "URL cannot be empty");
        assert!(validate_url("localhost:8000").is_err());
        assert!(validate_url("http://").is_err());
    }

    #[test]
    fn test_analyze_url() {
        assert_eq!(
            analyze_url("http://localhost:8000").unwrap(),
            "http://localhost:8000/analyze"
        );
        assert_eq!(
            analyze_url("http://localhost:8000/").unwrap(),
            "http://localhost:8000/analyze"
        );
        assert_eq!(
            analyze_url("https://example.com/debate").unwrap(),
            "https://example.com/debate/analyze"
        );
        assert!(analyze_url("not a url").is_err());
    }
}
