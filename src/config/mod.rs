use crate::constants::{self, env_vars};
use crate::data_fetcher::api::PageBound;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the exporter.
/// Every field has a default, so a missing or partial config file is valid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the federation API, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Destination of the competition CSV export.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Whether the page loop includes the page numbered `numPages`.
    #[serde(default)]
    pub page_bound: PageBound,
    /// Maximum number of competition pages in flight at once.
    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: usize,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_output_path() -> String {
    constants::DEFAULT_OUTPUT_PATH.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_fetch_concurrency() -> usize {
    constants::DEFAULT_FETCH_CONCURRENCY
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            output_path: default_output_path(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            page_bound: PageBound::default(),
            fetch_concurrency: default_fetch_concurrency(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to built-in defaults when no config file exists.
    /// Environment variables take precedence over config file values.
    /// Nothing is validated here; call [`Config::validate`] once command
    /// line overrides are applied.
    ///
    /// # Environment Variables
    /// - `FINA_API_BASE` - Override API base URL
    /// - `FINA_OUTPUT_PATH` - Override export destination
    /// - `FINA_LOG_FILE` - Override log file path
    /// - `FINA_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Same as [`Config::load`] but reads the file at `path`.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Applies `FINA_*` environment overrides on top of the current values.
    /// Unparsable numeric overrides are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_base) = std::env::var(env_vars::API_BASE) {
            self.api_base_url = api_base;
        }

        if let Ok(output_path) = std::env::var(env_vars::OUTPUT_PATH) {
            self.output_path = output_path;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// API base URL with any trailing slash removed
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Prints the effective configuration to stdout.
    pub fn display(&self) {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not present, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", self.api_base_url);
        println!("────────────────────────────────────");
        println!("Output Path:");
        println!("{}", self.output_path);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", self.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Page Bound / Concurrency:");
        println!("{} / {}", self.page_bound, self.fetch_concurrency);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::files::LOG_FILE);
            println!("(Default location)");
        }
    }

    /// Saves configuration to a custom file path, creating the parent directory.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::API_BASE);
            std::env::remove_var(env_vars::OUTPUT_PATH);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_base_url = "https://api.example.com/fina"
output_path = "/tmp/out/comps.csv"
log_file_path = "/custom/log/path"
page_bound = "exclusive"
fetch_concurrency = 4
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com/fina");
        assert_eq!(config.output_path, "/tmp/out/comps.csv");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.page_bound, PageBound::Exclusive);
        assert_eq!(config.fetch_concurrency, 4);
        assert_eq!(config.http_timeout_seconds, default_http_timeout());
    }

    #[tokio::test]
    async fn test_config_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "http_timeout_seconds = 5\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_base_url, constants::DEFAULT_API_BASE_URL);
        assert_eq!(config.output_path, constants::DEFAULT_OUTPUT_PATH);
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.page_bound, PageBound::Inclusive);
        assert_eq!(config.fetch_concurrency, 1);
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let original = Config {
            api_base_url: "https://api.example.com".to_string(),
            output_path: "exports/all.csv".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 12,
            page_bound: PageBound::Exclusive,
            fetch_concurrency: 3,
        };
        original.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn test_invalid_toml_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_base_url = [oops")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_file_falls_back_to_defaults() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        let config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    #[serial]
    async fn test_environment_variable_override() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            "api_base_url = \"https://file.example.com\"\noutput_path = \"file.csv\"\n",
        )
        .await
        .unwrap();

        unsafe {
            std::env::set_var(env_vars::API_BASE, "https://env.example.com");
            std::env::set_var(env_vars::LOG_FILE, "/env/log/path.log");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "not-a-number");
        }

        let config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();

        clear_env();

        assert_eq!(config.api_base_url, "https://env.example.com");
        assert_eq!(config.output_path, "file.csv");
        assert_eq!(config.log_file_path, Some("/env/log/path.log".to_string()));
        assert_eq!(config.http_timeout_seconds, default_http_timeout());
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_environment_value_is_left_for_later_validation() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        unsafe {
            std::env::set_var(env_vars::API_BASE, "ftp://env.example.com");
        }
        let mut config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();
        clear_env();

        assert_eq!(config.api_base_url, "ftp://env.example.com");
        assert!(config.validate().is_err());

        config.api_base_url = "https://cli.example.com/fina".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        let config = Config {
            api_base_url: "https://api.example.com/fina/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.api_base(), "https://api.example.com/fina");
    }
}
