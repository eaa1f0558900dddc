use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must use http:// or https://
/// - Output path cannot be empty or name a directory
/// - HTTP timeout and fetch concurrency must be positive
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let api_base = config.api_base_url.trim();
    if api_base.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "API base URL must start with http:// or https://, got '{api_base}'"
        )));
    }

    if config.output_path.trim().is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if config.output_path.ends_with('/') || Path::new(&config.output_path).is_dir() {
        return Err(AppError::config_error(format!(
            "Output path '{}' must name a file, not a directory",
            config.output_path
        )));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if config.fetch_concurrency == 0 {
        return Err(AppError::config_error(
            "Fetch concurrency must be at least 1",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let invalid_configs = vec![
            Config {
                api_base_url: "".to_string(),
                ..Config::default()
            },
            Config {
                api_base_url: "api.fina.org/fina".to_string(),
                ..Config::default()
            },
            Config {
                output_path: "  ".to_string(),
                ..Config::default()
            },
            Config {
                output_path: "data/".to_string(),
                ..Config::default()
            },
            Config {
                http_timeout_seconds: 0,
                ..Config::default()
            },
            Config {
                fetch_concurrency: 0,
                ..Config::default()
            },
            Config {
                log_file_path: Some("".to_string()),
                ..Config::default()
            },
        ];

        for config in invalid_configs {
            assert!(
                validate_config(&config).is_err(),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[test]
    fn test_log_parent_directory_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("nested").join("app.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Config::default()
        };

        assert!(validate_config(&config).is_ok());
        assert!(log_path.parent().unwrap().exists());
    }
}
