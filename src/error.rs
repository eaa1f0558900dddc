use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Response decoding errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Record-level errors raised while flattening
    #[error("Missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    #[error("Malformed field '{field}' in {context}: {message}")]
    MalformedField {
        field: String,
        context: String,
        message: String,
    },

    #[error("Failed to serialize JSON output: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a missing required field error
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Create a malformed field error
    pub fn malformed_field(
        field: impl Into<String>,
        context: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            field: field.into(),
            context: context.into(),
            message: message.into(),
        }
    }

    /// Check if the error came from the HTTP transport (status or network)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::ApiNotFound { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
        )
    }

    /// Check if the error means a response body could not be decoded
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            AppError::ApiParse(_)
                | AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
        )
    }

    /// HTTP status carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::ApiNotFound { .. } => Some(404),
            AppError::ApiServerError { status, .. } | AppError::ApiClientError { status, .. } => {
                Some(*status)
            }
            AppError::ApiFetch(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_datetime_parse_error_helper() {
        let error = AppError::datetime_parse_error("Invalid date format");
        assert!(matches!(error, AppError::DateTimeParse(_)));
        assert_eq!(
            error.to_string(),
            "Date/time parsing error: Invalid date format"
        );
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("https://api.example.com/competitions");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API request not found (404): https://api.example.com/competitions"
        );
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn test_api_server_error_helper() {
        let error =
            AppError::api_server_error(500, "Internal server error", "https://api.example.com");
        assert_eq!(
            error.to_string(),
            "API server error (500): Internal server error (URL: https://api.example.com)"
        );
        assert_eq!(error.status_code(), Some(500));
    }

    #[test]
    fn test_api_client_error_helper() {
        let error = AppError::api_client_error(403, "Forbidden", "https://api.example.com");
        assert_eq!(
            error.to_string(),
            "API client error (403): Forbidden (URL: https://api.example.com)"
        );
        assert_eq!(error.status_code(), Some(403));
    }

    #[test]
    fn test_missing_field_helper() {
        let error = AppError::missing_field("id", "competition #3 on page 0");
        assert!(matches!(error, AppError::MissingField { .. }));
        assert_eq!(
            error.to_string(),
            "Missing required field 'id' in competition #3 on page 0"
        );
    }

    #[test]
    fn test_malformed_field_helper() {
        let error = AppError::malformed_field("disciplines", "competition #0", "expected an array");
        assert_eq!(
            error.to_string(),
            "Malformed field 'disciplines' in competition #0: expected an array"
        );
    }

    #[test]
    fn test_transport_and_decode_classification() {
        assert!(AppError::api_not_found("url").is_transport());
        assert!(AppError::api_server_error(502, "bad gateway", "url").is_transport());
        assert!(AppError::network_timeout("url").is_transport());
        assert!(AppError::network_connection("url", "refused").is_transport());
        assert!(!AppError::api_malformed_json("bad", "url").is_transport());

        assert!(AppError::api_malformed_json("bad", "url").is_decode());
        assert!(AppError::api_unexpected_structure("bad", "url").is_decode());
        assert!(AppError::api_no_data("empty", "url").is_decode());
        assert!(!AppError::missing_field("id", "ctx").is_decode());
        assert!(!AppError::config_error("bad").is_decode());
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::ApiParse(_)));
        assert!(app_error.is_decode());
    }

    #[test]
    fn test_json_serialize_error_is_not_decode() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "pair key");
        let json_error = serde_json::to_string(&map).unwrap_err();

        let app_error = AppError::JsonSerialize(json_error);
        assert!(!app_error.is_decode());
        assert!(!app_error.is_transport());
        assert!(
            app_error
                .to_string()
                .starts_with("Failed to serialize JSON output")
        );
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        match client.get("not a valid url").build() {
            Err(reqwest_error) => {
                let app_error: AppError = reqwest_error.into();
                assert!(matches!(app_error, AppError::ApiFetch(_)));
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let toml_error = toml::from_str::<serde_json::Value>("invalid = [toml").unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::datetime_parse_error("test datetime error"),
            AppError::log_setup_error("test log error"),
            AppError::api_not_found("https://example.com"),
            AppError::api_server_error(500, "server error", "https://example.com"),
            AppError::api_client_error(400, "client error", "https://example.com"),
            AppError::network_timeout("https://example.com"),
            AppError::network_connection("https://example.com", "connection failed"),
            AppError::api_malformed_json("bad json", "https://example.com"),
            AppError::api_unexpected_structure("bad structure", "https://example.com"),
            AppError::api_no_data("no data", "https://example.com"),
            AppError::missing_field("name", "competition #0"),
            AppError::malformed_field("disciplines", "competition #0", "not an array"),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
