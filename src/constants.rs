//! Application-wide constants and configuration values
//!
//! Defaults here reproduce the behaviour of a run with no config file,
//! no environment overrides and no command line flags.

/// Base URL of the FINA federation API
pub const DEFAULT_API_BASE_URL: &str = "https://api.fina.org/fina";

/// Destination of the competition export, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "data/fina_all_competition_ids.csv";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Number of competition pages requested concurrently by default
pub const DEFAULT_FETCH_CONCURRENCY: usize = 1;

/// Records per page requested from the competitions listing
pub const PAGE_SIZE: u32 = 100;

/// Index into `Sports` of the events endpoint that holds swimming disciplines
pub const DEFAULT_SPORT_INDEX: usize = 1;

/// Timestamp layout used by `dateFrom` / `dateTo`
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Number of characters of a response body kept in debug logs
pub const RESPONSE_PREVIEW_CHARS: usize = 1024;

/// Column header of the competition export, in row order
pub const COMPETITION_HEADER: [&str; 10] = [
    "comp_id",
    "comp_name",
    "year",
    "month",
    "date_from",
    "date_to",
    "country_code",
    "city",
    "comp_type",
    "disciplines",
];

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_BASE: &str = "FINA_API_BASE";
    pub const OUTPUT_PATH: &str = "FINA_OUTPUT_PATH";
    pub const LOG_FILE: &str = "FINA_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "FINA_HTTP_TIMEOUT";
}

/// Names used for the config and log locations
pub mod files {
    pub const APP_DIR: &str = "fina_export";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const LOG_DIR: &str = "logs";
    pub const LOG_FILE: &str = "fina_export.log";
}
