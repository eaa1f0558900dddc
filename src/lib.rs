//! FINA competition exporter library
//!
//! Walks the paginated competitions listing of the FINA API, flattens each
//! competition into a fixed ten-column row and writes the rows as one CSV
//! file. Discipline listings and raw discipline results are exposed as well.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fina_export::config::Config;
//! use fina_export::data_fetcher::api::ApiClient;
//! use fina_export::error::AppError;
//! use fina_export::pipeline::run_competition_export;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let client = ApiClient::from_config(&config)?;
//!
//!     let summary = run_competition_export(&client, &config).await?;
//!     println!(
//!         "{} competitions written to {}",
//!         summary.records_written,
//!         summary.output_path.display()
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod exporter;
pub mod logging;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{ApiClient, PageBound, Paginator};
pub use data_fetcher::models::{CompetitionRecord, CompetitionSummary, Discipline, PageResult};
pub use data_fetcher::processors::flatten;
pub use error::AppError;
pub use exporter::{export_records, read_records};
pub use pipeline::{ExportSummary, run_competition_export};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
