pub mod disciplines;
mod fetch_utils;
pub mod http_client;
pub mod paginator;
pub mod urls;

pub use disciplines::{fetch_competition_disciplines, fetch_discipline_results};
pub use http_client::{ApiClient, create_http_client_with_timeout};
pub use paginator::{PageBound, Paginator};
pub use urls::*;
