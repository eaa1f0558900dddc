pub mod api;
pub mod models;
pub mod processors;

pub use api::{ApiClient, PageBound, Paginator};
pub use models::{CompetitionRecord, CompetitionSummary, Discipline, PageResult};
pub use processors::flatten;
