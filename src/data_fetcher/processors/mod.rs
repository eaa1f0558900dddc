pub mod flatten;

pub use flatten::{flatten, flatten_summary, join_disciplines, parse_year_month, scalar_text};
