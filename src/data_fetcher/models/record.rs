use serde::{Deserialize, Serialize};

/// Flat competition row as written to the export file.
///
/// Field order is the column order of the export header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompetitionRecord {
    pub comp_id: String,
    pub comp_name: String,
    pub year: i32,
    pub month: u32,
    pub date_from: String,
    pub date_to: String,
    pub country_code: Option<String>,
    pub city: Option<String>,
    pub comp_type: Option<String>,
    /// Discipline codes joined with single spaces.
    pub disciplines: String,
}

impl CompetitionRecord {
    pub const COLUMN_COUNT: usize = 10;
}
