pub mod competition;
pub mod discipline;
pub mod record;

pub use competition::{CompetitionSummary, PageInfo, PageResult, lookup_nested};
pub use discipline::{
    ApiId, CompetitionEvents, Discipline, DisciplineEntry, SportEvents, discipline_id_by_name,
};
pub use record::CompetitionRecord;
