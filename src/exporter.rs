//! CSV export of flattened competition records

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::data_fetcher::models::CompetitionRecord;
use crate::error::AppError;

/// Writes `header` followed by one row per record to `path`.
///
/// The file is rendered in memory and written in one go, replacing any
/// existing file. Missing parent directories are created. Returns the
/// number of data rows written.
#[instrument(skip(records, header), fields(record_count = records.len()))]
pub async fn export_records(
    records: &[CompetitionRecord],
    header: &[&str],
    path: &Path,
) -> Result<usize, AppError> {
    if header.len() != CompetitionRecord::COLUMN_COUNT {
        return Err(AppError::config_error(format!(
            "Export header has {} columns, records have {}",
            header.len(),
            CompetitionRecord::COLUMN_COUNT
        )));
    }

    let contents = render_csv(records, header)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        debug!("Creating output directory {}", parent.display());
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, contents).await?;
    info!("Wrote {} records to {}", records.len(), path.display());

    Ok(records.len())
}

/// Renders the header row and the records as CSV bytes.
pub fn render_csv(records: &[CompetitionRecord], header: &[&str]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(header)?;
    records
        .iter()
        .try_for_each(|record| writer.serialize(record))?;

    writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))
}

/// Reads an exported file back into records.
pub async fn read_records(path: impl AsRef<Path>) -> Result<Vec<CompetitionRecord>, AppError> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let records = reader
        .deserialize()
        .collect::<Result<Vec<CompetitionRecord>, csv::Error>>()?;
    Ok(records)
}
