//! Competition export: page count, page fetches, flattening, one CSV write

use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::PathBuf;
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::constants::COMPETITION_HEADER;
use crate::data_fetcher::api::{ApiClient, PageBound, Paginator};
use crate::data_fetcher::models::CompetitionRecord;
use crate::data_fetcher::processors::flatten;
use crate::error::AppError;
use crate::exporter::export_records;

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages_fetched: usize,
    pub records_written: usize,
    pub output_path: PathBuf,
}

/// Fetches every competition page, flattens it and writes the CSV once.
///
/// Nothing is written unless every page was fetched and flattened.
#[instrument(skip(client, config), fields(base = client.base_url()))]
pub async fn run_competition_export(
    client: &ApiClient,
    config: &Config,
) -> Result<ExportSummary, AppError> {
    let paginator = Paginator::new(client);
    let num_pages = paginator.page_count().await?;

    let (records, pages_fetched) = collect_competition_records(
        &paginator,
        num_pages,
        config.page_bound,
        config.fetch_concurrency,
    )
    .await?;

    let output_path = PathBuf::from(&config.output_path);
    let records_written = export_records(&records, &COMPETITION_HEADER, &output_path).await?;

    info!(
        "Exported {records_written} competitions from {pages_fetched} pages to {}",
        output_path.display()
    );

    Ok(ExportSummary {
        pages_fetched,
        records_written,
        output_path,
    })
}

/// Fetches and flattens the pages selected by `page_bound`.
///
/// Up to `concurrency` requests are in flight at once; records are returned
/// in page order either way. Returns the records and the number of pages
/// fetched.
pub async fn collect_competition_records(
    paginator: &Paginator<'_>,
    num_pages: u32,
    page_bound: PageBound,
    concurrency: usize,
) -> Result<(Vec<CompetitionRecord>, usize), AppError> {
    let pages = page_bound.pages(num_pages);
    info!(
        "Fetching {} pages ({page_bound} bound on numPages={num_pages})",
        pages.len()
    );

    let flattened: Vec<Vec<CompetitionRecord>> = stream::iter(pages)
        .map(|page| async move {
            let result = paginator.fetch_page(page).await?;
            let records = flatten(&result).inspect_err(|e| {
                error!("Failed to flatten page {page}: {e}");
            })?;
            Ok::<_, AppError>(records)
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    let pages_fetched = flattened.len();
    let records: Vec<CompetitionRecord> = flattened.into_iter().flatten().collect();
    Ok((records, pages_fetched))
}
