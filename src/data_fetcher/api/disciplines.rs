//! Discipline listing and per-discipline results

use serde_json::Value;
use tracing::{info, instrument};

use super::http_client::ApiClient;
use super::urls::{build_competition_events_url, build_discipline_results_url};
use crate::data_fetcher::models::{CompetitionEvents, Discipline};
use crate::error::AppError;

/// Fetches the disciplines held at a competition.
///
/// The events endpoint groups disciplines by sport; `sport_index` selects
/// the entry of `Sports` to read. Disciplines are returned in API order.
#[instrument(skip(client))]
pub async fn fetch_competition_disciplines(
    client: &ApiClient,
    comp_id: &str,
    sport_index: usize,
) -> Result<Vec<Discipline>, AppError> {
    let url = build_competition_events_url(client.base_url(), comp_id);
    let events: CompetitionEvents = client.get_json(&url).await?;

    let sport_count = events.sports.len();
    let sport = events.sports.into_iter().nth(sport_index).ok_or_else(|| {
        AppError::missing_field(
            format!("Sports[{sport_index}]"),
            format!("events of competition {comp_id} ({sport_count} sports listed)"),
        )
    })?;

    let disciplines: Vec<Discipline> = sport
        .discipline_list
        .into_iter()
        .map(Discipline::from)
        .collect();

    info!(
        "Competition {comp_id} lists {} disciplines",
        disciplines.len()
    );
    Ok(disciplines)
}

/// Fetches the results of one discipline. The payload is passed through
/// without interpretation.
#[instrument(skip(client))]
pub async fn fetch_discipline_results(
    client: &ApiClient,
    discipline_id: &str,
) -> Result<Value, AppError> {
    let url = build_discipline_results_url(client.base_url(), discipline_id);
    client.get_json(&url).await
}
