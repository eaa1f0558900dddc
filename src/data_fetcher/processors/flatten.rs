//! Turns raw competition summaries into flat export rows

use chrono::{DateTime, Datelike, NaiveDateTime};
use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::API_TIMESTAMP_FORMAT;
use crate::data_fetcher::models::{CompetitionRecord, CompetitionSummary, PageResult};
use crate::error::AppError;

/// Flattens every summary of a page, in page order.
///
/// Fails on the first summary that lacks a required field; no record of the
/// page is returned in that case.
pub fn flatten(page: &PageResult) -> Result<Vec<CompetitionRecord>, AppError> {
    page.content
        .iter()
        .enumerate()
        .map(|(index, summary)| flatten_summary(summary, &format!("competition #{index}")))
        .collect()
}

/// Flattens a single summary. `context` names the summary in error messages.
pub fn flatten_summary(
    summary: &CompetitionSummary,
    context: &str,
) -> Result<CompetitionRecord, AppError> {
    let comp_id = required_text(summary, "id", context)?;
    let context = format!("{context} (id={comp_id})");

    let comp_name = required_text(summary, "name", &context)?;
    let date_from = required_text(summary, "dateFrom", &context)?;
    let date_to = required_text(summary, "dateTo", &context)?;
    let (year, month) = parse_year_month(&date_from).inspect_err(|_| {
        warn!("Unusable dateFrom '{date_from}' in {context}");
    })?;

    let country_code = optional_text(summary.nested("location", "countryCode"));
    let city = optional_text(summary.nested("location", "city"));
    let comp_type = optional_text(summary.nested("competitionType", "name"));
    if country_code.is_none() && city.is_none() {
        debug!("No location for {context}");
    }

    let disciplines = join_disciplines(summary.field("disciplines"), &context)?;

    Ok(CompetitionRecord {
        comp_id,
        comp_name,
        year,
        month,
        date_from,
        date_to,
        country_code,
        city,
        comp_type,
        disciplines,
    })
}

/// Extracts `(year, month)` from an API timestamp such as
/// `2023-07-14T10:00:00Z`.
///
/// RFC 3339 timestamps with fractional seconds or an explicit offset are
/// accepted as well; the calendar fields are taken as written.
pub fn parse_year_month(timestamp: &str) -> Result<(i32, u32), AppError> {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, API_TIMESTAMP_FORMAT) {
        return Ok((parsed.year(), parsed.month()));
    }

    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| (parsed.year(), parsed.month()))
        .map_err(|e| {
            AppError::datetime_parse_error(format!("Invalid timestamp '{timestamp}': {e}"))
        })
}

/// Joins discipline codes with single spaces.
///
/// A missing or `null` list yields an empty string; a value that is not a
/// list is rejected.
pub fn join_disciplines(value: Option<&Value>, context: &str) -> Result<String, AppError> {
    match value {
        None => Ok(String::new()),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .filter(|item| !item.is_null())
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(" ")),
        Some(other) => {
            warn!("Unexpected disciplines value in {context}: {other}");
            Err(AppError::malformed_field(
                "disciplines",
                context,
                "expected a list of discipline codes",
            ))
        }
    }
}

/// Text form of a JSON value: strings unquoted, everything else as JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A required key must be present; a present `null` becomes an empty string.
fn required_text(
    summary: &CompetitionSummary,
    field: &str,
    context: &str,
) -> Result<String, AppError> {
    match summary.raw_field(field) {
        None => Err(AppError::missing_field(field, context)),
        Some(Value::Null) => {
            warn!("Field '{field}' is null in {context}");
            Ok(String::new())
        }
        Some(value) => Ok(scalar_text(value)),
    }
}

/// Empty strings collapse to `None`, the only form an empty cell reads back as.
fn optional_text(value: Option<&Value>) -> Option<String> {
    value.map(scalar_text).filter(|text| !text.is_empty())
}
