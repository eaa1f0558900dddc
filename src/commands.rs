use crate::config::Config;
use crate::data_fetcher::api::{ApiClient, fetch_competition_disciplines, fetch_discipline_results};
use crate::data_fetcher::models::{Discipline, discipline_id_by_name};
use crate::error::AppError;
use crate::pipeline::run_competition_export;
use std::path::Path;
use tracing::info;

/// Handles the default action: exports every competition to CSV.
pub async fn handle_export(config: &Config) -> Result<(), AppError> {
    let client = ApiClient::from_config(config)?;
    let summary = run_competition_export(&client, config).await?;

    println!(
        "Wrote {} competitions ({} pages) to {}",
        summary.records_written,
        summary.pages_fetched,
        summary.output_path.display()
    );
    Ok(())
}

/// Handles `--disciplines`: prints one `name<TAB>id` line per discipline.
pub async fn handle_disciplines(
    config: &Config,
    comp_id: &str,
    sport_index: usize,
) -> Result<(), AppError> {
    let client = ApiClient::from_config(config)?;
    let disciplines = fetch_competition_disciplines(&client, comp_id, sport_index).await?;

    print!("{}", format_disciplines(&disciplines));
    Ok(())
}

/// Handles `--discipline-results`: pretty-prints the raw payload to stdout,
/// or writes it to `output` when given.
pub async fn handle_discipline_results(
    config: &Config,
    discipline_id: &str,
    output: Option<&str>,
) -> Result<(), AppError> {
    let client = ApiClient::from_config(config)?;
    emit_discipline_results(&client, discipline_id, output).await
}

/// Handles `--disciplines <COMP_ID> --discipline-name <NAME>`: resolves the
/// name among the competition's disciplines and emits its results.
pub async fn handle_named_discipline_results(
    config: &Config,
    comp_id: &str,
    sport_index: usize,
    discipline_name: &str,
    output: Option<&str>,
) -> Result<(), AppError> {
    let client = ApiClient::from_config(config)?;
    let disciplines = fetch_competition_disciplines(&client, comp_id, sport_index).await?;

    let discipline_id = discipline_id_by_name(&disciplines, discipline_name).ok_or_else(|| {
        AppError::missing_field(
            format!("discipline '{discipline_name}'"),
            format!("competition {comp_id} (sport index {sport_index})"),
        )
    })?;
    info!("Discipline '{discipline_name}' of competition {comp_id} has id {discipline_id}");

    emit_discipline_results(&client, discipline_id, output).await
}

async fn emit_discipline_results(
    client: &ApiClient,
    discipline_id: &str,
    output: Option<&str>,
) -> Result<(), AppError> {
    let results = fetch_discipline_results(client, discipline_id).await?;
    let rendered = serde_json::to_string_pretty(&results).map_err(AppError::JsonSerialize)?;

    match output {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, rendered).await?;
            info!("Wrote results of discipline {discipline_id} to {path}");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Handles `--list-config`.
pub fn handle_list_config_command(config: &Config) {
    config.display();
}

fn format_disciplines(disciplines: &[Discipline]) -> String {
    disciplines
        .iter()
        .map(|d| format!("{}\t{}\n", d.name, d.id))
        .collect()
}
