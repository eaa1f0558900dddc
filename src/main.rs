// src/main.rs
use clap::Parser;
use fina_export::cli::Args;
use fina_export::commands::{
    handle_discipline_results, handle_disciplines, handle_export, handle_list_config_command,
    handle_named_discipline_results,
};
use fina_export::config::Config;
use fina_export::error::AppError;
use fina_export::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config file and environment first, command line flags on top
    let mut config = Config::load().await?;
    args.apply_to(&mut config);
    config.validate()?;

    if args.list_config {
        handle_list_config_command(&config);
        return Ok(());
    }

    // The guard must outlive every log call so the file writer gets flushed
    let (log_file_path, _guard) = setup_logging(args.debug, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = if let (Some(comp_id), Some(name)) = (&args.disciplines, &args.discipline_name) {
        handle_named_discipline_results(
            &config,
            comp_id,
            args.sport_index,
            name,
            args.results_output.as_deref(),
        )
        .await
    } else if let Some(comp_id) = &args.disciplines {
        handle_disciplines(&config, comp_id, args.sport_index).await
    } else if let Some(discipline_id) = &args.discipline_results {
        handle_discipline_results(&config, discipline_id, args.results_output.as_deref()).await
    } else {
        handle_export(&config).await
    };

    if let Err(e) = &result {
        tracing::error!("Run failed: {e}");
    }
    result
}
