use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgGroup, Parser};

use crate::config::Config;
use crate::constants::DEFAULT_SPORT_INDEX;
use crate::data_fetcher::api::PageBound;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// FINA competition exporter
///
/// Walks the paginated competitions listing of the FINA API and writes one
/// CSV row per competition. Also lists the disciplines of a competition and
/// dumps the raw results of a discipline.
///
/// Without an action flag the full competition export runs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
#[command(group(
    ArgGroup::new("results_source").args(["discipline_results", "discipline_name"])
))]
pub struct Args {
    /// Destination of the competition CSV. Overrides the config file.
    #[arg(short = 'o', long = "output", help_heading = "Export")]
    pub output: Option<String>,

    /// Base URL of the FINA API. Overrides the config file.
    #[arg(long = "api-base", value_name = "URL", help_heading = "Export")]
    pub api_base: Option<String>,

    /// Whether the page numbered numPages is fetched (inclusive) or not (exclusive).
    #[arg(long = "page-bound", value_enum, help_heading = "Export")]
    pub page_bound: Option<PageBound>,

    /// Maximum number of competition pages fetched at once.
    /// Records are written in page order regardless.
    #[arg(long = "concurrency", value_name = "N", help_heading = "Export")]
    pub concurrency: Option<usize>,

    /// List the disciplines of a competition instead of exporting.
    #[arg(long = "disciplines", value_name = "COMP_ID", help_heading = "Disciplines")]
    pub disciplines: Option<String>,

    /// Index into the competition's sport list used by --disciplines.
    #[arg(
        long = "sport-index",
        default_value_t = DEFAULT_SPORT_INDEX,
        help_heading = "Disciplines"
    )]
    pub sport_index: usize,

    /// With --disciplines, fetch the raw results of the discipline with this name.
    #[arg(
        long = "discipline-name",
        value_name = "NAME",
        requires = "disciplines",
        help_heading = "Disciplines"
    )]
    pub discipline_name: Option<String>,

    /// Fetch the raw results of a discipline instead of exporting.
    #[arg(
        long = "discipline-results",
        value_name = "DISCIPLINE_ID",
        help_heading = "Disciplines",
        conflicts_with = "disciplines"
    )]
    pub discipline_results: Option<String>,

    /// Write discipline results to a file instead of stdout.
    #[arg(
        long = "results-output",
        value_name = "PATH",
        requires = "results_source",
        help_heading = "Disciplines"
    )]
    pub results_output: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug logging for this crate.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Applies command line overrides on top of the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(api_base) = &self.api_base {
            config.api_base_url = api_base.clone();
        }
        if let Some(page_bound) = self.page_bound {
            config.page_bound = page_bound;
        }
        if let Some(concurrency) = self.concurrency {
            config.fetch_concurrency = concurrency;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_leave_config_untouched() {
        let args = Args::parse_from(["fina_export"]);
        assert_eq!(args.sport_index, DEFAULT_SPORT_INDEX);

        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let args = Args::parse_from([
            "fina_export",
            "-o",
            "out/comps.csv",
            "--api-base",
            "http://localhost:9000/fina",
            "--page-bound",
            "exclusive",
            "--concurrency",
            "4",
            "--log-file",
            "/tmp/fina.log",
        ]);

        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config.output_path, "out/comps.csv");
        assert_eq!(config.api_base_url, "http://localhost:9000/fina");
        assert_eq!(config.page_bound, PageBound::Exclusive);
        assert_eq!(config.fetch_concurrency, 4);
        assert_eq!(config.log_file_path.as_deref(), Some("/tmp/fina.log"));
    }

    #[test]
    fn test_results_output_requires_discipline_results() {
        assert!(Args::try_parse_from(["fina_export", "--results-output", "r.json"]).is_err());
        let args = Args::try_parse_from([
            "fina_export",
            "--discipline-results",
            "abc",
            "--results-output",
            "r.json",
        ])
        .unwrap();
        assert_eq!(args.results_output.as_deref(), Some("r.json"));
    }

    #[test]
    fn test_discipline_name_requires_disciplines() {
        assert!(
            Args::try_parse_from(["fina_export", "--discipline-name", "Women 50m Freestyle"])
                .is_err()
        );
        let args = Args::try_parse_from([
            "fina_export",
            "--disciplines",
            "5",
            "--discipline-name",
            "Women 50m Freestyle",
            "--results-output",
            "w50.json",
        ])
        .unwrap();
        assert_eq!(args.disciplines.as_deref(), Some("5"));
        assert_eq!(args.discipline_name.as_deref(), Some("Women 50m Freestyle"));
        assert_eq!(args.results_output.as_deref(), Some("w50.json"));
    }

    #[test]
    fn test_disciplines_and_results_conflict() {
        assert!(
            Args::try_parse_from(["fina_export", "--disciplines", "1", "--discipline-results", "2"])
                .is_err()
        );
    }
}
