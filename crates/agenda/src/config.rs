use std::{env, path::PathBuf, time::Duration};

use agenda_core::Locale;
use agenda_pdf::RenderOptions;

use crate::cli::Cli;

/// Default timeout of open data requests, in seconds.
const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Where school breaks come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchoolData {
    /// Local CSV export.
    Csv(PathBuf),
    /// Open data API at the given base URL.
    OpenData(String),
}

/// Settings of one generation run, from the command line and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub year: i32,
    pub school_zone: Option<String>,
    pub bank_zone: Option<String>,
    pub output: PathBuf,
    pub line_width: f32,
    pub line_gray: u8,
    pub locale: Locale,
    pub school_data: SchoolData,
    /// Timeout of open data requests (default: 10 seconds)
    pub http_timeout_seconds: u64,
    pub verbose: bool,
}

impl Config {
    /// Build the configuration from parsed arguments.
    ///
    /// Environment variables:
    /// - `AGENDA_HTTP_TIMEOUT_SECONDS` - Open data request timeout (default: 10)
    pub fn from_cli(cli: Cli) -> Self {
        Self::from_parts(cli, env::var("AGENDA_HTTP_TIMEOUT_SECONDS").ok())
    }

    fn from_parts(cli: Cli, http_timeout: Option<String>) -> Self {
        let output = cli.output.unwrap_or_else(|| default_output(cli.year));
        let school_data = match cli.school_data {
            Some(path) => SchoolData::Csv(path),
            None => SchoolData::OpenData(cli.school_data_url),
        };
        Self {
            year: cli.year,
            school_zone: cli.school_zone,
            bank_zone: cli.bank_holidays,
            output,
            line_width: cli.linewidth,
            line_gray: cli.linecolor,
            locale: cli.locale,
            school_data,
            http_timeout_seconds: http_timeout
                .and_then(|v| v.trim().parse().ok())
                .filter(|seconds| *seconds > 0)
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECONDS),
            verbose: cli.verbose,
        }
    }

    /// Get the HTTP timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Styling handed to the PDF renderer.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default()
            .with_locale(self.locale)
            .with_line_style(self.line_width, self.line_gray)
    }
}

/// `agenda-<year>.pdf` in the working directory.
pub fn default_output(year: i32) -> PathBuf {
    PathBuf::from(format!("agenda-{year}.pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("agenda").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_parts(parse(&["--year", "2026"]), None);
        assert_eq!(config.output, PathBuf::from("agenda-2026.pdf"));
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
        assert!(matches!(config.school_data, SchoolData::OpenData(_)));
        assert_eq!(config.render_options().line_width, 0.1);
        assert_eq!(config.render_options().line_gray, 200);
    }

    #[test]
    fn test_csv_school_data() {
        let config = Config::from_parts(
            parse(&["--year", "2026", "--school-data", "calendrier.csv"]),
            None,
        );
        assert_eq!(
            config.school_data,
            SchoolData::Csv(PathBuf::from("calendrier.csv"))
        );
    }

    #[test]
    fn test_http_timeout_from_env() {
        let cli = || parse(&["--year", "2026"]);
        assert_eq!(
            Config::from_parts(cli(), Some("30".to_string())).http_timeout_seconds,
            30
        );
        assert_eq!(
            Config::from_parts(cli(), Some("soon".to_string())).http_timeout_seconds,
            10
        );
        assert_eq!(
            Config::from_parts(cli(), Some("0".to_string())).http_timeout_seconds,
            10
        );
    }

    #[test]
    fn test_render_options() {
        let config = Config::from_parts(
            parse(&["--year", "2026", "-w", "0.5", "-c", "90", "--locale", "fr"]),
            None,
        );
        let options = config.render_options();
        assert_eq!(options.locale, Locale::Fr);
        assert_eq!(options.line_width, 0.5);
        assert_eq!(options.line_gray, 90);
    }
}
