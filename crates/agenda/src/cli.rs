//! Command line definition.

use std::path::PathBuf;

use agenda_core::Locale;
use clap::Parser;

use crate::sources::DEFAULT_OPEN_DATA_URL;

/// Generate a page-per-day PDF agenda for e-paper tablets.
#[derive(Debug, Parser)]
#[command(name = "agenda")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Year of the agenda.
    #[arg(long, short, allow_negative_numbers = true)]
    pub year: i32,

    /// French school holiday zone (A, B or C).
    #[arg(long, value_name = "ZONE")]
    pub school_zone: Option<String>,

    /// French bank holiday zone (Métropole, Alsace-Moselle, Guadeloupe, ...).
    #[arg(long, value_name = "ZONE")]
    pub bank_holidays: Option<String>,

    /// Output file (default: agenda-<year>.pdf).
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Width of the note lines, in millimeters.
    #[arg(long, short = 'w', default_value_t = 0.1)]
    pub linewidth: f32,

    /// Gray level of the note lines (higher is lighter).
    #[arg(long, short = 'c', default_value_t = 200)]
    pub linecolor: u8,

    /// Language of month, weekday and holiday names.
    #[arg(long, env = "AGENDA_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Local CSV school holiday dataset, used instead of the open data API.
    #[arg(long, value_name = "PATH")]
    pub school_data: Option<PathBuf>,

    /// Base URL of the open data API.
    #[arg(long, env = "AGENDA_SCHOOL_DATA_URL", default_value = DEFAULT_OPEN_DATA_URL)]
    pub school_data_url: String,

    /// Log debug messages.
    #[arg(long, short)]
    pub verbose: bool,
}
