//! agenda - page-per-day PDF agenda generator.
//!
//! Imperative shell around `agenda_core` and `agenda_pdf`: command line
//! parsing, school holiday data sources and the output file.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod run;
pub mod serde;
pub mod sources;

pub use config::Config;
pub use error::{AgendaError, Result};
pub use run::run;
