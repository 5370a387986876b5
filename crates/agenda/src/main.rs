//! agenda CLI entry point.

use std::process::ExitCode;

use agenda::cli::Cli;
use agenda::output::{aeprintln, aprintln, p_g, p_r};
use agenda::{logging, run, Config};
use clap::Parser;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            aeprintln!("{} {e:#}", p_r("Error:"));
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(cli);
    logging::init(config.verbose);

    let path = run(&config)?;
    aprintln!("{} {}", p_g("Agenda written to"), path.display());
    Ok(())
}
