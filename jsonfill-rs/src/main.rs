//! jsonfill CLI entry point.

use clap::Parser;
use jsonfill::cli::args::{Cli, Commands};
use jsonfill::cli::output::Output;
use jsonfill::cli::{fill, get, logging, scan};
use jsonfill::error::FillError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), FillError> {
    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::Fill(args) => {
            let config = fill::resolve_config(args)?;
            logging::init(cli.verbose, config.debug_log);
            fill::run(args, &config, &output)
        }
        Commands::Scan(args) => {
            logging::init(cli.verbose, false);
            scan::run(args, &output)
        }
        Commands::Get(args) => {
            logging::init(cli.verbose, false);
            get::run(args, &output)
        }
    }
}
