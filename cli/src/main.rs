mod commands;
mod terminal;

use std::process::ExitCode;

use clientele_common::error::ClientError;
use tracing::error;

use commands::{CommandLine, Commands, duplicates, search};
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    logging::init(commands.quiet)?;

    let cfg = commands.config();

    if cfg.quiet == 0 && !cfg.json {
        print::print_status(format!("Reading clients from {}", cfg.data_path.display()));
    }

    let result: anyhow::Result<()> = match commands.command {
        Commands::Search { term } => search::search(&term, &cfg),
        Commands::Duplicates => duplicates::duplicates(&cfg),
    };

    match result {
        Ok(()) => {
            if !cfg.json {
                print::end_of_program(cfg.quiet);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            match err.downcast_ref::<ClientError>() {
                Some(client_err) => error!("Request failed ({}): {client_err}", client_err.kind()),
                None => error!("{err:#}"),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
