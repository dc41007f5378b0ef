pub mod duplicates;
pub mod search;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clientele_common::config::Config;

#[derive(Parser)]
#[command(name = "clientele")]
#[command(about = "Search and audit a JSON client list.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the JSON client list
    #[arg(short, long, global = true, default_value = Config::DEFAULT_DATA_PATH)]
    pub file: PathBuf,

    /// Less output; repeat to print bare results only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find clients whose name contains TERM (case-insensitive)
    #[command(alias = "s")]
    Search { term: String },
    /// List clients that share an email address
    #[command(alias = "d")]
    Duplicates,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            data_path: self.file.clone(),
            quiet: self.quiet,
            json: self.json,
        }
    }
}
