//! `sln-launch`: open Visual Studio for Mac, optionally with a solution file.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::config::ConfigAction;

#[derive(Parser)]
#[command(name = "sln-launch", about = "Open solution files in Visual Studio for Mac")]
struct Cli {
    /// Report a missing IDE on stderr instead of a dialog
    #[arg(long, global = true)]
    no_dialog: bool,

    /// Log what is being searched for and launched
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the IDE, optionally opening FILE
    Open {
        /// Solution or project file to open
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Print the bundle identifier of the installed IDE
    Find,

    /// Manage sln-launcher configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Open { file } => commands::open::cmd_open(file.as_deref(), cli.no_dialog),
        Commands::Find => commands::find::cmd_find(),
        Commands::Config { action } => {
            commands::config::cmd_config(action)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
