use anyhow::Result;
use std::process::ExitCode;
use sln_launcher::{config::Config, Resolution, TargetApp};

use super::configured_resolver;

pub fn cmd_find() -> Result<ExitCode> {
    let config = Config::load()?;
    let app = TargetApp::VisualStudio;
    let resolver = configured_resolver(&config, app)?;

    match resolver.find_installed(resolver.candidates()) {
        Resolution::Found(id) => {
            println!("{id}");
            Ok(ExitCode::SUCCESS)
        }
        Resolution::NotFound => {
            eprintln!("{} is not installed", app.display_name());
            Ok(ExitCode::FAILURE)
        }
        Resolution::SearchFailed { candidate, cause } => {
            eprintln!("Could not search for {candidate}: {cause:#}");
            Ok(ExitCode::FAILURE)
        }
    }
}
