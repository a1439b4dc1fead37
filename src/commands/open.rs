use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;
use sln_launcher::{
    config::Config,
    launcher::{LaunchOutcome, Launcher, SystemRunner},
    notifier::{ConsoleNotifier, DialogNotifier, UserNotifier},
    TargetApp,
};

use super::configured_resolver;

pub fn cmd_open(file: Option<&Path>, no_dialog: bool) -> Result<ExitCode> {
    let config = Config::load()?;
    let app = TargetApp::VisualStudio;

    let notifier: Box<dyn UserNotifier> = if no_dialog || !config.alert.dialog {
        Box::new(ConsoleNotifier)
    } else {
        Box::new(DialogNotifier)
    };

    let launcher = Launcher::new(app, configured_resolver(&config, app)?, SystemRunner, notifier)
        .with_settings(config.launch_settings()?);

    match launcher.launch(file)? {
        LaunchOutcome::NotInstalled => Ok(ExitCode::FAILURE),
        LaunchOutcome::Launched(_) => Ok(ExitCode::SUCCESS),
    }
}
