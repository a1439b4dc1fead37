//! Launching the IDE through `open`.

mod env;
mod runner;

pub use env::{augmented_path, EXTRA_PATH};
pub use runner::{CapturedOutput, CommandRunner, Invocation, SystemRunner};

use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::app::TargetApp;
use crate::notifier::UserNotifier;
use crate::resolver::{BundleSearch, Resolver};

/// Default location of the macOS `open` utility.
pub const OPEN: &str = "/usr/bin/open";

/// How the `open` command is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    /// Path of the `open` binary.
    pub open_command: PathBuf,
    /// Directory appended to the child's `PATH`.
    pub extra_path: String,
    /// Pass `-n` so a new instance starts even if one is running.
    pub new_instance: bool,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            open_command: PathBuf::from(OPEN),
            extra_path: EXTRA_PATH.to_string(),
            new_instance: true,
        }
    }
}

/// Result of a [`Launcher::launch`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// No candidate is installed. The user was alerted and nothing ran.
    NotInstalled,
    /// `open` ran to completion. Its exit code is reported, not judged.
    Launched(CapturedOutput),
}

/// Build the `open` invocation for `bundle_id`, optionally forwarding
/// `target` to the application. `current_path` is the caller's `PATH`.
pub fn open_invocation(
    settings: &LaunchSettings,
    bundle_id: &str,
    target: Option<&Path>,
    current_path: Option<&str>,
) -> Result<Invocation> {
    let mut args = Vec::new();
    if settings.new_instance {
        args.push("-n".to_string());
    }
    args.push("-b".to_string());
    args.push(bundle_id.to_string());

    if let Some(target) = target.filter(|p| !p.as_os_str().is_empty()) {
        let target = target
            .to_str()
            .context("Target path contains non-UTF-8 characters")?;
        args.push("--args".to_string());
        args.push(target.to_string());
    }

    Ok(Invocation {
        program: settings.open_command.clone(),
        args,
        env: vec![(
            "PATH".to_string(),
            augmented_path(current_path, &settings.extra_path),
        )],
    })
}

/// Resolves the IDE once, then opens it on request.
pub struct Launcher<S, R, N> {
    app: TargetApp,
    resolver: Resolver<S>,
    runner: R,
    notifier: N,
    settings: LaunchSettings,
}

impl<S, R, N> Launcher<S, R, N>
where
    S: BundleSearch,
    R: CommandRunner,
    N: UserNotifier,
{
    /// Launcher for `app` with default [`LaunchSettings`].
    pub fn new(app: TargetApp, resolver: Resolver<S>, runner: R, notifier: N) -> Self {
        Self {
            app,
            resolver,
            runner,
            notifier,
            settings: LaunchSettings::default(),
        }
    }

    /// Replace the launch settings.
    #[must_use]
    pub fn with_settings(mut self, settings: LaunchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Open the IDE, passing `target` along when given and non-empty.
    ///
    /// When no candidate is installed the user is alerted and
    /// [`LaunchOutcome::NotInstalled`] is returned. Only a failure to start
    /// `open` itself is an error.
    pub fn launch(&self, target: Option<&Path>) -> Result<LaunchOutcome> {
        let Some(bundle_id) = self.resolver.installed_identifier() else {
            let (title, message) = self.app.missing_alert();
            self.notifier.notify(title, &message);
            return Ok(LaunchOutcome::NotInstalled);
        };

        let current_path = std::env::var("PATH").ok();
        let invocation =
            open_invocation(&self.settings, bundle_id, target, current_path.as_deref())?;
        info!("opening {} ({bundle_id})", self.app.display_name());

        let captured = self.runner.run(&invocation)?;
        relay(&captured);
        Ok(LaunchOutcome::Launched(captured))
    }
}

fn relay(captured: &CapturedOutput) {
    if !captured.stdout.is_empty() {
        print!("{}", captured.stdout);
    }
    if !captured.stderr.is_empty() {
        eprint!("{}", captured.stderr);
    }
}

#[cfg(test)]
mod tests;
