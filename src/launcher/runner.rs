use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A fully described subprocess: what to run, with which arguments, and
/// which environment variables to override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments, passed to the program as-is.
    pub args: Vec<String>,
    /// Environment overrides applied on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

impl Invocation {
    /// Value this invocation sets for `key`, if any.
    #[must_use]
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Shell-style rendering for logs. Everything after `--args` is
    /// double-quoted, since those arguments are usually file paths.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut out = self.program.display().to_string();
        let mut forwarded = false;
        for arg in &self.args {
            out.push(' ');
            if forwarded {
                out.push('"');
                out.push_str(arg);
                out.push('"');
            } else {
                out.push_str(arg);
                forwarded = arg == "--args";
            }
        }
        out
    }
}

/// What a finished subprocess left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code, `None` when killed by a signal.
    pub status: Option<i32>,
    /// Everything written to stdout.
    pub stdout: String,
    /// Everything written to stderr.
    pub stderr: String,
}

/// Runs an [`Invocation`] to completion.
pub trait CommandRunner {
    /// Spawn the process, wait for it to exit, then return its output.
    fn run(&self, invocation: &Invocation) -> Result<CapturedOutput>;
}

/// [`CommandRunner`] that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CapturedOutput> {
        debug!("running {}", invocation.command_line());

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to spawn {}", invocation.program.display()))?;

        Ok(CapturedOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
