//! Telling the user when the IDE cannot be found.

use log::warn;
use std::process::Command;

/// Something that can tell the user about a problem.
pub trait UserNotifier {
    /// Show `message` under `title`. Returns once the user has seen it.
    fn notify(&self, title: &str, message: &str);
}

impl<T: UserNotifier + ?Sized> UserNotifier for Box<T> {
    fn notify(&self, title: &str, message: &str) {
        (**self).notify(title, message);
    }
}

/// Modal macOS alert with a single OK button, shown through `osascript`.
/// Falls back to the console if the dialog cannot be shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogNotifier;

impl UserNotifier for DialogNotifier {
    fn notify(&self, title: &str, message: &str) {
        let script = alert_script(title, message);
        match Command::new("osascript").args(["-e", &script]).status() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                warn!("osascript exited with {status}");
                ConsoleNotifier.notify(title, message);
            }
            Err(e) => {
                warn!("could not show alert dialog: {e}");
                ConsoleNotifier.notify(title, message);
            }
        }
    }
}

/// Writes the alert to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl UserNotifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}

/// AppleScript for a blocking alert with one OK button.
#[must_use]
pub fn alert_script(title: &str, message: &str) -> String {
    format!(
        r#"display alert "{}" message "{}" buttons {{"OK"}} default button "OK""#,
        escape_applescript(title),
        escape_applescript(message)
    )
}

fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
