//! User configuration stored in `~/.config/sln-launcher/config.toml`.

mod ops;

use serde::{Deserialize, Serialize};

use crate::launcher::{EXTRA_PATH, OPEN};
use crate::resolver::MDFIND;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How installed applications are looked up.
    pub search: SearchConfig,
    /// How the IDE is launched.
    pub open: OpenConfig,
    /// Which bundle identifiers count as the IDE.
    pub ide: IdeConfig,
    /// How the user is told the IDE is missing.
    pub alert: AlertConfig,
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Spotlight query tool, absolute or looked up on `PATH`.
    pub command: String,
}

/// `[open]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenConfig {
    /// The `open` utility, absolute or looked up on `PATH`.
    pub command: String,
    /// Directory appended to the launched application's `PATH`.
    pub extra_path: String,
    /// Always start a new instance.
    pub new_instance: bool,
}

/// `[ide]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeConfig {
    /// Bundle identifiers to try instead of the built-in list, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<String>,
}

/// `[alert]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Show a modal dialog. When false the alert goes to stderr.
    pub dialog: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { command: MDFIND.to_string() }
    }
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            command: OPEN.to_string(),
            extra_path: EXTRA_PATH.to_string(),
            new_instance: true,
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self { dialog: true }
    }
}
