//! The applications this tool can launch.

/// An application kind the launcher knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetApp {
    /// Visual Studio for Mac.
    VisualStudio,
}

impl TargetApp {
    /// Bundle identifiers accepted as this application, in preference order.
    /// Never empty.
    #[must_use]
    pub const fn candidates(self) -> &'static [&'static str] {
        match self {
            Self::VisualStudio => &["com.microsoft.visual-studio"],
        }
    }

    /// Human-readable name used in alerts and status lines.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::VisualStudio => "Visual Studio for Mac",
        }
    }

    /// Title and body of the alert shown when no candidate is installed.
    #[must_use]
    pub fn missing_alert(self) -> (&'static str, String) {
        (
            "No IDE Found",
            format!(
                "{} could not be found. Please make sure it is installed in your Applications folder",
                self.display_name()
            ),
        )
    }
}
