use anyhow::{bail, Context, Result};
use log::debug;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Default location of the Spotlight query tool.
pub const MDFIND: &str = "/usr/bin/mdfind";

// mdfind runs with a minimal PATH of its own.
const SEARCH_PATH: &str = "/usr/local/bin";

/// Looks up installed applications by bundle identifier.
pub trait BundleSearch {
    /// Run one search for `bundle_id` and return whatever it printed.
    /// Blank output means the application is not installed.
    fn search(&self, bundle_id: &str) -> Result<String>;
}

/// Spotlight query matching any bundle whose identifier is `bundle_id`.
#[must_use]
pub fn bundle_query(bundle_id: &str) -> String {
    format!("kMDItemCFBundleIdentifier=\"{bundle_id}\"")
}

/// [`BundleSearch`] backed by `mdfind`.
#[derive(Debug, Clone)]
pub struct MdfindSearch {
    program: PathBuf,
}

impl MdfindSearch {
    /// Search with the `mdfind` binary at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for MdfindSearch {
    fn default() -> Self {
        Self::new(MDFIND)
    }
}

impl BundleSearch for MdfindSearch {
    fn search(&self, bundle_id: &str) -> Result<String> {
        let query = bundle_query(bundle_id);
        debug!("running {} {query}", self.program.display());

        let output = Command::new(&self.program)
            .arg(&query)
            .env("PATH", SEARCH_PATH)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::resolver::{Resolution, Resolver};

    #[test]
    fn test_missing_binary_is_an_error() {
        let search = MdfindSearch::new("/nonexistent/mdfind");
        let err = search.search("com.example.ide").unwrap_err();
        assert!(err.to_string().starts_with("Failed to run /nonexistent/mdfind"));
    }

    #[test]
    fn test_missing_binary_resolves_to_search_failed() {
        let r = Resolver::with_candidates(
            MdfindSearch::new("/nonexistent/mdfind"),
            vec!["com.example.ide".into()],
        )
        .unwrap();
        assert!(matches!(
            r.find_installed(r.candidates()),
            Resolution::SearchFailed { ref candidate, .. } if candidate == "com.example.ide"
        ));
        assert_eq!(r.installed_identifier(), None);
    }

    #[test]
    fn test_nonzero_exit_is_an_error() {
        // sh treats the query as a script path that does not exist
        let search = MdfindSearch::new("/bin/sh");
        assert!(search.search("com.example.ide").is_err());
    }

    #[test]
    fn test_output_is_captured() {
        let search = MdfindSearch::new("/bin/echo");
        let out = search.search("com.example.ide").unwrap();
        assert_eq!(out.trim(), r#"kMDItemCFBundleIdentifier="com.example.ide""#);

        let r = Resolver::with_candidates(search, vec!["com.example.ide".into()]).unwrap();
        assert_eq!(r.installed_identifier(), Some("com.example.ide"));
    }
}
