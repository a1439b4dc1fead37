//! Finding which of several candidate bundle identifiers is installed.

mod search;

pub use search::{bundle_query, BundleSearch, MdfindSearch, MDFIND};

use anyhow::{bail, Result};
use log::{debug, warn};
use std::cell::OnceCell;

use crate::app::TargetApp;

/// Outcome of one pass over a candidate list.
#[derive(Debug)]
pub enum Resolution {
    /// The first candidate whose search produced output.
    Found(String),
    /// Every search ran and none produced output.
    NotFound,
    /// Nothing was found and at least one search could not run.
    SearchFailed {
        /// Identifier whose search failed last.
        candidate: String,
        /// Why it failed.
        cause: anyhow::Error,
    },
}

impl Resolution {
    /// The found identifier, treating a failed search as not found.
    #[must_use]
    pub fn into_identifier(self) -> Option<String> {
        match self {
            Self::Found(id) => Some(id),
            Self::NotFound | Self::SearchFailed { .. } => None,
        }
    }
}

/// Resolves an installed bundle identifier once and remembers the answer.
///
/// The set of installed applications is assumed not to change while the
/// resolver is alive, so there is no way to invalidate the cached result.
pub struct Resolver<S> {
    search: S,
    candidates: Vec<String>,
    resolved: OnceCell<Option<String>>,
}

impl<S: BundleSearch> Resolver<S> {
    /// Resolver over the built-in candidate list for `app`.
    pub fn for_app(search: S, app: TargetApp) -> Self {
        Self {
            search,
            candidates: app.candidates().iter().map(ToString::to_string).collect(),
            resolved: OnceCell::new(),
        }
    }

    /// Resolver over an explicit candidate list, tried in order.
    pub fn with_candidates(search: S, candidates: Vec<String>) -> Result<Self> {
        if candidates.is_empty() {
            bail!("Candidate bundle identifier list is empty");
        }
        Ok(Self {
            search,
            candidates,
            resolved: OnceCell::new(),
        })
    }

    /// Candidate identifiers in preference order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Search each candidate in order, stopping at the first one that is
    /// installed. A search that fails is logged and counted as not found.
    pub fn find_installed<T: AsRef<str>>(&self, candidates: &[T]) -> Resolution {
        let mut last_failure = None;

        for candidate in candidates {
            let id = candidate.as_ref();
            match self.search.search(id) {
                Ok(output) if !output.trim().is_empty() => {
                    debug!("{id} is installed");
                    return Resolution::Found(id.to_string());
                }
                Ok(_) => debug!("{id} is not installed"),
                Err(e) => {
                    warn!("search for {id} failed: {e:#}");
                    last_failure = Some((id.to_string(), e));
                }
            }
        }

        match last_failure {
            Some((candidate, cause)) => Resolution::SearchFailed { candidate, cause },
            None => Resolution::NotFound,
        }
    }

    /// The installed identifier from this resolver's candidates. Searches on
    /// the first call only; later calls return the remembered answer.
    pub fn installed_identifier(&self) -> Option<&str> {
        self.resolved
            .get_or_init(|| match self.find_installed(self.candidates.as_slice()) {
                Resolution::SearchFailed { candidate, cause } => {
                    warn!("giving up on {candidate}: {cause:#}");
                    None
                }
                other => other.into_identifier(),
            })
            .as_deref()
    }
}
