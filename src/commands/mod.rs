pub mod config;
pub mod find;
pub mod open;

use anyhow::Result;
use sln_launcher::{
    config::Config,
    resolver::{MdfindSearch, Resolver},
    TargetApp,
};

/// Resolver for `app` wired up from the user's configuration.
fn configured_resolver(config: &Config, app: TargetApp) -> Result<Resolver<MdfindSearch>> {
    let search = MdfindSearch::new(config.search_program()?);
    if config.ide.candidates.is_empty() {
        return Ok(Resolver::for_app(search, app));
    }
    Resolver::with_candidates(search, config.ide.candidates.clone())
}
