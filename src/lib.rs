//! Find Visual Studio for Mac by bundle identifier and open solution files in it.

pub mod app;
pub mod config;
pub mod launcher;
pub mod notifier;
pub mod resolver;

pub use app::TargetApp;
pub use config::Config;
pub use launcher::{LaunchOutcome, Launcher};
pub use resolver::{Resolution, Resolver};
