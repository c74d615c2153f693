//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! tablebot binary.

mod commands;
mod deploy;
mod run;
mod wiring;

pub use commands::{Cli, Commands};
pub use deploy::deploy_commands;
pub use run::run_bot;
