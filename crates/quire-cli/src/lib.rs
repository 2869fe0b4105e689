//! CLI logic for the Quire checker.
//!
//! This module contains the core CLI logic: configuration discovery,
//! reading the input, and rendering failed checks.

pub mod error_adapter;
pub mod report;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use quire::{Checker, QuireError, config::AppConfig};

/// Load the configuration selected by the command-line arguments.
///
/// # Errors
///
/// Returns `QuireError::Config` if an explicit configuration file is missing
/// or any configuration file found cannot be parsed, and `QuireError::Io`
/// if it cannot be read.
pub fn load_config(args: &Args) -> Result<AppConfig, QuireError> {
    config::load_config(args.config.as_ref())
}

/// Run the Quire CLI application
///
/// This function reads the input file and checks it, collecting every
/// problem in one pass.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `app_config` - Configuration returned by [`load_config`]
///
/// # Errors
///
/// Returns `QuireError` for:
/// - File I/O errors
/// - Rejected sources, carrying all recorded diagnostics
/// - Diagnostics that could not be recorded
pub fn run(args: &Args, app_config: &AppConfig) -> Result<(), QuireError> {
    info!(input_path = args.input; "Checking file");

    let source = fs::read_to_string(&args.input)?;

    let checker = Checker::new(app_config.clone());
    checker.check(&source)?;

    info!(input_path = args.input; "No problems found");

    Ok(())
}
