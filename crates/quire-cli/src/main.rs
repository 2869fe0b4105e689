//! Quire CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use quire_cli::{Args, report::Reporter};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Quire");
    debug!(args:?; "Parsed arguments");

    let app_config = match quire_cli::load_config(&args) {
        Ok(app_config) => app_config,
        Err(err) => {
            let reporter = Reporter::new(&Default::default(), &args.input);
            for rendered in reporter.render(&err) {
                error!("{rendered}");
            }
            process::exit(1);
        }
    };

    if let Err(err) = quire_cli::run(&args, &app_config) {
        let reporter = Reporter::new(app_config.report(), &args.input);

        // Render each diagnostic independently
        for rendered in reporter.render(&err) {
            error!("{rendered}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
