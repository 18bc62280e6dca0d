//! LiveVue diagram generator entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};

use livevue_diagrams_cli::{Args, error_adapter};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

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

    info!(log_level:?; "Starting LiveVue diagram generator");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = livevue_diagrams_cli::run(&args) {
        let mut stderr_report = String::new();
        error_adapter::report(&err, log_level, &mut stderr_report)
            .expect("Writing to String buffer is infallible");
        if !stderr_report.is_empty() {
            eprint!("{stderr_report}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
