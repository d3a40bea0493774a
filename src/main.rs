// Copyright © 2024 Docsmith. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Docsmith CLI
//!
//! Entry point of the `docsmith` binary. It parses arguments, initialises
//! the logger according to `-v` and runs the selected command.

use anyhow::Context;
use log::{info, LevelFilter};

/// Maps the number of `-v` flags to a log level.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn run() -> Result<(), anyhow::Error> {
    let matches = docsmith::cli::build().get_matches();

    env_logger::Builder::from_default_env()
        .filter_level(level_for(matches.get_count("verbose")))
        .init();
    info!("Starting Docsmith v{}", docsmith::cli::VERSION);

    docsmith::cli::run(&matches).context("Docsmith failed")?;
    Ok(())
}

/// The main entry point for the Docsmith CLI.
fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
