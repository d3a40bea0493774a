// Copyright © 2024 Docsmith. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line interface for Docsmith
//!
//! This module provides the command-line interface that turns a site params
//! file into the documentation engine's configuration file.
//!
//! # Examples
//!
//! ```
//! use docsmith::cli;
//!
//! let matches = cli::build().get_matches_from(vec![
//!     "docsmith",
//!     "build",
//!     "--params",
//!     "site.toml",
//!     "--format",
//!     "js",
//! ]);
//!
//! let build_cmd = matches.subcommand_matches("build").unwrap();
//! assert_eq!(build_cmd.get_one::<String>("format").unwrap(), "js");
//! ```

use crate::builder::ConfigBuilder;
use crate::core::config::ParamsLoader;
use crate::core::error::{DocsmithError, Result};
use crate::core::traits::FixedClock;
use crate::emit::{ConfigEmitter, OutputFormat};
use crate::params::SiteParams;
use clap::builder::NonEmptyStringValueParser;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use std::path::PathBuf;

/// The current version of Docsmith, as defined in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default output file of the `build` command.
pub const DEFAULT_OUTPUT: &str = "docusaurus.config.json";
/// Output path that means standard output.
pub const STDOUT: &str = "-";

fn params_arg() -> Arg {
    Arg::new("params")
        .short('p')
        .long("params")
        .help("Site params file (TOML, or YAML by extension)")
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

fn env_prefix_arg() -> Arg {
    Arg::new("env-prefix")
        .short('e')
        .long("env-prefix")
        .help("Read param overrides from environment variables with this prefix")
        .value_parser(NonEmptyStringValueParser::new())
}

fn set_arg() -> Arg {
    Arg::new("set")
        .short('s')
        .long("set")
        .help("Override a param, as KEY=VALUE")
        .value_name("KEY=VALUE")
        .value_parser(parse_key_value)
        .action(ArgAction::Append)
}

/// Builds and configures the Docsmith command-line interface.
pub fn build() -> Command {
    debug!("Building CLI command structure");

    Command::new("docsmith")
        .author("Docsmith Contributors")
        .about("Builds documentation-site configuration from site params.")
        .version(VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase logging verbosity (-v, -vv, -vvv)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Build the site configuration file")
                .arg(params_arg())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output file, or - for standard output")
                        .value_parser(value_parser!(PathBuf))
                        .default_value(DEFAULT_OUTPUT),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format")
                        .value_parser(["json", "js"])
                        .default_value("json"),
                )
                .arg(env_prefix_arg())
                .arg(set_arg())
                .arg(
                    Arg::new("year")
                        .long("year")
                        .help("Copyright year to use instead of the current one")
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("lenient")
                        .long("lenient")
                        .help("Skip params validation")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Write compact instead of pretty output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check a site params file without writing anything")
                .arg(params_arg())
                .arg(env_prefix_arg())
                .arg(set_arg()),
        )
        .subcommand(
            Command::new("profile")
                .about("Print the built-in maintainer profile as JSON"),
        )
}

/// Executes the command-line interface by parsing the process arguments.
pub fn execute() -> Result<()> {
    run(&build().get_matches())
}

/// Executes already parsed arguments.
///
/// # Returns
/// * `Result<()>` - Indicates success, or an error if execution fails.
pub fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("build", sub_matches)) => build_config(sub_matches),
        Some(("validate", sub_matches)) => validate_params(sub_matches),
        Some(("profile", _)) => print_profile(),
        _ => Err(DocsmithError::config_error("Unknown command", None)),
    }
}

fn load_params(matches: &ArgMatches) -> Result<SiteParams> {
    let path = required::<PathBuf>(matches, "params")?;
    let mut loader = ParamsLoader::new().with_file(path);

    if let Some(prefix) = matches.get_one::<String>("env-prefix") {
        loader = loader.with_env_prefix(prefix.as_str());
    }
    if let Some(pairs) = matches.get_many::<(String, String)>("set") {
        for (key, value) in pairs {
            loader = loader.with_override(key.as_str(), value.as_str());
        }
    }

    loader.load()
}

fn build_config(matches: &ArgMatches) -> Result<()> {
    let params = load_params(matches)?;
    let output = required::<PathBuf>(matches, "output")?;
    let format = required::<String>(matches, "format")?.parse::<OutputFormat>()?;

    let mut builder =
        ConfigBuilder::new().with_strict(!matches.get_flag("lenient"));
    if let Some(year) = matches.get_one::<i32>("year") {
        let clock = FixedClock::from_year(*year).ok_or_else(|| {
            DocsmithError::config_error(
                format!("Year out of range: {}", year),
                None,
            )
        })?;
        builder = builder.with_clock(clock);
    }

    info!("Building configuration for '{}'", params.title);
    let config = builder.build(&params)?;

    let emitter =
        ConfigEmitter::new(format).with_pretty(!matches.get_flag("compact"));
    if output.as_os_str() == STDOUT {
        print!("{}", emitter.render(&config)?);
        Ok(())
    } else {
        emitter.write(&config, output)
    }
}

fn validate_params(matches: &ArgMatches) -> Result<()> {
    let params = load_params(matches)?;
    params.validate()?;
    println!("Site params for '{}' are valid.", params.url);
    Ok(())
}

fn print_profile() -> Result<()> {
    let builder = ConfigBuilder::new();
    println!("{}", serde_json::to_string_pretty(builder.profile())?);
    Ok(())
}

fn required<'m, T>(matches: &'m ArgMatches, id: &str) -> Result<&'m T>
where
    T: Clone + Send + Sync + 'static,
{
    matches.get_one::<T>(id).ok_or_else(|| {
        DocsmithError::config_error(format!("Missing argument --{}", id), None)
    })
}

fn parse_key_value(
    raw: &str,
) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))
}
