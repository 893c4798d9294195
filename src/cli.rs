//! Command-line interface implementation.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_NAMESPACE;
use crate::name::is_valid_identifier;
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "conan-sharpmake: generate Sharpmake projects from conanbuildinfo.json",
    long_about = None
)]
pub struct Args {
    /// Directory where conanbuildinfo.json is located
    #[arg(long = "inputPath", value_name = "PATH")]
    pub input_path: PathBuf,

    /// Directory where the *.sharpmake.cs files will be written
    #[arg(long = "outputPath", value_name = "PATH")]
    pub output_path: PathBuf,

    /// Namespace under which packages will be generated
    #[arg(
        long = "namespace",
        value_name = "NAMESPACE",
        default_value = DEFAULT_NAMESPACE,
        value_parser = parse_namespace
    )]
    pub namespace: String,

    /// Register build targets derived from the manifest settings instead
    /// of the fixed win64/vs2022 defaults
    #[arg(
        long = "deriveTargets",
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = parse_flexible_bool,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub derive_targets: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses a boolean option value.
///
/// Accepts `true`/`false` (case-sensitive, surrounding whitespace
/// ignored) or any integer, where values above zero count as true.
pub fn parse_flexible_bool(value: &str) -> Result<bool, String> {
    let trimmed = value.trim();
    match trimmed {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => match trimmed.parse::<i64>() {
            Ok(number) => Ok(number > 0),
            Err(_) => Err(format!("'{}' is not a valid boolean value", value)),
        },
    }
}

fn parse_namespace(value: &str) -> Result<String, String> {
    if is_valid_identifier(value) {
        Ok(value.to_string())
    } else {
        Err(format!("'{}' is not a valid namespace identifier", value))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With the usage text and status code 1 when invoked without arguments
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    if std::env::args_os().len() <= 1 {
        Args::command().print_help().unwrap();
        std::process::exit(1);
    }
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
