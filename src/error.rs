//! Error handling for the application.
//! Defines the custom error type and result alias used throughout.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating project files.
///
/// Implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Represents missing or invalid command-line parameters
    #[error("Argument error: {0}.")]
    Argument(String),

    /// Represents an unreadable, empty, or structurally invalid manifest
    #[error("Manifest error: {0}.")]
    Manifest(String),

    /// The manifest parsed but carries no dependency list
    #[error("Manifest error: cannot find dependencies.")]
    MissingDependencies,

    /// Two dependencies would generate the same output file
    #[error("Duplicate dependency name: {0}.")]
    DuplicateName(String),

    /// Represents errors while listing shared libraries for copy directives
    #[error("Binary discovery error: {0}.")]
    Discovery(String),

    /// Represents errors raised by the project template
    #[error("Template error: {0}.")]
    Template(#[from] minijinja::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
