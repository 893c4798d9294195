//! conan-sharpmake converts a Conan-produced `conanbuildinfo.json` into
//! one Sharpmake C# project file per dependency, ready to be picked up by
//! a Sharpmake-based build configuration.

/// Command-line interface module
pub mod cli;

/// Constants shared across the application (file names, defaults)
pub mod constants;

/// Shared-library discovery for binary-copy directives
pub mod discovery;

/// Project-file rendering and writing
pub mod emitter;

/// Error types and handling
pub mod error;

/// Pipeline driver tying manifest, ignore list, and emitter together
pub mod generator;

/// Library ignore-list handling
/// Excludes listed tokens from generated library-file directives
pub mod ignore;

/// Logger initialization
pub mod logger;

/// Typed model of the Conan build-info manifest
pub mod manifest;

/// Identifier-safe project-name derivation
pub mod name;
