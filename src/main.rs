//! Main application entry point.
//! Parses the command line, validates the invocation parameters, and hands
//! off to the generation pipeline.

use conan_sharpmake::{
    cli::{get_args, Args},
    constants::MANIFEST_FILE,
    error::{default_error_handler, Error, Result},
    generator::{generate, GeneratorParameters},
    logger::init_logger,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Validates CLI input and builds the invocation configuration.
///
/// # Errors
/// * `Error::Argument` if the input path is not a directory or does not
///   contain the manifest
fn resolve_parameters(args: Args) -> Result<GeneratorParameters> {
    if !args.input_path.is_dir() {
        return Err(Error::Argument(format!(
            "inputPath '{}' does not lead to a directory",
            args.input_path.display()
        )));
    }
    if !args.input_path.join(MANIFEST_FILE).is_file() {
        return Err(Error::Argument(format!(
            "inputPath '{}' does not contain {}",
            args.input_path.display(),
            MANIFEST_FILE
        )));
    }

    Ok(GeneratorParameters {
        working_directory: args.input_path,
        output_directory: args.output_path,
        package_namespace: args.namespace,
        derive_targets: args.derive_targets,
    })
}

fn run(args: Args) -> Result<()> {
    let parameters = resolve_parameters(args)?;
    generate(&parameters)?;
    Ok(())
}
