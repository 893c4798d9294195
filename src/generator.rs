//! Pipeline driver.
//! Reads the manifest and the optional ignore list, then walks the
//! dependency list in manifest order and emits one project file each.
//! There is no partial-failure recovery: any emission error aborts the
//! run, and a rerun simply regenerates everything.

use crate::constants::MANIFEST_FILE;
use crate::emitter::{ProjectContext, ProjectEmitter};
use crate::error::{Error, Result};
use crate::ignore::load_ignore_list;
use crate::manifest::{parse_build_info, Dependency};
use crate::name::preferred_name;
use log::warn;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Resolved invocation configuration, built once from CLI input.
#[derive(Debug, Clone)]
pub struct GeneratorParameters {
    /// Directory containing the manifest and the optional ignore list
    pub working_directory: PathBuf,
    /// Directory the project files are written into
    pub output_directory: PathBuf,
    /// Namespace wrapping every generated class
    pub package_namespace: String,
    /// Derive build targets from manifest settings instead of the fixed
    /// defaults
    pub derive_targets: bool,
}

/// Rejects dependency lists that would collide on disk or in the generated
/// namespace. Two entries with the same raw name target the same output
/// file, which would silently overwrite; that is an error. Distinct raw
/// names mapping to the same project class only draw a warning, since the
/// files themselves stay separate.
fn check_duplicates(dependencies: &[Dependency]) -> Result<()> {
    let mut names = HashSet::new();
    let mut projects = HashSet::new();
    for dependency in dependencies {
        if !names.insert(dependency.name.as_str()) {
            return Err(Error::DuplicateName(dependency.name.clone()));
        }
        let project = preferred_name(dependency);
        if !projects.insert(project.clone()) {
            warn!(
                "Dependencies normalize to the same project name '{}', generated classes will clash.",
                project
            );
        }
    }
    Ok(())
}

/// Runs the whole pipeline and returns the number of files generated.
///
/// # Errors
/// * `Error::Io` if the manifest, or a present ignore list, cannot be read
/// * `Error::Manifest` if it is empty or not valid JSON
/// * `Error::MissingDependencies` if it has no dependency list
/// * `Error::DuplicateName` if two dependencies share a raw name
pub fn generate(parameters: &GeneratorParameters) -> Result<usize> {
    println!("conan-sharpmake - generating packages");
    println!("Input directory  : {}", parameters.working_directory.display());
    println!("Output directory : {}", parameters.output_directory.display());
    println!("Package namespace: {}", parameters.package_namespace);

    let manifest_path = parameters.working_directory.join(MANIFEST_FILE);
    let manifest_text = fs::read_to_string(&manifest_path)?;
    let build_info = parse_build_info(&manifest_text)?;

    let dependencies = build_info.dependencies.ok_or(Error::MissingDependencies)?;
    let ignore_list = load_ignore_list(&parameters.working_directory)?;

    check_duplicates(&dependencies)?;

    let emitter = ProjectEmitter::new()?;
    let mut generated = 0;
    for dependency in &dependencies {
        let context = ProjectContext::build(
            dependency,
            build_info.settings.as_ref(),
            &ignore_list,
            &parameters.package_namespace,
            parameters.derive_targets,
        )?;
        emitter.emit(&context, &parameters.output_directory)?;
        generated += 1;
    }

    println!("Successfully generated {} packages.", generated);
    Ok(generated)
}
