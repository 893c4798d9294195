//! Project-file emission.
//! A dependency is first flattened into a [`ProjectContext`], then rendered
//! through a single fixed MiniJinja template. Keeping every formatting
//! decision in the template means the control flow stays testable on the
//! context alone.

use crate::constants::{DEFAULT_DEVENV, DEFAULT_OPTIMIZATION, DEFAULT_PLATFORM, PROJECT_FILE_SUFFIX};
use crate::discovery::discover_shared_libraries;
use crate::error::Result;
use crate::manifest::{Dependency, Settings};
use crate::name::preferred_name;
use log::debug;
use minijinja::Environment;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const PROJECT_TEMPLATE_NAME: &str = "project";

const PROJECT_TEMPLATE: &str = r#"/* ---       Conan Sharpmake        --- */
/* --- This file is Autogenerated!  --- */

using Sharpmake;

namespace {{ namespace }}
{

  [Export]
  public class {{ project_name }} : Project
  {

    public {{ project_name }}()
    {
       Name = "{{ display_name }}";
       AddTargets(new Target({{ platform }}, {{ devenv }}, {{ optimization }}));
    }

    [Configure]
    public void Configure(Configuration conf, Target target)
    {
{%- if include_paths %}
      // --- Include directives ---
{%- for path in include_paths %}
      conf.IncludePaths.Add(@"{{ path }}");
{%- endfor %}
{%- endif %}
{%- if lib_paths %}

      // --- Library path directives ---
{%- for path in lib_paths %}
      conf.LibraryPaths.Add(@"{{ path }}");
{%- endfor %}
{%- endif %}
{%- if has_libs %}

      // --- Library file directives ---
{%- for lib in libs %}
      conf.LibraryFiles.Add(@"{{ lib }}");
{%- endfor %}
{%- endif %}
{%- if defines %}

      // --- Defines ---
{%- for define in defines %}
      conf.Defines.Add(@"{{ define }}");
{%- endfor %}
{%- endif %}
{%- if dll_copies %}

      // --- DLL Copies ---
{%- for file in dll_copies %}
      conf.TargetCopyFiles.Add(@"{{ file }}");
{%- endfor %}
{%- endif %}
    }

  }

}
"#;

/// Everything the project template needs for one dependency, resolved up
/// front: preferred name, build target, filtered libraries, discovered
/// shared-library copies.
///
/// Values land in the generated file inside C# verbatim strings and are
/// trusted to not contain characters that would break that syntax.
#[derive(Debug, Serialize)]
pub struct ProjectContext {
    /// Raw dependency name; becomes the output file stem
    pub file_stem: String,
    pub namespace: String,
    pub project_name: String,
    pub display_name: String,
    pub platform: String,
    pub devenv: String,
    pub optimization: String,
    pub include_paths: Vec<String>,
    pub lib_paths: Vec<String>,
    /// Library files with ignored entries already filtered out
    pub libs: Vec<String>,
    /// The section header is gated on the unfiltered list, so a dependency
    /// whose libraries are all ignored still gets an (empty) section
    pub has_libs: bool,
    pub defines: Vec<String>,
    pub dll_copies: Vec<String>,
}

impl ProjectContext {
    /// Flattens a dependency into a render-ready context.
    ///
    /// # Arguments
    /// * `dependency` - The manifest entry to emit
    /// * `settings` - Manifest settings, consulted only with `derive_targets`
    /// * `ignore_list` - Library tokens excluded from library-file directives
    /// * `namespace` - Namespace wrapping the generated class
    /// * `derive_targets` - Derive platform/devenv from settings instead of
    ///   the fixed defaults; unmatched lookups fall back to the defaults
    pub fn build(
        dependency: &Dependency,
        settings: Option<&Settings>,
        ignore_list: &HashSet<String>,
        namespace: &str,
        derive_targets: bool,
    ) -> Result<Self> {
        let display_name = preferred_name(dependency);

        let (platform, devenv, optimization) = if derive_targets {
            (
                settings.and_then(Settings::platform).unwrap_or(DEFAULT_PLATFORM),
                settings.and_then(Settings::toolchain).unwrap_or(DEFAULT_DEVENV),
                settings.map(Settings::optimization).unwrap_or(DEFAULT_OPTIMIZATION),
            )
        } else {
            (DEFAULT_PLATFORM, DEFAULT_DEVENV, DEFAULT_OPTIMIZATION)
        };

        let has_libs = !dependency.libs.is_empty();
        let libs = dependency
            .libs
            .iter()
            .filter(|lib| !ignore_list.contains(*lib))
            .cloned()
            .collect();

        let dll_copies = discover_shared_libraries(&dependency.bin_paths)?
            .iter()
            .map(|file| file.display().to_string())
            .collect();

        Ok(Self {
            file_stem: dependency.name.clone(),
            namespace: namespace.to_string(),
            project_name: format!("{}Project", display_name),
            display_name,
            platform: platform.to_string(),
            devenv: devenv.to_string(),
            optimization: optimization.to_string(),
            include_paths: dependency.include_paths.clone(),
            lib_paths: dependency.lib_paths.clone(),
            libs,
            has_libs,
            defines: dependency.defines.clone(),
            dll_copies,
        })
    }
}

/// Renders project contexts through the fixed template and writes the
/// resulting files.
pub struct ProjectEmitter {
    env: Environment<'static>,
}

impl ProjectEmitter {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_template(PROJECT_TEMPLATE_NAME, PROJECT_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders one project file to a string.
    pub fn render(&self, context: &ProjectContext) -> Result<String> {
        let template = self.env.get_template(PROJECT_TEMPLATE_NAME)?;
        Ok(template.render(context)?)
    }

    /// Writes `<file_stem>.sharpmake.cs` under `output_dir`, creating the
    /// directory as needed and overwriting any existing file. Generation
    /// is idempotent, so overwriting is the intended behavior.
    pub fn emit<P: AsRef<Path>>(&self, context: &ProjectContext, output_dir: P) -> Result<PathBuf> {
        let content = self.render(context)?;
        let target = output_dir
            .as_ref()
            .join(format!("{}.{}", context.file_stem, PROJECT_FILE_SUFFIX));

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;
        debug!("Generated {}", target.display());

        Ok(target)
    }
}

