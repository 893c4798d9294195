//! Typed model of the Conan build-info manifest.
//! Wire keys are Conan's snake_case/dotted names; field names here are
//! semantic. Sequence and string fields tolerate both absent keys and
//! explicit nulls, so downstream code never sees a missing collection.

use crate::constants::DEFAULT_OPTIMIZATION;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};

fn null_to_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// CMake/pkg-config package-name hints attached to a dependency.
/// Only `find_package_name` participates in preferred-name derivation.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NameHints {
    #[serde(default, deserialize_with = "null_to_default", rename = "cmake_find_package")]
    pub find_package_name: String,

    #[serde(
        default,
        deserialize_with = "null_to_default",
        rename = "cmake_find_package_multi"
    )]
    pub find_package_multi_name: String,

    #[serde(default, deserialize_with = "null_to_default", rename = "pkg_config")]
    pub pkg_config_name: String,
}

/// Toolchain settings the manifest was resolved with.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Settings {
    #[serde(default, deserialize_with = "null_to_default", rename = "arch")]
    pub target_arch: String,

    #[serde(default, deserialize_with = "null_to_default", rename = "arch_build")]
    pub arch_build: String,

    #[serde(default, deserialize_with = "null_to_default", rename = "build_type")]
    pub build_type: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub compiler: String,

    #[serde(default, deserialize_with = "null_to_default", rename = "compiler.runtime")]
    pub compiler_runtime: String,

    #[serde(default, deserialize_with = "null_to_default", rename = "compiler.version")]
    pub compiler_version: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub os: String,

    #[serde(default, deserialize_with = "null_to_default", rename = "os_build")]
    pub os_build: String,
}

impl Settings {
    /// Maps (os, arch) to a Sharpmake platform token.
    ///
    /// Returns `None` when no rule matches.
    pub fn platform(&self) -> Option<&'static str> {
        match (self.os.as_str(), self.target_arch.as_str()) {
            ("Windows", "x86_64") => Some("Platform.win64"),
            ("Windows", "x86_86") => Some("Platform.win32"), // sic
            _ => None,
        }
    }

    /// Maps (compiler, compiler.version) to a Sharpmake dev environment
    /// token. Returns `None` when no rule matches.
    pub fn toolchain(&self) -> Option<&'static str> {
        if self.compiler != "Visual Studio" {
            return None;
        }
        match self.compiler_version.as_str() {
            "15" => Some("DevEnv.vs2015"),
            "17" => Some("DevEnv.vs2017"),
            "19" | "22" => Some("DevEnv.vs2019"),
            _ => None,
        }
    }

    /// Optimization levels to register targets for. Not derived from the
    /// build type yet; every project gets both configurations.
    pub fn optimization(&self) -> &'static str {
        DEFAULT_OPTIMIZATION
    }
}

/// One resolved package from the manifest.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Dependency {
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub version: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_to_default", rename = "rootpath")]
    pub root_path: String,

    #[serde(default, deserialize_with = "null_to_default", rename = "sysroot")]
    pub sys_root: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub include_paths: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub lib_paths: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub bin_paths: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub build_paths: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub res_paths: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub libs: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub system_libs: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub defines: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default", rename = "cflags")]
    pub c_flags: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default", rename = "cxxflags")]
    pub cxx_flags: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default", rename = "sharedlinkflags")]
    pub shared_link_flags: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default", rename = "exelinkflags")]
    pub exe_link_flags: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub frameworks: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub framework_paths: Vec<String>,

    #[serde(default, deserialize_with = "null_to_default", rename = "cppflags")]
    pub cpp_flags: Vec<String>,

    #[serde(default)]
    pub names: Option<NameHints>,

    #[serde(default)]
    pub filenames: Option<NameHints>,

    // Opaque, carried through for completeness but never interpreted.
    #[serde(default)]
    pub build_modules: Option<serde_json::Value>,

    #[serde(default)]
    pub build_modules_paths: Option<serde_json::Value>,
}

/// Root of the parsed manifest.
///
/// `dependencies` stays optional at this level so the pipeline driver can
/// distinguish an absent list (fatal) from an empty one (nothing to do).
#[derive(Debug, Default, Deserialize)]
pub struct BuildInfo {
    #[serde(default)]
    pub settings: Option<Settings>,

    #[serde(default)]
    pub dependencies: Option<Vec<Dependency>>,
}

/// Parses manifest text into a [`BuildInfo`].
///
/// # Errors
/// * `Error::Manifest` if the content is empty or not valid JSON
pub fn parse_build_info(content: &str) -> Result<BuildInfo> {
    serde_json::from_str(content).map_err(|e| {
        Error::Manifest(format!(
            "cannot read manifest as JSON ({}), make sure the file is not empty",
            e
        ))
    })
}
