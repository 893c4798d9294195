//! Common constants used throughout the application.

/// Namespace under which packages are generated by default
pub const DEFAULT_NAMESPACE: &str = "ConanPackages";

/// Manifest file name, resolved relative to the input directory
pub const MANIFEST_FILE: &str = "conanbuildinfo.json";

/// Optional ignore-list file name, resolved relative to the input directory
pub const IGNORE_FILE: &str = "ignorelibs.txt";

/// Suffix of every generated project file
pub const PROJECT_FILE_SUFFIX: &str = "sharpmake.cs";

/// Glob matched against binary-directory entries when collecting copy
/// directives. Windows only for now.
pub const SHARED_LIBRARY_GLOB: &str = "*.dll";

/// Fixed build target used when `--deriveTargets` is off or when no
/// settings rule matches.
pub const DEFAULT_PLATFORM: &str = "Platform.win64";
pub const DEFAULT_DEVENV: &str = "DevEnv.vs2022";
pub const DEFAULT_OPTIMIZATION: &str = "Optimization.Debug | Optimization.Release";
