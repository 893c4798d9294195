use conan_sharpmake::emitter::{ProjectContext, ProjectEmitter};
use conan_sharpmake::manifest::{Dependency, NameHints, Settings};
use std::collections::HashSet;
use std::fs;

fn build_context(dep: &Dependency, ignore: &HashSet<String>) -> ProjectContext {
    ProjectContext::build(dep, None, ignore, "ConanPackages", false).unwrap()
}

fn render(dep: &Dependency, ignore: &HashSet<String>) -> String {
    let emitter = ProjectEmitter::new().unwrap();
    emitter.render(&build_context(dep, ignore)).unwrap()
}

fn zlib_dependency() -> Dependency {
    Dependency {
        name: "zlib".to_string(),
        names: Some(NameHints {
            find_package_name: "ZLIB".to_string(),
            ..Default::default()
        }),
        include_paths: vec!["/usr/include".to_string()],
        libs: vec!["z".to_string(), "z_debug".to_string()],
        ..Default::default()
    }
}

#[test]
fn test_zlib_scenario() {
    let ignore = HashSet::from(["z_debug".to_string()]);
    let content = render(&zlib_dependency(), &ignore);

    assert!(content.contains("public class ZLIBProject : Project"));
    assert!(content.contains("Name = \"ZLIB\";"));
    assert!(content.contains("conf.IncludePaths.Add(@\"/usr/include\");"));
    assert!(content.contains("conf.LibraryFiles.Add(@\"z\");"));
    assert!(!content.contains("z_debug"));
    assert_eq!(content.matches("conf.LibraryFiles.Add").count(), 1);
}

#[test]
fn test_all_libraries_ignored_keeps_section_header() {
    let ignore = HashSet::from(["z".to_string(), "z_debug".to_string()]);
    let content = render(&zlib_dependency(), &ignore);

    // The header is gated on the unfiltered library list, so it survives
    // even when every entry is filtered out.
    assert!(content.contains("// --- Library file directives ---"));
    assert_eq!(content.matches("conf.LibraryFiles.Add").count(), 0);
}

#[test]
fn test_no_libraries_omits_section_header() {
    let dep = Dependency {
        name: "zlib".to_string(),
        include_paths: vec!["/usr/include".to_string()],
        ..Default::default()
    };
    let content = render(&dep, &HashSet::new());

    assert!(!content.contains("// --- Library file directives ---"));
}

#[test]
fn test_empty_ignore_list_keeps_every_library() {
    let content = render(&zlib_dependency(), &HashSet::new());

    assert_eq!(content.matches("conf.LibraryFiles.Add").count(), 2);
    assert!(content.contains("conf.LibraryFiles.Add(@\"z_debug\");"));
}

#[test]
fn test_fixed_preamble_and_namespace() {
    let dep = Dependency { name: "zlib".to_string(), ..Default::default() };
    let emitter = ProjectEmitter::new().unwrap();
    let context =
        ProjectContext::build(&dep, None, &HashSet::new(), "MyPackages", false).unwrap();
    let content = emitter.render(&context).unwrap();

    assert!(content.starts_with("/* ---       Conan Sharpmake        --- */\n"));
    assert!(content.contains("/* --- This file is Autogenerated!  --- */"));
    assert!(content.contains("using Sharpmake;"));
    assert!(content.contains("namespace MyPackages\n{"));
    assert!(content.contains("[Export]"));
    assert!(content.ends_with("}\n"));
}

#[test]
fn test_fixed_default_target() {
    let content = render(&zlib_dependency(), &HashSet::new());

    assert!(content.contains(
        "AddTargets(new Target(Platform.win64, DevEnv.vs2022, \
         Optimization.Debug | Optimization.Release));"
    ));
}

#[test]
fn test_empty_sections_are_omitted() {
    let dep = Dependency { name: "header-only".to_string(), ..Default::default() };
    let content = render(&dep, &HashSet::new());

    assert!(content.contains("public class HeaderOnlyProject : Project"));
    assert!(content.contains("public void Configure(Configuration conf, Target target)"));
    assert!(!content.contains("// ---"));
    assert!(!content.contains("conf."));
}

#[test]
fn test_section_headers_and_spacing() {
    let dep = Dependency {
        name: "foo".to_string(),
        include_paths: vec!["C:\\include".to_string()],
        lib_paths: vec!["C:\\lib".to_string()],
        libs: vec!["foo".to_string()],
        defines: vec!["FOO_STATIC".to_string()],
        ..Default::default()
    };
    let content = render(&dep, &HashSet::new());

    // First section follows the opening brace directly, later sections are
    // separated by a blank line.
    assert!(content.contains("    {\n      // --- Include directives ---"));
    assert!(content.contains("\n\n      // --- Library path directives ---"));
    assert!(content.contains("\n\n      // --- Library file directives ---"));
    assert!(content.contains("\n\n      // --- Defines ---"));
    assert!(content.contains("conf.LibraryPaths.Add(@\"C:\\lib\");"));
    assert!(content.contains("conf.Defines.Add(@\"FOO_STATIC\");"));
}

#[test]
fn test_directives_preserve_input_order() {
    let dep = Dependency {
        name: "foo".to_string(),
        libs: vec!["b".to_string(), "a".to_string(), "c".to_string()],
        ..Default::default()
    };
    let content = render(&dep, &HashSet::new());

    let b = content.find("conf.LibraryFiles.Add(@\"b\");").unwrap();
    let a = content.find("conf.LibraryFiles.Add(@\"a\");").unwrap();
    let c = content.find("conf.LibraryFiles.Add(@\"c\");").unwrap();
    assert!(b < a && a < c);
}

#[test]
fn test_dll_copy_section() {
    let bin_dir = tempfile::tempdir().unwrap();
    fs::write(bin_dir.path().join("z.dll"), b"").unwrap();
    fs::write(bin_dir.path().join("notes.txt"), b"").unwrap();

    let dep = Dependency {
        name: "zlib".to_string(),
        bin_paths: vec![bin_dir.path().to_string_lossy().into_owned()],
        ..Default::default()
    };
    let content = render(&dep, &HashSet::new());

    assert_eq!(content.matches("// --- DLL Copies ---").count(), 1);
    assert_eq!(content.matches("conf.TargetCopyFiles.Add").count(), 1);
    assert!(content.contains(&format!(
        "conf.TargetCopyFiles.Add(@\"{}\");",
        bin_dir.path().join("z.dll").display()
    )));
}

#[test]
fn test_dll_copy_header_spans_multiple_directories() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(first.path().join("a.dll"), b"").unwrap();
    fs::write(second.path().join("b.dll"), b"").unwrap();

    let dep = Dependency {
        name: "multi".to_string(),
        bin_paths: vec![
            first.path().to_string_lossy().into_owned(),
            second.path().to_string_lossy().into_owned(),
        ],
        ..Default::default()
    };
    let content = render(&dep, &HashSet::new());

    assert_eq!(content.matches("// --- DLL Copies ---").count(), 1);
    assert_eq!(content.matches("conf.TargetCopyFiles.Add").count(), 2);
}

#[test]
fn test_derived_target_from_settings() {
    let settings = Settings {
        os: "Windows".to_string(),
        target_arch: "x86_64".to_string(),
        compiler: "Visual Studio".to_string(),
        compiler_version: "17".to_string(),
        ..Default::default()
    };
    let dep = Dependency { name: "zlib".to_string(), ..Default::default() };
    let emitter = ProjectEmitter::new().unwrap();

    let context =
        ProjectContext::build(&dep, Some(&settings), &HashSet::new(), "ConanPackages", true)
            .unwrap();
    let content = emitter.render(&context).unwrap();

    assert!(content.contains("new Target(Platform.win64, DevEnv.vs2017,"));
}

#[test]
fn test_unrecognized_settings_fall_back_to_defaults() {
    let settings = Settings {
        os: "Linux".to_string(),
        target_arch: "armv8".to_string(),
        compiler: "gcc".to_string(),
        compiler_version: "11".to_string(),
        ..Default::default()
    };
    let dep = Dependency { name: "zlib".to_string(), ..Default::default() };
    let emitter = ProjectEmitter::new().unwrap();

    let context =
        ProjectContext::build(&dep, Some(&settings), &HashSet::new(), "ConanPackages", true)
            .unwrap();
    let content = emitter.render(&context).unwrap();

    assert!(content.contains("new Target(Platform.win64, DevEnv.vs2022,"));
}

#[test]
fn test_emit_writes_and_overwrites() {
    let out = tempfile::tempdir().unwrap();
    let emitter = ProjectEmitter::new().unwrap();
    let context = build_context(&zlib_dependency(), &HashSet::new());

    let path = emitter.emit(&context, out.path()).unwrap();
    assert_eq!(path, out.path().join("zlib.sharpmake.cs"));
    let first = fs::read_to_string(&path).unwrap();

    fs::write(&path, "stale content").unwrap();
    emitter.emit(&context, out.path()).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
    assert!(second.contains("ZLIBProject"));
}

#[test]
fn test_emit_creates_missing_output_directory() {
    let out = tempfile::tempdir().unwrap();
    let nested = out.path().join("generated");
    let emitter = ProjectEmitter::new().unwrap();
    let context = build_context(&zlib_dependency(), &HashSet::new());

    let path = emitter.emit(&context, &nested).unwrap();

    assert!(path.exists());
    assert_eq!(path, nested.join("zlib.sharpmake.cs"));
}
