//! Derivation of an identifier-safe project name for a dependency.
//! The result doubles as the generated class name, so it must be a valid
//! bare identifier in the emitted source.

use crate::manifest::Dependency;

/// Checks whether `value` is a valid bare identifier token: a letter or
/// underscore followed by letters, digits, or underscores.
pub fn is_valid_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Collapses hyphen-separated words into PascalCase and capitalizes the
/// first character. `"my-awesome-lib"` becomes `"MyAwesomeLib"`, a
/// trailing hyphen is simply dropped. Empty input stays empty.
fn normalize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    let mut chars = result.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            first.to_uppercase().chain(chars).collect()
        }
        _ => result,
    }
}

/// Returns the display/class name for a dependency.
///
/// A curated `cmake_find_package` hint wins over the raw package name when
/// it is already identifier-shaped, and is used verbatim in that case.
/// Otherwise the raw name is normalized; raw names may carry characters
/// (hyphens, lowercase first letter) that are unsafe for a class name.
pub fn preferred_name(dependency: &Dependency) -> String {
    if let Some(hints) = &dependency.names {
        if is_valid_identifier(&hints.find_package_name) {
            return hints.find_package_name.clone();
        }
    }
    normalize(&dependency.name)
}
