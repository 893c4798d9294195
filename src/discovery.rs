//! Shared-library discovery for binary-copy directives.

use crate::constants::SHARED_LIBRARY_GLOB;
use crate::error::{Error, Result};
use globset::{Glob, GlobSetBuilder};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists shared libraries found directly inside the given directories, in
/// directory order. Listing order within a directory is not guaranteed.
///
/// A directory that is missing or unreadable yields no matches for that
/// entry; it never aborts the run.
pub fn discover_shared_libraries(directories: &[String]) -> Result<Vec<PathBuf>> {
    let mut builder = GlobSetBuilder::new();
    builder.add(
        Glob::new(SHARED_LIBRARY_GLOB)
            .map_err(|e| Error::Discovery(format!("invalid pattern: {}", e)))?,
    );
    let matcher = builder
        .build()
        .map_err(|e| Error::Discovery(format!("invalid pattern: {}", e)))?;

    let mut found = Vec::new();
    for directory in directories {
        let path = Path::new(directory);
        if !path.is_dir() {
            debug!("Skipping missing binary directory: {}", directory);
            continue;
        }

        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
                found.push(entry.into_path());
            }
        }
    }

    Ok(found)
}
