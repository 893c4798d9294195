//! Library ignore-list handling.
//! Reads the optional `ignorelibs.txt` next to the manifest into a set of
//! library tokens excluded from generated library-file directives.

use crate::constants::IGNORE_FILE;
use crate::error::Result;
use log::warn;
use std::collections::HashSet;
use std::fs::read_to_string;
use std::io;
use std::path::Path;

/// Loads the ignore list from `<input_dir>/ignorelibs.txt`.
///
/// # Notes
/// - One library token per line, matched exactly against `libs` entries
/// - An absent file is not an error: a warning is logged and an empty set
///   is returned
/// - Any other read failure (permissions, wrong file type) is fatal
pub fn load_ignore_list<P: AsRef<Path>>(input_dir: P) -> Result<HashSet<String>> {
    let path = input_dir.as_ref().join(IGNORE_FILE);
    match read_to_string(&path) {
        Ok(contents) => Ok(contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("{} not found, continuing without ignore list.", IGNORE_FILE);
            Ok(HashSet::new())
        }
        Err(err) => Err(err.into()),
    }
}
