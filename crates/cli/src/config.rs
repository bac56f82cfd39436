//! Loading configuration documents and applying command-line overrides.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use mirror_core::{MirrorError, MirrorOptions, OneOrMany, ROBOCOPY_PROGRAM};

use crate::PROGRAM_ENV;

/// Reads and deserializes the JSON document at `path`.
pub(crate) fn load_options(path: &Path) -> Result<MirrorOptions, MirrorError> {
    let text = fs::read_to_string(path).map_err(|error| MirrorError::config(path, error))?;
    serde_json::from_str(&text).map_err(|error| MirrorError::config(path, error))
}

/// Replaces the configured destinations when any were given on the command
/// line.
pub(crate) fn apply_destinations(options: &mut MirrorOptions, mut destinations: Vec<String>) {
    options.destination = match destinations.len() {
        0 => return,
        1 => OneOrMany::One(destinations.remove(0)),
        _ => OneOrMany::Many(destinations),
    };
}

/// Picks the executable: the explicit flag, then a non-empty
/// [`PROGRAM_ENV`], then robocopy on `PATH`.
pub(crate) fn resolve_program(flag: Option<OsString>) -> OsString {
    flag.filter(|value| !value.is_empty())
        .or_else(|| std::env::var_os(PROGRAM_ENV).filter(|value| !value.is_empty()))
        .unwrap_or_else(|| OsString::from(ROBOCOPY_PROGRAM))
}
