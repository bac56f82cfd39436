use serde::{Deserialize, Serialize};

/// Job file handling.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobOptions {
    /// Loads parameters from the named job file (`/job:"name"`).
    pub derive_parameters: Option<String>,
    /// Saves parameters to the named job file (`/save:"name"`).
    pub save_parameters: Option<String>,
    /// Quits after processing the command line (`/quit`).
    ///
    /// The field keeps the established configuration spelling.
    pub quite_after_processing: Option<bool>,
    /// No source directory is specified (`/nosd`).
    pub no_source_dir: Option<bool>,
    /// No destination directory is specified (`/nodd`).
    pub no_destination_dir: Option<bool>,
    /// Includes the specified files (`/if`).
    pub includes_files: Option<bool>,
}
