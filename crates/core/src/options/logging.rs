use serde::{Deserialize, Serialize};

/// Options shaping the executable's own status output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggingOptions {
    /// Lists files without copying them (`/l`).
    pub list_only: Option<bool>,
    /// Reports all extra files (`/x`).
    pub include_extra_files: Option<bool>,
    /// Verbose output, including skipped files (`/v`).
    pub verbose: Option<bool>,
    /// Includes source time stamps (`/ts`).
    pub include_source_timestamps: Option<bool>,
    /// Includes full path names (`/fp`).
    pub include_full_paths: Option<bool>,
    /// Prints sizes as bytes (`/bytes`).
    pub sizes_as_bytes: Option<bool>,
    /// Omits file sizes (`/ns`).
    pub exclude_file_sizes: Option<bool>,
    /// Omits file classes (`/nc`).
    pub exclude_file_classes: Option<bool>,
    /// Omits file names (`/nfl`).
    pub exclude_filenames: Option<bool>,
    /// Omits directory names (`/ndl`).
    pub exclude_directory_names: Option<bool>,
    /// Hides the progress counter (`/np`).
    pub hide_progress: Option<bool>,
    /// Shows the estimated time of arrival (`/eta`).
    pub show_eta: Option<bool>,
    /// Log file written by the executable (`/log`, `/log+`, `/unilog`, `/unilog+`).
    pub output: Option<LogOutput>,
    /// Displays status output as Unicode (`/unicode`).
    pub show_unicode: Option<bool>,
    /// Writes to the console as well as the log file (`/tee`).
    pub show_and_log: Option<bool>,
    /// Suppresses the job header (`/njh`).
    pub no_job_header: Option<bool>,
    /// Suppresses the job summary (`/njs`).
    pub no_job_summary: Option<bool>,
}

/// Log file target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogOutput {
    /// Path of the log file.
    pub file: String,
    /// Truncates an existing log instead of appending to it.
    #[serde(default)]
    pub overwrite: Option<bool>,
    /// Writes the log as Unicode.
    #[serde(default)]
    pub unicode: Option<bool>,
}
