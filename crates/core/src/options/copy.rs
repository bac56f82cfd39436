use serde::{Deserialize, Serialize};

/// Options controlling how files are copied.
///
/// Field order matches the order in which tokens are emitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyOptions {
    /// Copies subdirectories, excluding empty ones (`/s`).
    pub subdirs: Option<bool>,
    /// Copies subdirectories, including empty ones (`/e`).
    pub empty_subdirs: Option<bool>,
    /// Copies only the top N levels of the source tree (`/lev:N`).
    pub levels: Option<u32>,
    /// Copies files in restartable mode (`/z`).
    pub restart_mode: Option<bool>,
    /// Copies files in backup mode (`/b`).
    pub backup_mode: Option<bool>,
    /// Restartable mode, falling back to backup mode on access denial (`/zb`).
    pub restart_then_backup_mode: Option<bool>,
    /// Copies encrypted files in EFS RAW mode (`/efsraw`).
    pub efs_raw_mode: Option<bool>,
    /// File properties to copy, e.g. `DAT` (`/copy:<flags>`).
    pub info: Option<String>,
    /// Copies directory time stamps (`/dcopy:T`).
    pub dir_timestamps: Option<bool>,
    /// Copies files with security (`/sec`).
    pub security_info: Option<bool>,
    /// Copies all file information (`/copyall`).
    pub all_info: Option<bool>,
    /// Copies no file information (`/nocopy`).
    pub no_info: Option<bool>,
    /// Fixes file security on all files, even skipped ones (`/secfix`).
    pub fix_security: Option<bool>,
    /// Fixes file times on all files, even skipped ones (`/timfix`).
    pub fix_times: Option<bool>,
    /// Deletes destination entries that no longer exist in the source (`/purge`).
    pub purge: Option<bool>,
    /// Mirrors the directory tree (`/mir`).
    pub mirror: Option<bool>,
    /// Moves files, deleting them from the source (`/mov`).
    pub move_files: Option<bool>,
    /// Moves files and directories (`/move`).
    pub move_files_and_dirs: Option<bool>,
    /// Attributes added to copied files (`/a+:<attrs>`).
    pub add_attributes: Option<String>,
    /// Attributes removed from copied files (`/a-:<attrs>`).
    pub remove_attributes: Option<String>,
    /// Creates the directory tree and zero-length files only (`/create`).
    pub create_dirs_and_empty_files: Option<bool>,
    /// Uses 8.3 FAT file names (`/fat`).
    pub fat_filenames: Option<bool>,
    /// Disables very long path support (`/256`).
    pub disable_long_paths: Option<bool>,
    /// Reruns after more than N changes are seen (`/mon:N`).
    pub monitor_count_trigger: Option<u32>,
    /// Reruns every M minutes when changes are seen (`/mot:M`).
    pub monitor_time_trigger: Option<u32>,
    /// Multi-threaded copying (`/MT` or `/MT:N`).
    pub multi_threaded: Option<ThreadCount>,
    /// Window in which new copies may start (`/rh:hhmm-hhmm`).
    pub run_times: Option<RunTimes>,
    /// Inter-packet gap in milliseconds (`/ipg:n`).
    pub inter_packet_gap: Option<u32>,
    /// Copies symbolic links instead of their targets (`/sl`).
    pub symbolic_link: Option<bool>,
}

/// Either a plain on/off switch or an explicit thread count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThreadCount {
    /// `true` enables the executable's default thread count.
    Enabled(bool),
    /// Explicit number of threads; zero disables the option.
    Threads(u32),
}

/// Run-hour window, given as `hh:mm` clock strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTimes {
    /// Start of the window.
    pub start: String,
    /// End of the window.
    pub end: String,
    /// Checks the window per file instead of per pass (`/pf`).
    #[serde(default)]
    pub check_per_file: Option<bool>,
}
