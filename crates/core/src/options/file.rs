use std::fmt;

use serde::{Deserialize, Serialize};

/// Options selecting which files take part in the copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileOptions {
    /// Copies only files with the Archive attribute set (`/a`).
    pub copy_archived: Option<bool>,
    /// Like `copy_archived`, then resets the attribute (`/m`).
    pub copy_archived_and_reset: Option<bool>,
    /// Includes only files with any of these attributes (`/ia:<attrs>`).
    pub include_attributes: Option<String>,
    /// Excludes files with any of these attributes (`/xa:<attrs>`).
    pub exclude_attributes: Option<String>,
    /// File names, paths or wildcards to exclude (`/xf ...`).
    pub exclude_files: Option<Vec<String>>,
    /// Directories to exclude (`/xd ...`).
    pub exclude_dirs: Option<Vec<String>>,
    /// Keeps `exclude_dirs` as given instead of resolving them against the
    /// source and destination.
    pub exclude_dirs_relative: Option<bool>,
    /// Excludes changed files (`/xct`).
    pub exclude_changed_files: Option<bool>,
    /// Excludes newer files (`/xn`).
    pub exclude_newer_files: Option<bool>,
    /// Excludes older files (`/xo`).
    pub exclude_older_files: Option<bool>,
    /// Excludes extra files and directories (`/xx`).
    pub exclude_extra_files_and_dirs: Option<bool>,
    /// Excludes lonely files and directories (`/xl`).
    pub exclude_lonely_files_and_dirs: Option<bool>,
    /// Includes same files (`/is`).
    pub include_same_files: Option<bool>,
    /// Includes tweaked files (`/it`).
    pub include_tweaked_files: Option<bool>,
    /// Maximum file size in bytes (`/max:N`).
    pub maximum_size: Option<u64>,
    /// Minimum file size in bytes (`/min:N`).
    pub minimum_size: Option<u64>,
    /// Maximum file age (`/maxage:N`).
    pub maximum_age: Option<AgeLimit>,
    /// Minimum file age (`/minage:N`).
    pub minimum_age: Option<AgeLimit>,
    /// Maximum last access (`/maxlad:N`).
    pub maximum_last_access: Option<AgeLimit>,
    /// Minimum last access (`/minlad:N`).
    pub minimum_last_access: Option<AgeLimit>,
    /// Assumes FAT file times (`/fft`).
    pub fat_file_times: Option<bool>,
    /// Compensates for one-hour DST differences (`/dst`).
    pub compensate_for_dst: Option<bool>,
    /// Excludes all junction points (`/xj`).
    pub exclude_junctions: Option<bool>,
    /// Excludes directory junction points (`/xjd`).
    pub exclude_directory_junctions: Option<bool>,
    /// Excludes file junction points (`/xjf`).
    pub exclude_file_junctions: Option<bool>,
}

/// Age threshold accepted by the `/maxage`, `/minage`, `/maxlad` and
/// `/minlad` switches.
///
/// The executable reads values below 1900 as a number of days and anything
/// else as a `YYYYMMDD` date; both forms are passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeLimit {
    /// Number of days, or a date written as a number.
    Days(u64),
    /// Date or day count written as text.
    Date(String),
}

impl AgeLimit {
    /// Zero and the empty string carry no threshold.
    pub(crate) fn is_set(&self) -> bool {
        match self {
            Self::Days(days) => *days != 0,
            Self::Date(date) => !date.is_empty(),
        }
    }
}

impl fmt::Display for AgeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days}"),
            Self::Date(date) => f.write_str(date),
        }
    }
}
