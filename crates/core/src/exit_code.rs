//! Exit status vocabulary of the mirroring executable.
//!
//! The executable reports a bit mask rather than a single error number. Any
//! value up to [`SUCCESS_CEILING`] means the run completed, possibly with
//! files that were skipped or flagged; anything above it is a failure.
//!
//! | bit | meaning |
//! |-----|---------|
//! | 1   | one or more files were copied |
//! | 2   | extra files or directories were detected at the destination |
//! | 4   | mismatched files or directories were detected |
//! | 8   | some files or directories could not be copied |
//! | 16  | fatal error, nothing was copied |

use std::fmt;

/// Highest exit code still treated as a successful run.
pub const SUCCESS_CEILING: i32 = 8;

/// Exit code used when the executable could not be run at all, matching the
/// executable's own fatal bit.
pub const FATAL_EXIT_CODE: i32 = 16;

/// Largest exit code a process can report on Unix-like systems.
pub const MAX_EXIT_CODE: i32 = 255;

/// Decoded exit status of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RobocopyExit(i32);

impl RobocopyExit {
    const COPIED: i32 = 1;
    const EXTRA: i32 = 2;
    const MISMATCHED: i32 = 4;
    const FAILED_COPIES: i32 = 8;
    const FATAL: i32 = 16;

    /// Wraps a raw exit code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Returns `true` when the code is within `0..=SUCCESS_CEILING`.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 0 && self.0 <= SUCCESS_CEILING
    }

    /// Files were copied.
    #[must_use]
    pub const fn copied_files(self) -> bool {
        self.has(Self::COPIED)
    }

    /// Extra entries exist at the destination.
    #[must_use]
    pub const fn extra_entries(self) -> bool {
        self.has(Self::EXTRA)
    }

    /// Mismatched entries were found.
    #[must_use]
    pub const fn mismatched_entries(self) -> bool {
        self.has(Self::MISMATCHED)
    }

    /// Some entries could not be copied.
    #[must_use]
    pub const fn copy_failures(self) -> bool {
        self.has(Self::FAILED_COPIES)
    }

    /// The run aborted before copying anything.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        self.has(Self::FATAL)
    }

    const fn has(self, bit: i32) -> bool {
        self.0 >= 0 && self.0 & bit != 0
    }

    /// Human-readable descriptions of every bit set in the code.
    ///
    /// Zero yields a single "no changes" entry; negative codes yield nothing.
    #[must_use]
    pub fn descriptions(self) -> Vec<&'static str> {
        if self.0 == 0 {
            return vec!["no files were copied and nothing needed attention"];
        }

        [
            (self.copied_files(), "files were copied"),
            (self.extra_entries(), "extra files or directories detected"),
            (self.mismatched_entries(), "mismatched files or directories detected"),
            (self.copy_failures(), "some files or directories could not be copied"),
            (self.is_fatal(), "fatal error, no files were copied"),
        ]
        .into_iter()
        .filter_map(|(set, text)| set.then_some(text))
        .collect()
    }

    /// Set bits joined into a single line, empty for negative codes.
    #[must_use]
    pub fn description(self) -> String {
        self.descriptions().join("; ")
    }
}

impl From<i32> for RobocopyExit {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for RobocopyExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = self.description();
        if description.is_empty() {
            write!(f, "exit code {}", self.0)
        } else {
            write!(f, "exit code {} ({description})", self.0)
        }
    }
}
