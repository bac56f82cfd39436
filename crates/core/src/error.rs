//! Error type shared by the compiler front door, the runner and the
//! orchestrator.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::PathBuf;

use tokio::task::JoinError;

use crate::exit_code::{FATAL_EXIT_CODE, MAX_EXIT_CODE};

/// Errors produced while preparing or running mirroring invocations.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    /// The executable could not be started.
    #[error("failed to launch '{}': {source}", .program.to_string_lossy())]
    Spawn {
        /// Program that failed to start.
        program: OsString,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Waiting for the process or collecting its output failed.
    #[error("failed to collect output of '{}': {source}", .program.to_string_lossy())]
    Io {
        /// Program being waited on.
        program: OsString,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The process exited above the success ceiling or was killed by a
    /// signal.
    #[error(
        "{} failed with ({}), signal: {}",
        .program.to_string_lossy(),
        NullOr(.code),
        NullOr(.signal)
    )]
    Failed {
        /// Program that failed.
        program: OsString,
        /// Exit code, absent when the process was terminated by a signal.
        code: Option<i32>,
        /// Terminating signal, if any.
        signal: Option<i32>,
    },

    /// A spawned run task panicked or was cancelled.
    #[error("mirroring task did not complete: {0}")]
    Join(#[from] JoinError),

    /// The configuration was rejected by [`MirrorOptions::validate`](crate::options::MirrorOptions::validate).
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A configuration document could not be read or parsed.
    #[error("failed to load configuration {}: {source}", .path.display())]
    Config {
        /// Path of the configuration document.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl MirrorError {
    /// Creates a [`MirrorError::Spawn`].
    pub fn spawn(program: &OsStr, source: io::Error) -> Self {
        Self::Spawn {
            program: program.to_owned(),
            source,
        }
    }

    /// Creates a [`MirrorError::Io`].
    pub fn io(program: &OsStr, source: io::Error) -> Self {
        Self::Io {
            program: program.to_owned(),
            source,
        }
    }

    /// Creates a [`MirrorError::Config`].
    pub fn config(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self::Config {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Exit code a front end should terminate with for this error.
    ///
    /// Failed runs propagate the executable's own code; signal terminations
    /// map to `128 + signal`, clamped to [`MAX_EXIT_CODE`]. Everything else
    /// reports [`FATAL_EXIT_CODE`].
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Failed {
                code: Some(code), ..
            } => *code,
            Self::Failed {
                signal: Some(signal),
                ..
            } => 128_i32.saturating_add(*signal).min(MAX_EXIT_CODE),
            _ => FATAL_EXIT_CODE,
        }
    }
}

/// Renders `None` as `null`.
struct NullOr<'a>(&'a Option<i32>);

impl fmt::Display for NullOr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("null"),
        }
    }
}
