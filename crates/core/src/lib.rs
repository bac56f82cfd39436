#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Configuration-to-argument compiler.
pub mod compiler;
/// Per-destination expansion of a configuration.
pub mod dispatch;
/// Error type shared by every stage.
pub mod error;
/// Exit status vocabulary of the mirroring executable.
pub mod exit_code;
/// Prepared command lines.
pub mod invocation;
/// Strongly typed configuration model.
pub mod options;
/// Concurrent execution across destinations.
pub mod orchestrator;
/// Path normalisation helpers.
pub mod paths;
/// Running a single invocation.
pub mod process;

pub use compiler::CommandCompiler;
pub use dispatch::{Dispatcher, ROBOCOPY_PROGRAM, compile};
pub use error::MirrorError;
pub use exit_code::RobocopyExit;
pub use invocation::Invocation;
pub use options::{MirrorOptions, OneOrMany};
pub use orchestrator::{Mirror, RemainingRuns, mirror, run_all, run_all_with_remaining};
pub use process::run_invocation;
