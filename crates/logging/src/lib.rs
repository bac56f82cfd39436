#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns command-line verbosity into a `tracing` subscriber. Library
//! crates in the workspace only emit events through the `tracing` macros,
//! using targets under `robomirror::`; the binary decides once at start-up
//! how much of that reaches standard error.
//!
//! # Design
//!
//! [`Verbosity`] is a five-step ladder derived from a repeated `-v` count and
//! a `--quiet` flag. Each step maps to a default filter directive. When
//! `RUST_LOG` is set it replaces that default entirely, so a single
//! environment variable can focus output on one target.
//!
//! # Examples
//!
//! ```
//! use logging::{Verbosity, try_init_tracing};
//!
//! let verbosity = Verbosity::from_flags(2, false);
//! assert_eq!(verbosity, Verbosity::Debug);
//!
//! // A second installation attempt reports an error instead of panicking.
//! let _ = try_init_tracing(verbosity);
//! assert!(try_init_tracing(verbosity).is_err());
//! ```

mod subscriber;
mod verbosity;

pub use subscriber::{build_subscriber, env_filter, init_tracing, try_init_tracing};
pub use verbosity::Verbosity;
