#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front-end of `robomirror`. It loads a JSON
//! mirroring configuration, compiles it with [`mirror_core`] and either
//! prints the resulting command lines (`--dry-run`) or runs them, one
//! concurrent process per destination.
//!
//! # Design
//!
//! [`run`] accepts the argument iterator together with handles for standard
//! output and error so tests can drive it in-process. Parsing uses a `clap`
//! builder definition. The mirroring executable is `robocopy` unless
//! `--program` or the [`PROGRAM_ENV`] environment variable names another one.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - A failed destination's own exit code becomes the process exit code, so
//!   scripts can tell "some files could not be copied" from a fatal error.
//! - When one destination fails, the others are not cancelled. The failure is
//!   logged straight away; the front-end waits for the remaining runs before
//!   reporting it and exiting.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["robomirror", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8_lossy(&stdout).starts_with("robomirror "));
//! assert!(stderr.is_empty());
//! ```

mod arguments;
mod config;

use std::io::{self, Write};

use logging::Verbosity;
use mirror_core::{Dispatcher, Invocation, MirrorError, run_all_with_remaining};
use tokio::runtime::Builder;
use tracing::info;

use arguments::{ParsedArgs, parse_args, render_help};
use config::{apply_destinations, load_options, resolve_program};

/// Environment variable naming the mirroring executable when `--program` is
/// absent.
pub const PROGRAM_ENV: &str = "ROBOMIRROR_PROGRAM";

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Exit code for command-line usage errors.
const USAGE_EXIT_CODE: i32 = 1;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Mirror(#[from] MirrorError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Mirror(error) => error.exit_code(),
            Self::Runtime(_) | Self::Output(_) => mirror_core::exit_code::FATAL_EXIT_CODE,
        }
    }
}

/// Runs the front-end with `arguments`, writing results to `stdout` and
/// diagnostics to `stderr`.
///
/// Returns the exit code the process should terminate with.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => {
            let _ = write!(stderr, "{}", error.render());
            return USAGE_EXIT_CODE;
        }
    };

    if parsed.show_help {
        return match stdout.write_all(render_help().as_bytes()) {
            Ok(()) => 0,
            Err(_) => USAGE_EXIT_CODE,
        };
    }

    if parsed.show_version {
        return match writeln!(stdout, "robomirror {}", env!("CARGO_PKG_VERSION")) {
            Ok(()) => 0,
            Err(_) => USAGE_EXIT_CODE,
        };
    }

    logging::init_tracing(Verbosity::from_flags(parsed.verbose, parsed.quiet));

    match execute(parsed, stdout) {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(stderr, "robomirror: error: {error}");
            error.exit_code()
        }
    }
}

fn execute<Out: Write>(parsed: ParsedArgs, stdout: &mut Out) -> Result<(), CliError> {
    let ParsedArgs {
        dry_run,
        program,
        destinations,
        config,
        ..
    } = parsed;

    let Some(config) = config else {
        return Err(MirrorError::InvalidOptions("missing CONFIG operand".to_owned()).into());
    };

    let mut options = load_options(&config)?;
    apply_destinations(&mut options, destinations);
    options.validate()?;

    let invocations = Dispatcher::new()
        .with_program(resolve_program(program))
        .compile(&options);

    if dry_run {
        return print_invocations(&invocations, stdout);
    }

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    let result = runtime.block_on(async {
        let (result, remaining) = run_all_with_remaining(invocations).await;
        if let Some(remaining) = remaining {
            info!(
                target: "robomirror::orchestrator",
                remaining = remaining.count(),
                "waiting for remaining runs"
            );
            remaining.finished().await;
        }
        result
    });

    for output in result?.iter().filter(|output| !output.is_empty()) {
        writeln!(stdout, "{output}").map_err(CliError::Output)?;
    }
    Ok(())
}

fn print_invocations<Out: Write>(invocations: &[Invocation], stdout: &mut Out) -> Result<(), CliError> {
    for invocation in invocations {
        writeln!(stdout, "{invocation}").map_err(CliError::Output)?;
    }
    Ok(())
}

/// Converts a numeric exit code into a [`std::process::ExitCode`], clamping it
/// into `0..=255`.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

#[cfg(test)]
mod tests;
