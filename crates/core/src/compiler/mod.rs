//! Configuration-to-argument compiler.
//!
//! [`CommandCompiler::compile_args`] is a pure function from
//! [`MirrorOptions`] to the exact token list handed to the mirroring
//! executable. Tokens are emitted in a fixed order: the quoted source and
//! destination, any `files` patterns, then the copy, file, retry, logging and
//! job groups. Absent or disabled fields emit nothing and no validation is
//! performed here.

mod groups;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::options::{MirrorOptions, enabled};
use crate::paths::{current_dir_or_dot, quoted_target, to_absolute_in};

/// Compiles [`MirrorOptions`] into command tokens.
///
/// Relative operands resolve against the working directory captured when the
/// compiler is created, so the same compiler always produces the same tokens
/// for the same options.
#[derive(Clone, Debug)]
pub struct CommandCompiler {
    working_dir: PathBuf,
}

impl Default for CommandCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandCompiler {
    /// Creates a compiler resolving relative paths against the process
    /// working directory.
    pub fn new() -> Self {
        Self {
            working_dir: current_dir_or_dot(),
        }
    }

    /// Creates a compiler resolving relative paths against `working_dir`.
    pub fn with_working_dir(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Directory relative operands are resolved against.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Builds the ordered token list for `options`.
    ///
    /// When the destination is a list only its first entry is used; the
    /// [`Dispatcher`](crate::dispatch::Dispatcher) splits lists before
    /// compiling.
    pub fn compile_args(&self, options: &MirrorOptions) -> Vec<String> {
        let MirrorOptions {
            source,
            destination,
            files,
            copy,
            file,
            retry,
            logging,
            job,
        } = options;

        let source = to_absolute_in(source, None, &self.working_dir);
        let destination = to_absolute_in(
            destination.first().map_or("", String::as_str),
            None,
            &self.working_dir,
        );

        let mut args = vec![quoted_target(&source), quoted_target(&destination)];

        if let Some(files) = files {
            args.extend(files.iter().map(|pattern| quoted_target(pattern)));
        }

        if let Some(copy) = copy {
            groups::push_copy_args(&mut args, copy);
        }

        if let Some(file) = file {
            let operands = Operands {
                source: &source,
                destination: &destination,
                working_dir: &self.working_dir,
            };
            groups::push_file_args(&mut args, file, &operands);
        }

        if let Some(retry) = retry {
            groups::push_retry_args(&mut args, retry);
        }

        if let Some(logging) = logging {
            groups::push_logging_args(&mut args, logging);
        }

        if let Some(job) = job {
            groups::push_job_args(&mut args, job);
        }

        args
    }
}

/// Already-resolved operands, used as bases for exclusion paths.
struct Operands<'a> {
    source: &'a str,
    destination: &'a str,
    working_dir: &'a Path,
}

fn push_flag(args: &mut Vec<String>, flag: &str, value: Option<bool>) {
    if enabled(value) {
        args.push(flag.to_owned());
    }
}

fn push_count<N>(args: &mut Vec<String>, prefix: &str, value: Option<N>)
where
    N: Into<u64>,
{
    if let Some(value) = value.map(Into::into).filter(|value| *value != 0) {
        args.push(format!("{prefix}{value}"));
    }
}

fn push_text(args: &mut Vec<String>, prefix: &str, value: Option<&String>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        args.push(format!("{prefix}{value}"));
    }
}

fn push_display<T: Display>(args: &mut Vec<String>, prefix: &str, value: T) {
    args.push(format!("{prefix}{value}"));
}

#[cfg(test)]
mod tests;
