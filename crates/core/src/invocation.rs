use std::ffi::{OsStr, OsString};
use std::fmt;

/// One fully prepared call of the mirroring executable for a single
/// destination.
///
/// Arguments are already quoted where the executable expects quotes and are
/// passed through verbatim when the process is spawned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<String>,
}

impl Invocation {
    /// Creates an invocation of `program` with `args`.
    pub fn new(program: impl Into<OsString>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Program to execute.
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Ordered argument tokens.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Destination token, as emitted in second position.
    pub fn destination(&self) -> Option<&str> {
        self.args.get(1).map(String::as_str)
    }
}

impl fmt::Display for Invocation {
    /// Renders the command line as it is handed to the executable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
