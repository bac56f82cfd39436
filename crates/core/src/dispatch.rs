//! Expansion of a configuration into per-destination invocations.

use std::ffi::OsString;

use tracing::debug;

use crate::compiler::CommandCompiler;
use crate::invocation::Invocation;
use crate::options::MirrorOptions;

/// Name of the mirroring executable resolved through `PATH`.
pub const ROBOCOPY_PROGRAM: &str = "robocopy";

/// Builds one [`Invocation`] per destination.
///
/// Each destination compiles from its own copy of the options (see
/// [`MirrorOptions::with_destination`]); the caller's options are only ever
/// borrowed immutably.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    compiler: CommandCompiler,
    program: OsString,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Dispatcher targeting [`ROBOCOPY_PROGRAM`] with a compiler rooted at
    /// the current working directory.
    pub fn new() -> Self {
        Self {
            compiler: CommandCompiler::new(),
            program: OsString::from(ROBOCOPY_PROGRAM),
        }
    }

    /// Replaces the executable that invocations launch.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Replaces the compiler used for every destination.
    pub fn with_compiler(mut self, compiler: CommandCompiler) -> Self {
        self.compiler = compiler;
        self
    }

    /// Executable launched by the produced invocations.
    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// Compiles `options` into exactly one invocation per destination, in
    /// destination order.
    pub fn compile(&self, options: &MirrorOptions) -> Vec<Invocation> {
        let invocations: Vec<Invocation> = options
            .destination
            .as_slice()
            .iter()
            .map(|destination| {
                let scoped = options.with_destination(destination);
                Invocation::new(self.program.clone(), self.compiler.compile_args(&scoped))
            })
            .collect();

        debug!(
            target: "robomirror::dispatch",
            count = invocations.len(),
            "compiled invocations"
        );
        invocations
    }
}

/// Compiles `options` with a default [`Dispatcher`].
pub fn compile(options: &MirrorOptions) -> Vec<Invocation> {
    Dispatcher::new().compile(options)
}
