//! Concurrent fan-out over every destination.
//!
//! All invocations start at once, one OS process each. The aggregate resolves
//! with every output when all runs succeed, or with the first failure to be
//! observed. Runs still in flight at that point are never aborted: their
//! processes keep mirroring and their results are only logged.

use std::ffi::OsString;

use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

use crate::dispatch::Dispatcher;
use crate::error::MirrorError;
use crate::invocation::Invocation;
use crate::options::MirrorOptions;
use crate::process::run_invocation;

/// Runs all `invocations` concurrently.
///
/// On success the outputs are returned in the order the invocations were
/// given, regardless of completion order. Runs still going after a failure
/// finish in the background; use [`run_all_with_remaining`] to wait for them.
pub async fn run_all(invocations: Vec<Invocation>) -> Result<Vec<String>, MirrorError> {
    run_all_with_remaining(invocations).await.0
}

/// Like [`run_all`], also returning the runs left in flight by a failure.
///
/// The second element is `None` when every run has already finished.
pub async fn run_all_with_remaining(
    invocations: Vec<Invocation>,
) -> (Result<Vec<String>, MirrorError>, Option<RemainingRuns>) {
    let total = invocations.len();
    let mut tasks = JoinSet::new();

    for (index, invocation) in invocations.into_iter().enumerate() {
        tasks.spawn(async move { (index, run_invocation(&invocation).await) });
    }
    debug!(target: "robomirror::orchestrator", total, "started runs");

    let mut outputs: Vec<Option<String>> = vec![None; total];
    while let Some(joined) = tasks.join_next().await {
        let outcome = joined
            .map_err(MirrorError::from)
            .and_then(|(index, result)| result.map(|output| (index, output)));

        match outcome {
            Ok((index, output)) => {
                if let Some(slot) = outputs.get_mut(index) {
                    *slot = Some(output);
                }
            }
            Err(error) => {
                warn!(
                    target: "robomirror::orchestrator",
                    %error,
                    still_running = tasks.len(),
                    "run failed, leaving remaining runs to finish"
                );
                return (Err(error), release(tasks));
            }
        }
    }

    info!(target: "robomirror::orchestrator", total, "all runs succeeded");
    (Ok(outputs.into_iter().flatten().collect()), None)
}

/// Runs left in flight after [`run_all_with_remaining`] reported a failure.
///
/// Dropping this value does not stop them.
#[derive(Debug)]
pub struct RemainingRuns {
    count: usize,
    drain: JoinHandle<()>,
}

impl RemainingRuns {
    /// Number of runs that were still going when the failure was reported.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Waits until every remaining run has finished.
    pub async fn finished(self) {
        if let Err(error) = self.drain.await {
            warn!(target: "robomirror::orchestrator", %error, "remaining runs did not complete");
        }
    }
}

/// Lets the remaining runs finish in the background, logging each outcome.
fn release(mut tasks: JoinSet<(usize, Result<String, MirrorError>)>) -> Option<RemainingRuns> {
    if tasks.is_empty() {
        return None;
    }

    let count = tasks.len();
    let drain = tokio::spawn(async move {
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(_))) => {
                    debug!(target: "robomirror::orchestrator", index, "late run succeeded");
                }
                Ok((index, Err(error))) => {
                    warn!(target: "robomirror::orchestrator", index, %error, "late run failed");
                }
                Err(error) => {
                    warn!(target: "robomirror::orchestrator", %error, "late run did not complete");
                }
            }
        }
    });
    Some(RemainingRuns { count, drain })
}

/// Compiles `options` with the default dispatcher and runs every invocation.
pub async fn mirror(options: &MirrorOptions) -> Result<Vec<String>, MirrorError> {
    Mirror::new().run(options).await
}

/// Reusable entry point pairing a [`Dispatcher`] with [`run_all`].
///
/// ```no_run
/// # async fn demo() -> Result<(), mirror_core::MirrorError> {
/// use mirror_core::{Mirror, MirrorOptions};
///
/// let options = MirrorOptions::new(
///     r"C:\projects",
///     vec![r"D:\backup".to_owned(), r"\\nas\projects".to_owned()],
/// );
/// let outputs = Mirror::new().run(&options).await?;
/// assert_eq!(outputs.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Mirror {
    dispatcher: Dispatcher,
}

impl Mirror {
    /// Mirror using the default [`Dispatcher`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror using `dispatcher`.
    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Replaces the executable launched for each destination.
    pub fn with_program(self, program: impl Into<OsString>) -> Self {
        Self {
            dispatcher: self.dispatcher.with_program(program),
        }
    }

    /// Dispatcher used to compile options.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Invocations that [`Mirror::run`] would launch for `options`.
    pub fn plan(&self, options: &MirrorOptions) -> Vec<Invocation> {
        self.dispatcher.compile(options)
    }

    /// Compiles `options` and runs one process per destination.
    pub async fn run(&self, options: &MirrorOptions) -> Result<Vec<String>, MirrorError> {
        run_all(self.plan(options)).await
    }
}
