use serde::{Deserialize, Serialize};

/// Retry behaviour, delegated entirely to the mirroring executable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetryOptions {
    /// Number of retries on failed copies (`/r:N`).
    pub count: Option<u32>,
    /// Seconds to wait between retries (`/w:N`).
    pub wait: Option<u32>,
    /// Stores `count` and `wait` as registry defaults (`/reg`).
    pub save_as_default: Option<bool>,
    /// Waits for share names to be defined (`/tbd`).
    pub wait_for_share_names: Option<bool>,
}
