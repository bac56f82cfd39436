//! Strongly typed mirroring configuration.
//!
//! [`MirrorOptions`] is the root of the tree handed to the
//! [`Dispatcher`](crate::dispatch::Dispatcher). Every group is optional and
//! every field inside a group is optional; an absent field never produces a
//! command token. The serde representation uses camelCase field names so JSON
//! documents written against the executable's option vocabulary load directly.

mod copy;
mod file;
mod job;
mod logging;
mod retry;

use serde::{Deserialize, Serialize};

use crate::error::MirrorError;

pub use copy::{CopyOptions, RunTimes, ThreadCount};
pub use file::{AgeLimit, FileOptions};
pub use job::JobOptions;
pub use logging::{LogOutput, LoggingOptions};
pub use retry::RetryOptions;

/// A value that is either a single item or an ordered list of items.
///
/// Used for the destination operand and as the shape carrier for the
/// [`paths`](crate::paths) helpers, which apply element-wise to lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// An ordered list of values.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Applies `f` to the single value or to every element of the list.
    pub fn map<U, F>(&self, mut f: F) -> OneOrMany<U>
    where
        F: FnMut(&T) -> U,
    {
        match self {
            Self::One(value) => OneOrMany::One(f(value)),
            Self::Many(values) => OneOrMany::Many(values.iter().map(f).collect()),
        }
    }

    /// Returns the values as a slice, one element for [`OneOrMany::One`].
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Returns the first value, if any.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Reports whether the list form holds no values.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Root configuration describing one mirroring operation.
///
/// `source` and `destination` are the only required fields. The destination
/// may be a list, in which case the dispatcher produces one invocation per
/// entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MirrorOptions {
    /// Source directory, resolved to an absolute path when compiled.
    pub source: String,
    /// One destination directory or an ordered list of them.
    pub destination: OneOrMany<String>,
    /// File names or wildcard patterns restricting what is copied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    /// Copy options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy: Option<CopyOptions>,
    /// File selection options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<FileOptions>,
    /// Retry options, passed through to the executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryOptions>,
    /// Logging options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingOptions>,
    /// Job file options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<JobOptions>,
}

impl MirrorOptions {
    /// Creates options with only the two operands set.
    pub fn new(source: impl Into<String>, destination: impl Into<OneOrMany<String>>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            files: None,
            copy: None,
            file: None,
            retry: None,
            logging: None,
            job: None,
        }
    }

    /// Returns an independent copy whose destination is exactly `destination`.
    ///
    /// `self` is left untouched, so copies handed to different destinations
    /// never share state.
    pub fn with_destination(&self, destination: &str) -> Self {
        Self {
            destination: OneOrMany::One(destination.to_owned()),
            ..self.clone()
        }
    }

    /// Checks that both operands are present and non-empty.
    ///
    /// The compiler itself never calls this; callers that want to reject
    /// obviously broken configurations before spawning anything opt in.
    pub fn validate(&self) -> Result<(), MirrorError> {
        if self.source.trim().is_empty() {
            return Err(MirrorError::InvalidOptions(
                "source must not be empty".to_owned(),
            ));
        }

        if self.destination.is_empty() {
            return Err(MirrorError::InvalidOptions(
                "destination list must contain at least one entry".to_owned(),
            ));
        }

        if let Some(index) = self
            .destination
            .as_slice()
            .iter()
            .position(|entry| entry.trim().is_empty())
        {
            return Err(MirrorError::InvalidOptions(format!(
                "destination entry {index} must not be empty"
            )));
        }

        Ok(())
    }
}

/// Returns `true` for `Some(true)`.
pub(crate) fn enabled(flag: Option<bool>) -> bool {
    flag.unwrap_or(false)
}
