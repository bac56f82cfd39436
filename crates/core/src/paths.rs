//! Path normalisation for the mirroring executable's command line.
//!
//! Three independent operations are provided, each usable on a single path or
//! element-wise on a list (directly through the `_all` helpers, or through
//! [`OneOrMany::map`](crate::options::OneOrMany::map)):
//!
//! - [`quote`] wraps a path in double quotes without escaping anything.
//! - [`to_target_style`] switches to backslash separators, trims surrounding
//!   whitespace and drops one trailing separator.
//! - [`to_absolute`] resolves relative paths against a base or the working
//!   directory. Network shares (`\\server\share`) and drive-qualified paths
//!   (anything containing `:`) are returned unchanged, even when a base is
//!   given.
//!
//! Resolution is purely lexical; the filesystem is never consulted.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Separator expected by the mirroring executable.
pub const TARGET_SEPARATOR: char = '\\';

/// Wraps `path` in double quotes, verbatim.
///
/// Embedded quotes are not escaped; callers must not pass them.
pub fn quote(path: &str) -> String {
    format!("\"{path}\"")
}

/// Rewrites `path` with target separators, trims whitespace and strips
/// exactly one trailing separator.
pub fn to_target_style(path: &str) -> String {
    let replaced = path.replace('/', "\\");
    let trimmed = replaced.trim();
    trimmed
        .strip_suffix(TARGET_SEPARATOR)
        .unwrap_or(trimmed)
        .to_owned()
}

/// Returns `true` when `path` needs no resolution: it is a network share
/// (two leading separators) or carries a drive/volume designator.
pub fn is_qualified(path: &str) -> bool {
    is_network_share(path) || path.contains(':')
}

/// Resolves `path` against `base`, or against the process working directory
/// when no base is given.
pub fn to_absolute(path: &str, base: Option<&str>) -> String {
    let working_dir = current_dir_or_dot();
    to_absolute_in(path, base, &working_dir)
}

/// Resolves `path` against `base`, or against `working_dir` when no base is
/// given.
///
/// The result uses `/` separators unless `path` was returned unchanged.
pub fn to_absolute_in(path: &str, base: Option<&str>, working_dir: &Path) -> String {
    if is_qualified(path) {
        return path.to_owned();
    }

    match base {
        Some(base) => join(base, path),
        None if is_rooted(path) => normalize(path),
        None => join(&working_dir.to_string_lossy(), path),
    }
}

/// Element-wise [`quote`].
pub fn quote_all<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    paths.iter().map(|path| quote(path.as_ref())).collect()
}

/// Element-wise [`to_target_style`].
pub fn to_target_style_all<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    paths
        .iter()
        .map(|path| to_target_style(path.as_ref()))
        .collect()
}

/// Element-wise [`to_absolute_in`].
pub fn to_absolute_all<S: AsRef<str>>(
    paths: &[S],
    base: Option<&str>,
    working_dir: &Path,
) -> Vec<String> {
    paths
        .iter()
        .map(|path| to_absolute_in(path.as_ref(), base, working_dir))
        .collect()
}

/// Target style followed by quoting, the form every path token takes.
pub(crate) fn quoted_target(path: &str) -> String {
    quote(&to_target_style(path))
}

pub(crate) fn current_dir_or_dot() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn is_network_share(path: &str) -> bool {
    path.starts_with("\\\\") || path.starts_with("//")
}

fn is_rooted(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('\\')
}

fn join(base: &str, path: &str) -> String {
    let joined: Cow<'_, str> = if base.is_empty() {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{base}/{path}"))
    };
    normalize(&joined)
}

/// Collapses empty, `.` and `..` components, accepting either separator.
///
/// A leading `/`, drive designator (`C:`) or network share (`//server/share`)
/// is a fixed root: `..` never climbs above it.
fn normalize(path: &str) -> String {
    let mut components = path
        .split(['/', '\\'])
        .filter(|component| !matches!(*component, "" | "."));
    let root = if is_network_share(path) {
        let share: Vec<&str> = components.by_ref().take(2).collect();
        Some(format!("//{}", share.join("/")))
    } else if is_rooted(path) {
        Some(String::new())
    } else if let Some(drive) = path
        .split(['/', '\\'])
        .next()
        .filter(|first| first.contains(':'))
    {
        components.next();
        Some(drive.to_owned())
    } else {
        None
    };

    let mut parts: Vec<&str> = Vec::new();
    for component in components {
        if component != ".." {
            parts.push(component);
        } else if parts.last().is_some_and(|last| *last != "..") {
            parts.pop();
        } else if root.is_none() {
            parts.push("..");
        }
    }

    let body = parts.join("/");
    match root {
        Some(root) if body.is_empty() && root.starts_with("//") => root,
        Some(root) => format!("{root}/{body}"),
        None if body.is_empty() => ".".to_owned(),
        None => body,
    }
}
