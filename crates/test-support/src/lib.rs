//! Shared test utilities for the robomirror workspace.
//!
//! Process-level tests never launch the real mirroring executable. Instead
//! they write small POSIX shell scripts into a temporary directory and point
//! the dispatcher at them.

#![allow(unsafe_code)]

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Script that records every argument, one per line, into the file named by
/// `$CAPTURE_FILE`, prints `captured` and exits with `$FAKE_EXIT` (default 0).
pub const CAPTURE_ARGS_SCRIPT: &str = r#"#!/bin/sh
set -eu
: "${CAPTURE_FILE:?}"
: > "$CAPTURE_FILE"
for arg in "$@"; do
  printf '%s\n' "$arg" >> "$CAPTURE_FILE"
done
printf 'captured\n'
exit "${FAKE_EXIT:-0}"
"#;

/// Writes `contents` to `dir/name` and marks it executable.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, contents: &str) -> io::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, contents)?;
    let mut permissions = fs::metadata(&path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions)?;
    Ok(path)
}

/// Writes a fake program that prints `stdout` verbatim and exits with `code`.
#[cfg(unix)]
pub fn exit_with_script(dir: &Path, name: &str, stdout: &str, code: i32) -> io::Result<PathBuf> {
    let quoted = stdout.replace('\'', r"'\''");
    let body = format!("#!/bin/sh\nprintf '%s' '{quoted}'\nexit {code}\n");
    write_script(dir, name, &body)
}

/// Writes a fake program that terminates itself with `SIGKILL`.
#[cfg(unix)]
pub fn killed_by_signal_script(dir: &Path, name: &str) -> io::Result<PathBuf> {
    write_script(dir, name, "#!/bin/sh\nkill -9 $$\n")
}

/// Writes a fake program that branches on its destination (second)
/// argument.
///
/// Each `(needle, body)` pair becomes a `case` arm matching destinations that
/// contain `needle`; `fallback` runs for everything else. Bodies are shell
/// snippets and may use `$2`.
#[cfg(unix)]
pub fn destination_script(
    dir: &Path,
    name: &str,
    cases: &[(&str, &str)],
    fallback: &str,
) -> io::Result<PathBuf> {
    let mut body = String::from("#!/bin/sh\ncase \"$2\" in\n");
    for (needle, arm) in cases {
        body.push_str(&format!("  *{needle}*) {arm} ;;\n"));
    }
    body.push_str(&format!("  *) {fallback} ;;\nesac\n"));
    write_script(dir, name, &body)
}

/// Reads the lines captured by [`CAPTURE_ARGS_SCRIPT`].
pub fn read_captured_args(path: &Path) -> io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_owned)
        .collect())
}

static ENV_GUARD: OnceLock<Mutex<()>> = OnceLock::new();

/// Serialises tests that mutate process environment variables.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_GUARD
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Sets or removes an environment variable, restoring the previous value on
/// drop. Hold [`env_lock`] for as long as the guard lives.
pub struct EnvGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvGuard {
    /// Sets `key` to `value`.
    pub fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        let previous = env::var_os(key);
        unsafe {
            env::set_var(key, value);
        }
        Self { key, previous }
    }

    /// Removes `key`.
    pub fn remove(key: &'static str) -> Self {
        let previous = env::var_os(key);
        unsafe {
            env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        if let Some(value) = self.previous.take() {
            unsafe {
                env::set_var(self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(self.key);
            }
        }
    }
}
