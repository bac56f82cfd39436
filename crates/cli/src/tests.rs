use std::fs;
use std::path::{Path, PathBuf};

use test_support::{EnvGuard, env_lock};

use super::*;

fn run_with(args: &[&str]) -> (i32, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(args.iter().copied(), &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8_lossy(&stdout).into_owned(),
        String::from_utf8_lossy(&stderr).into_owned(),
    )
}

fn write_config(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("mirror.json");
    fs::write(&path, json).expect("config written");
    path
}

#[test]
fn version_prints_package_version() {
    let (code, stdout, stderr) = run_with(&["robomirror", "-V"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), format!("robomirror {}", env!("CARGO_PKG_VERSION")));
    assert!(stderr.is_empty());
}

#[test]
fn help_is_written_to_stdout() {
    let (code, stdout, _) = run_with(&["robomirror", "--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn missing_config_is_a_usage_error() {
    let (code, stdout, stderr) = run_with(&["robomirror"]);
    assert_eq!(code, USAGE_EXIT_CODE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("missing CONFIG operand"));
}

#[test]
fn dry_run_prints_one_line_per_destination() {
    let _lock = env_lock();
    let _env = EnvGuard::remove(PROGRAM_ENV);
    let temp = tempfile::tempdir().expect("tempdir");
    let config = write_config(
        temp.path(),
        r#"{"source":"/src","destination":["/a","/b"],"copy":{"mirror":true},"retry":{"count":2}}"#,
    );

    let (code, stdout, stderr) = run_with(&["robomirror", "-n", config.to_str().expect("utf-8")]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        [
            r#"robocopy "\src" "\a" /mir /r:2"#,
            r#"robocopy "\src" "\b" /mir /r:2"#,
        ]
    );
}

#[test]
fn destination_flags_replace_configured_list() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = write_config(temp.path(), r#"{"source":"/src","destination":"/a"}"#);

    let (code, stdout, _) = run_with(&[
        "robomirror",
        "--dry-run",
        "--program",
        "fake",
        "-d",
        "/x",
        "-d",
        "/y",
        config.to_str().expect("utf-8"),
    ]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        [r#"fake "\src" "\x""#, r#"fake "\src" "\y""#]
    );
}

#[test]
fn environment_names_the_program() {
    let _lock = env_lock();
    let _env = EnvGuard::set(PROGRAM_ENV, "/opt/fake-robocopy");
    let temp = tempfile::tempdir().expect("tempdir");
    let config = write_config(temp.path(), r#"{"source":"/s","destination":"/d"}"#);

    let (code, stdout, _) = run_with(&["robomirror", "-n", config.to_str().expect("utf-8")]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("/opt/fake-robocopy "));
}

#[test]
fn malformed_config_reports_fatal_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = write_config(temp.path(), r#"{"source":"/s"}"#);

    let (code, stdout, stderr) = run_with(&["robomirror", config.to_str().expect("utf-8")]);
    assert_eq!(code, mirror_core::exit_code::FATAL_EXIT_CODE);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("robomirror: error: failed to load configuration"));
}

#[test]
fn empty_destination_is_rejected_before_running() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = write_config(temp.path(), r#"{"source":"/s","destination":[]}"#);

    let (code, _, stderr) = run_with(&["robomirror", "--program", "/nonexistent", config.to_str().expect("utf-8")]);
    assert_eq!(code, mirror_core::exit_code::FATAL_EXIT_CODE);
    assert!(stderr.contains("invalid options"));
}

#[cfg(unix)]
mod process {
    use test_support::{destination_script, exit_with_script};

    use super::*;

    #[test]
    fn successful_runs_print_outputs_in_destination_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let script = destination_script(
            temp.path(),
            "fake.sh",
            &[("slow", "sleep 0.3; echo slow-done; exit 1")],
            "echo quick-done; exit 0",
        )
        .expect("script");
        let config = write_config(
            temp.path(),
            r#"{"source":"/src","destination":["/slow","/quick"]}"#,
        );

        let (code, stdout, stderr) = run_with(&[
            "robomirror",
            "--program",
            script.to_str().expect("utf-8"),
            config.to_str().expect("utf-8"),
        ]);
        assert_eq!(code, 0, "stderr: {stderr}");
        assert_eq!(stdout, "slow-done\nquick-done\n");
    }

    #[test]
    fn failing_run_propagates_its_exit_code() {
        let temp = tempfile::tempdir().expect("tempdir");
        let script = exit_with_script(temp.path(), "fake.sh", "", 9).expect("script");
        let config = write_config(temp.path(), r#"{"source":"/src","destination":"/dst"}"#);

        let (code, stdout, stderr) = run_with(&[
            "robomirror",
            "--program",
            script.to_str().expect("utf-8"),
            config.to_str().expect("utf-8"),
        ]);
        assert_eq!(code, 9);
        assert!(stdout.is_empty());
        assert!(stderr.contains("failed with (9), signal: null"));
    }

    #[test]
    fn failure_waits_for_sibling_runs_before_returning() {
        let temp = tempfile::tempdir().expect("tempdir");
        let marker = temp.path().join("sibling.done");
        let sibling = format!("sleep 0.5; : > '{}'; exit 0", marker.display());
        let script = destination_script(
            temp.path(),
            "fake.sh",
            &[("broken", "exit 12"), ("sibling", sibling.as_str())],
            "exit 0",
        )
        .expect("script");
        let config = write_config(
            temp.path(),
            r#"{"source":"/src","destination":["/sibling","/broken"]}"#,
        );

        let (code, _, _) = run_with(&[
            "robomirror",
            "--program",
            script.to_str().expect("utf-8"),
            config.to_str().expect("utf-8"),
        ]);
        assert_eq!(code, 12);
        assert!(marker.exists(), "sibling run finished before exit");
    }
}

#[test]
fn exit_code_from_clamps() {
    assert_eq!(exit_code_from(-5), std::process::ExitCode::from(0));
    assert_eq!(exit_code_from(9), std::process::ExitCode::from(9));
    assert_eq!(exit_code_from(4096), std::process::ExitCode::from(255));
}
