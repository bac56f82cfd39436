use super::*;
use crate::options::{
    AgeLimit, CopyOptions, FileOptions, JobOptions, LogOutput, LoggingOptions, OneOrMany,
    RetryOptions, RunTimes, ThreadCount,
};

fn compiler() -> CommandCompiler {
    CommandCompiler::with_working_dir("/work")
}

fn baseline() -> MirrorOptions {
    MirrorOptions::new("/a", "/b")
}

/// Tokens following the two operands.
fn tail(options: &MirrorOptions) -> Vec<String> {
    compiler().compile_args(options).split_off(2)
}

#[test]
fn operands_only_yield_two_quoted_absolute_tokens() {
    let args = compiler().compile_args(&MirrorOptions::new("src", "dest/"));
    assert_eq!(args, vec![r#""\work\src""#, r#""\work\dest""#]);
}

#[test]
fn qualified_operands_pass_through_in_target_style() {
    let args = compiler().compile_args(&MirrorOptions::new(
        "C:/data/",
        r"\\nas\backup",
    ));
    assert_eq!(args, vec![r#""C:\data""#, r#""\\nas\backup""#]);
}

#[test]
fn list_destination_compiles_first_entry() {
    let options = MirrorOptions::new("/a", vec!["/b".to_owned(), "/c".to_owned()]);
    let args = compiler().compile_args(&options);
    assert_eq!(args[1], r#""\b""#);
    assert_eq!(args.len(), 2);
}

#[test]
fn files_follow_operands_without_resolution() {
    let mut options = baseline();
    options.files = Some(vec!["*.txt".to_owned(), "docs/readme.md".to_owned()]);
    assert_eq!(tail(&options), vec![r#""*.txt""#, r#""docs\readme.md""#]);
}

#[test]
fn copy_flags_follow_field_order() {
    let mut options = baseline();
    options.copy = Some(CopyOptions {
        symbolic_link: Some(true),
        subdirs: Some(true),
        levels: Some(3),
        info: Some("DAT".to_owned()),
        mirror: Some(true),
        purge: Some(false),
        add_attributes: Some("RH".to_owned()),
        remove_attributes: Some(String::new()),
        monitor_count_trigger: Some(5),
        inter_packet_gap: Some(20),
        ..CopyOptions::default()
    });

    assert_eq!(
        tail(&options),
        vec!["/s", "/lev:3", "/copy:DAT", "/mir", "/a+:RH", "/mon:5", "/ipg:20", "/sl"]
    );
}

#[test]
fn zero_valued_numbers_emit_nothing() {
    let mut options = baseline();
    options.copy = Some(CopyOptions {
        levels: Some(0),
        monitor_time_trigger: Some(0),
        ..CopyOptions::default()
    });
    options.retry = Some(RetryOptions {
        count: Some(0),
        wait: Some(0),
        ..RetryOptions::default()
    });
    assert!(tail(&options).is_empty());
}

#[test]
fn multi_threaded_variants() {
    let cases = [
        (Some(ThreadCount::Enabled(true)), vec!["/MT"]),
        (Some(ThreadCount::Threads(4)), vec!["/MT:4"]),
        (Some(ThreadCount::Threads(0)), vec![]),
        (Some(ThreadCount::Enabled(false)), vec![]),
        (None, vec![]),
    ];

    for (multi_threaded, expected) in cases {
        let mut options = baseline();
        options.copy = Some(CopyOptions {
            multi_threaded,
            ..CopyOptions::default()
        });
        assert_eq!(tail(&options), expected, "{multi_threaded:?}");
    }
}

#[test]
fn run_times_strip_colons() {
    let mut options = baseline();
    options.copy = Some(CopyOptions {
        run_times: Some(RunTimes {
            start: "22:00".to_owned(),
            end: "06:00".to_owned(),
            check_per_file: None,
        }),
        ..CopyOptions::default()
    });
    assert_eq!(tail(&options), vec!["/rh:2200-0600"]);

    if let Some(copy) = options.copy.as_mut() {
        if let Some(run_times) = copy.run_times.as_mut() {
            run_times.check_per_file = Some(true);
        }
    }
    assert_eq!(tail(&options), vec!["/rh:2200-0600", "/pf"]);
}

#[test]
fn exclude_dirs_resolve_against_both_operands() {
    let mut options = baseline();
    options.file = Some(FileOptions {
        exclude_dirs: Some(vec!["tmp".to_owned()]),
        ..FileOptions::default()
    });
    assert_eq!(tail(&options), vec!["/xd", r#""\a\tmp""#, r#""\b\tmp""#]);
}

#[test]
fn exclude_dirs_deduplicate_coinciding_paths() {
    let mut options = MirrorOptions::new("/same", "/same/");
    options.file = Some(FileOptions {
        exclude_dirs: Some(vec!["tmp".to_owned(), r"D:\cache".to_owned()]),
        ..FileOptions::default()
    });
    assert_eq!(
        tail(&options),
        vec!["/xd", r#""\same\tmp""#, r#""D:\cache""#]
    );
}

#[test]
fn exclude_dirs_never_climb_above_drive_root() {
    let mut options = MirrorOptions::new(r"C:\", r"D:\backup");
    options.file = Some(FileOptions {
        exclude_dirs: Some(vec!["../tmp".to_owned()]),
        ..FileOptions::default()
    });
    assert_eq!(
        tail(&options),
        vec!["/xd", r#""C:\tmp""#, r#""D:\tmp""#]
    );
}

#[test]
fn exclude_dirs_never_climb_above_network_share() {
    let mut options = MirrorOptions::new("/src", r"\\nas\share");
    options.file = Some(FileOptions {
        exclude_dirs: Some(vec!["../../x".to_owned()]),
        ..FileOptions::default()
    });
    assert_eq!(
        tail(&options),
        vec!["/xd", r#""\x""#, r#""\\nas\share\x""#]
    );
}

#[test]
fn exclude_dirs_relative_keeps_raw_entries() {
    let mut options = baseline();
    options.file = Some(FileOptions {
        exclude_dirs: Some(vec!["node_modules/".to_owned(), "build".to_owned()]),
        exclude_dirs_relative: Some(true),
        ..FileOptions::default()
    });
    assert_eq!(
        tail(&options),
        vec!["/xd", r#""node_modules""#, r#""build""#]
    );
}

#[test]
fn empty_exclusion_lists_emit_no_marker() {
    let mut options = baseline();
    options.file = Some(FileOptions {
        exclude_dirs: Some(Vec::new()),
        exclude_files: Some(Vec::new()),
        ..FileOptions::default()
    });
    assert!(tail(&options).is_empty());
}

#[test]
fn file_group_order() {
    let mut options = baseline();
    options.file = Some(FileOptions {
        copy_archived: Some(true),
        include_attributes: Some("RA".to_owned()),
        exclude_files: Some(vec!["*.tmp".to_owned(), "cache/x.db".to_owned()]),
        exclude_older_files: Some(true),
        maximum_size: Some(1024),
        maximum_age: Some(AgeLimit::Days(7)),
        minimum_last_access: Some(AgeLimit::Date("20240101".to_owned())),
        minimum_age: Some(AgeLimit::Days(0)),
        exclude_file_junctions: Some(true),
        ..FileOptions::default()
    });

    assert_eq!(
        tail(&options),
        vec![
            "/a",
            "/ia:RA",
            "/xf",
            r#""*.tmp""#,
            r#""cache\x.db""#,
            "/xo",
            "/max:1024",
            "/maxage:7",
            "/minlad:20240101",
            "/xjf",
        ]
    );
}

#[test]
fn retry_group() {
    let mut options = baseline();
    options.retry = Some(RetryOptions {
        count: Some(3),
        wait: Some(10),
        save_as_default: Some(true),
        wait_for_share_names: Some(true),
    });
    assert_eq!(tail(&options), vec!["/r:3", "/w:10", "/reg", "/tbd"]);
}

#[test]
fn log_output_variants() {
    let cases = [
        (None, None, "/log+:"),
        (Some(true), None, "/log:"),
        (None, Some(true), "/unilog+:"),
        (Some(true), Some(true), "/unilog:"),
    ];

    for (overwrite, unicode, prefix) in cases {
        let mut options = baseline();
        options.logging = Some(LoggingOptions {
            output: Some(LogOutput {
                file: "logs/copy.log".to_owned(),
                overwrite,
                unicode,
            }),
            ..LoggingOptions::default()
        });
        assert_eq!(tail(&options), vec![format!(r#"{prefix}"logs\copy.log""#)]);
    }
}

#[test]
fn log_output_sits_between_eta_and_unicode() {
    let mut options = baseline();
    options.logging = Some(LoggingOptions {
        no_job_summary: Some(true),
        show_unicode: Some(true),
        show_eta: Some(true),
        list_only: Some(true),
        output: Some(LogOutput {
            file: "run.log".to_owned(),
            overwrite: Some(true),
            unicode: None,
        }),
        ..LoggingOptions::default()
    });
    assert_eq!(
        tail(&options),
        vec!["/l", "/eta", r#"/log:"run.log""#, "/unicode", "/njs"]
    );
}

#[test]
fn job_group_quotes_names_verbatim() {
    let mut options = baseline();
    options.job = Some(JobOptions {
        derive_parameters: Some("nightly".to_owned()),
        save_parameters: Some("nightly/v2".to_owned()),
        quite_after_processing: Some(true),
        includes_files: Some(true),
        ..JobOptions::default()
    });
    assert_eq!(
        tail(&options),
        vec![r#"/job:"nightly""#, r#"/save:"nightly/v2""#, "/quit", "/if"]
    );
}

#[test]
fn groups_emit_in_fixed_order() {
    let mut options = baseline();
    options.job = Some(JobOptions {
        no_source_dir: Some(true),
        ..JobOptions::default()
    });
    options.logging = Some(LoggingOptions {
        verbose: Some(true),
        ..LoggingOptions::default()
    });
    options.retry = Some(RetryOptions {
        count: Some(1),
        ..RetryOptions::default()
    });
    options.file = Some(FileOptions {
        fat_file_times: Some(true),
        ..FileOptions::default()
    });
    options.copy = Some(CopyOptions {
        empty_subdirs: Some(true),
        ..CopyOptions::default()
    });
    assert_eq!(tail(&options), vec!["/e", "/fft", "/r:1", "/v", "/nosd"]);
}

#[test]
fn compiling_twice_is_identical() {
    let mut options = MirrorOptions::new("src", OneOrMany::One("dst".to_owned()));
    options.copy = Some(CopyOptions {
        mirror: Some(true),
        multi_threaded: Some(ThreadCount::Threads(8)),
        ..CopyOptions::default()
    });
    options.file = Some(FileOptions {
        exclude_dirs: Some(vec!["a".to_owned(), "b".to_owned()]),
        ..FileOptions::default()
    });

    let compiler = compiler();
    assert_eq!(compiler.compile_args(&options), compiler.compile_args(&options));
}
