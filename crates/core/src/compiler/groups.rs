use rustc_hash::FxHashSet;

use super::{Operands, push_count, push_display, push_flag, push_text};
use crate::options::{
    CopyOptions, FileOptions, JobOptions, LogOutput, LoggingOptions, RetryOptions, RunTimes,
    ThreadCount, enabled,
};
use crate::paths::{quote, quoted_target, to_absolute_all};

pub(super) fn push_copy_args(args: &mut Vec<String>, copy: &CopyOptions) {
    let CopyOptions {
        subdirs,
        empty_subdirs,
        levels,
        restart_mode,
        backup_mode,
        restart_then_backup_mode,
        efs_raw_mode,
        info,
        dir_timestamps,
        security_info,
        all_info,
        no_info,
        fix_security,
        fix_times,
        purge,
        mirror,
        move_files,
        move_files_and_dirs,
        add_attributes,
        remove_attributes,
        create_dirs_and_empty_files,
        fat_filenames,
        disable_long_paths,
        monitor_count_trigger,
        monitor_time_trigger,
        multi_threaded,
        run_times,
        inter_packet_gap,
        symbolic_link,
    } = copy;

    push_flag(args, "/s", *subdirs);
    push_flag(args, "/e", *empty_subdirs);
    push_count(args, "/lev:", *levels);
    push_flag(args, "/z", *restart_mode);
    push_flag(args, "/b", *backup_mode);
    push_flag(args, "/zb", *restart_then_backup_mode);
    push_flag(args, "/efsraw", *efs_raw_mode);
    push_text(args, "/copy:", info.as_ref());
    push_flag(args, "/dcopy:T", *dir_timestamps);
    push_flag(args, "/sec", *security_info);
    push_flag(args, "/copyall", *all_info);
    push_flag(args, "/nocopy", *no_info);
    push_flag(args, "/secfix", *fix_security);
    push_flag(args, "/timfix", *fix_times);
    push_flag(args, "/purge", *purge);
    push_flag(args, "/mir", *mirror);
    push_flag(args, "/mov", *move_files);
    push_flag(args, "/move", *move_files_and_dirs);
    push_text(args, "/a+:", add_attributes.as_ref());
    push_text(args, "/a-:", remove_attributes.as_ref());
    push_flag(args, "/create", *create_dirs_and_empty_files);
    push_flag(args, "/fat", *fat_filenames);
    push_flag(args, "/256", *disable_long_paths);
    push_count(args, "/mon:", *monitor_count_trigger);
    push_count(args, "/mot:", *monitor_time_trigger);

    match multi_threaded {
        Some(ThreadCount::Enabled(true)) => args.push("/MT".to_owned()),
        Some(ThreadCount::Threads(threads)) if *threads > 0 => {
            push_display(args, "/MT:", threads);
        }
        _ => {}
    }

    if let Some(RunTimes {
        start,
        end,
        check_per_file,
    }) = run_times
    {
        let start = start.replace(':', "");
        let end = end.replace(':', "");
        args.push(format!("/rh:{start}-{end}"));
        push_flag(args, "/pf", *check_per_file);
    }

    push_count(args, "/ipg:", *inter_packet_gap);
    push_flag(args, "/sl", *symbolic_link);
}

pub(super) fn push_file_args(args: &mut Vec<String>, file: &FileOptions, operands: &Operands<'_>) {
    let FileOptions {
        copy_archived,
        copy_archived_and_reset,
        include_attributes,
        exclude_attributes,
        exclude_files,
        exclude_dirs,
        exclude_dirs_relative,
        exclude_changed_files,
        exclude_newer_files,
        exclude_older_files,
        exclude_extra_files_and_dirs,
        exclude_lonely_files_and_dirs,
        include_same_files,
        include_tweaked_files,
        maximum_size,
        minimum_size,
        maximum_age,
        minimum_age,
        maximum_last_access,
        minimum_last_access,
        fat_file_times,
        compensate_for_dst,
        exclude_junctions,
        exclude_directory_junctions,
        exclude_file_junctions,
    } = file;

    push_flag(args, "/a", *copy_archived);
    push_flag(args, "/m", *copy_archived_and_reset);
    push_text(args, "/ia:", include_attributes.as_ref());
    push_text(args, "/xa:", exclude_attributes.as_ref());

    if let Some(patterns) = exclude_files.as_ref().filter(|list| !list.is_empty()) {
        args.push("/xf".to_owned());
        args.extend(patterns.iter().map(|pattern| quoted_target(pattern)));
    }

    if let Some(dirs) = exclude_dirs.as_ref().filter(|list| !list.is_empty()) {
        args.push("/xd".to_owned());
        if enabled(*exclude_dirs_relative) {
            args.extend(dirs.iter().map(|dir| quoted_target(dir)));
        } else {
            args.extend(
                resolve_excluded_dirs(dirs, operands)
                    .iter()
                    .map(|dir| quoted_target(dir)),
            );
        }
    }

    push_flag(args, "/xct", *exclude_changed_files);
    push_flag(args, "/xn", *exclude_newer_files);
    push_flag(args, "/xo", *exclude_older_files);
    push_flag(args, "/xx", *exclude_extra_files_and_dirs);
    push_flag(args, "/xl", *exclude_lonely_files_and_dirs);
    push_flag(args, "/is", *include_same_files);
    push_flag(args, "/it", *include_tweaked_files);
    push_count(args, "/max:", *maximum_size);
    push_count(args, "/min:", *minimum_size);

    for (prefix, limit) in [
        ("/maxage:", maximum_age),
        ("/minage:", minimum_age),
        ("/maxlad:", maximum_last_access),
        ("/minlad:", minimum_last_access),
    ] {
        if let Some(limit) = limit.as_ref().filter(|limit| limit.is_set()) {
            push_display(args, prefix, limit);
        }
    }

    push_flag(args, "/fft", *fat_file_times);
    push_flag(args, "/dst", *compensate_for_dst);
    push_flag(args, "/xj", *exclude_junctions);
    push_flag(args, "/xjd", *exclude_directory_junctions);
    push_flag(args, "/xjf", *exclude_file_junctions);
}

/// Resolves each directory against the source and then the destination,
/// keeping the first occurrence of every resulting path.
fn resolve_excluded_dirs(dirs: &[String], operands: &Operands<'_>) -> Vec<String> {
    let from_source = to_absolute_all(dirs, Some(operands.source), operands.working_dir);
    let from_destination = to_absolute_all(dirs, Some(operands.destination), operands.working_dir);

    let mut seen = FxHashSet::default();
    from_source
        .into_iter()
        .chain(from_destination)
        .filter(|dir| seen.insert(dir.clone()))
        .collect()
}

pub(super) fn push_retry_args(args: &mut Vec<String>, retry: &RetryOptions) {
    let RetryOptions {
        count,
        wait,
        save_as_default,
        wait_for_share_names,
    } = retry;

    push_count(args, "/r:", *count);
    push_count(args, "/w:", *wait);
    push_flag(args, "/reg", *save_as_default);
    push_flag(args, "/tbd", *wait_for_share_names);
}

pub(super) fn push_logging_args(args: &mut Vec<String>, logging: &LoggingOptions) {
    let LoggingOptions {
        list_only,
        include_extra_files,
        verbose,
        include_source_timestamps,
        include_full_paths,
        sizes_as_bytes,
        exclude_file_sizes,
        exclude_file_classes,
        exclude_filenames,
        exclude_directory_names,
        hide_progress,
        show_eta,
        output,
        show_unicode,
        show_and_log,
        no_job_header,
        no_job_summary,
    } = logging;

    push_flag(args, "/l", *list_only);
    push_flag(args, "/x", *include_extra_files);
    push_flag(args, "/v", *verbose);
    push_flag(args, "/ts", *include_source_timestamps);
    push_flag(args, "/fp", *include_full_paths);
    push_flag(args, "/bytes", *sizes_as_bytes);
    push_flag(args, "/ns", *exclude_file_sizes);
    push_flag(args, "/nc", *exclude_file_classes);
    push_flag(args, "/nfl", *exclude_filenames);
    push_flag(args, "/ndl", *exclude_directory_names);
    push_flag(args, "/np", *hide_progress);
    push_flag(args, "/eta", *show_eta);

    if let Some(output) = output {
        args.push(log_output_token(output));
    }

    push_flag(args, "/unicode", *show_unicode);
    push_flag(args, "/tee", *show_and_log);
    push_flag(args, "/njh", *no_job_header);
    push_flag(args, "/njs", *no_job_summary);
}

/// `/log:`, `/log+:`, `/unilog:` or `/unilog+:` followed by the quoted path.
fn log_output_token(output: &LogOutput) -> String {
    let unicode = if enabled(output.unicode) { "uni" } else { "" };
    let append = if enabled(output.overwrite) { "" } else { "+" };
    format!("/{unicode}log{append}:{}", quoted_target(&output.file))
}

pub(super) fn push_job_args(args: &mut Vec<String>, job: &JobOptions) {
    let JobOptions {
        derive_parameters,
        save_parameters,
        quite_after_processing,
        no_source_dir,
        no_destination_dir,
        includes_files,
    } = job;

    if let Some(name) = derive_parameters.as_ref().filter(|name| !name.is_empty()) {
        push_display(args, "/job:", quote(name));
    }
    if let Some(name) = save_parameters.as_ref().filter(|name| !name.is_empty()) {
        push_display(args, "/save:", quote(name));
    }
    push_flag(args, "/quit", *quite_after_processing);
    push_flag(args, "/nosd", *no_source_dir);
    push_flag(args, "/nodd", *no_destination_dir);
    push_flag(args, "/if", *includes_files);
}
