use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, builder::OsStringValueParser, value_parser};

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new("robomirror")
        .about("Compile a mirroring configuration into robocopy runs, one per destination.")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output; repeat for more.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only report errors.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .help("Print each command line instead of running it.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("program")
                .long("program")
                .value_name("PATH")
                .help("Mirroring executable to launch (default: robocopy).")
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("destination")
                .long("destination")
                .short('d')
                .value_name("PATH")
                .help("Replace the configured destinations; may be repeated.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .value_name("CONFIG")
                .help("JSON configuration file.")
                .value_parser(value_parser!(PathBuf)),
        )
}

/// Parsed command-line state.
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) verbose: u8,
    pub(crate) quiet: bool,
    pub(crate) dry_run: bool,
    pub(crate) program: Option<OsString>,
    pub(crate) destinations: Vec<String>,
    pub(crate) config: Option<PathBuf>,
}

/// Parses `arguments`; the first item is the program name.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from("robomirror"));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    let verbose = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");
    let dry_run = matches.get_flag("dry-run");
    let program = matches.remove_one::<OsString>("program");
    let destinations = matches
        .remove_many::<String>("destination")
        .map(|values| values.collect())
        .unwrap_or_default();
    let config = matches.remove_one::<PathBuf>("config");

    if config.is_none() && !show_help && !show_version {
        return Err(clap_command().error(
            ErrorKind::MissingRequiredArgument,
            "missing CONFIG operand",
        ));
    }

    Ok(ParsedArgs {
        show_help,
        show_version,
        verbose,
        quiet,
        dry_run,
        program,
        destinations,
        config,
    })
}

/// Renders the help text.
pub(crate) fn render_help() -> String {
    clap_command().render_help().to_string()
}
