use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("projector")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mirror one window full-screen onto another display")
        .long_about(
            "projector captures a named window on the primary display and re-renders it \
             full-screen on a secondary display, frame by frame, until the quit key is \
             pressed on the projected surface.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        // Run subcommand
        .subcommand(
            Command::new("run")
                .about("Project a window until the quit key is pressed")
                .arg(
                    Arg::new("window")
                        .long("window")
                        .short('w')
                        .help("Window title to project (exact match preferred, falls back to partial)"),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .help("Output width in pixels (default: 1920)")
                        .value_name("PIXELS")
                        .value_parser(clap::value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .help("Output height in pixels (default: 1080)")
                        .value_name("PIXELS")
                        .value_parser(clap::value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new("monitor")
                        .long("monitor")
                        .short('m')
                        .help("Target monitor index from 'list monitors' (default: first non-primary)")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("quit-key")
                        .long("quit-key")
                        .short('q')
                        .help("Key that stops the projection (default: q)")
                        .value_name("KEY")
                        .value_parser(clap::value_parser!(char)),
                )
                .arg(
                    Arg::new("poll-timeout")
                        .long("poll-timeout")
                        .help("Keypress wait per frame in milliseconds (default: 1)")
                        .value_name("MS")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                )
                .arg(
                    Arg::new("frames")
                        .long("frames")
                        .help("Stop after rendering this many frames")
                        .value_name("COUNT")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Extra config file, applied after user and project config")
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the run summary in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        // List subcommand
        .subcommand(
            Command::new("list")
                .about("List windows or monitors")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("windows")
                        .about("List all visible windows")
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .help("Output in JSON format")
                                .action(ArgAction::SetTrue),
                        )
                        .arg(
                            Arg::new("title")
                                .long("title")
                                .short('t')
                                .help("Filter windows by title (case-insensitive substring)"),
                        ),
                )
                .subcommand(
                    Command::new("monitors").about("List all monitors").arg(
                        Arg::new("json")
                            .long("json")
                            .help("Output in JSON format")
                            .action(ArgAction::SetTrue),
                    ),
                ),
        )
        // Completions subcommand
        .subcommand(
            Command::new("completions")
                .about("Generate a shell completion script")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
}
