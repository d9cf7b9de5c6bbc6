use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use memvitals::commands;

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("PATH")
        .help("Path to the config file (defaults to the user config directory)")
        .value_parser(clap::value_parser!(PathBuf))
}

fn build_cli() -> Command {
    Command::new("memvitals")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluate memory health checks against configured tolerances")
        .disable_version_flag(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("check")
                .about("Run the configured health checks once")
                .arg(config_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the registry detail map as JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("only")
                        .long("only")
                        .value_name("TITLE")
                        .help("Run only the check with this title (e.g. memory:utilizedMemory)"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Inspect or create the config file (use 'memvitals config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("show")
                        .about("Print the effective configuration")
                        .arg(config_arg()),
                )
                .subcommand(Command::new("path").about("Print the default config file path"))
                .subcommand(
                    Command::new("init")
                        .about("Write the default configuration")
                        .arg(config_arg())
                        .arg(
                            Arg::new("force")
                                .long("force")
                                .help("Overwrite an existing config file")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    memvitals::init_logging(level);

    match matches.subcommand() {
        Some(("check", sub_matches)) => commands::check(sub_matches),
        Some(("config", sub_matches)) => commands::config::execute(sub_matches),
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Use 'memvitals --help' for more information.");
            Ok(())
        }
    }
}
