//! Clap command tree definition.

use clap::{value_parser, Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("seqcheck")
        .about("Verification suite for standard growable sequence containers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more (-v info, -vv debug); RUST_LOG takes precedence")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("run")
                .about("Run the scenario catalogue")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Path to a seqcheck.toml file"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for filler values")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .short('f')
                        .help("Only run scenarios whose name contains this substring"),
                )
                .arg(
                    Arg::new("backend")
                        .long("backend")
                        .short('b')
                        .help("Container under test")
                        .value_parser(["vec", "vec_deque", "vec-deque"]),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the run summary as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list").about("List registered scenarios"))
        .subcommand(Command::new("init").about("Print a commented default seqcheck.toml"))
}
