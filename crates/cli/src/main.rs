//! seqcheck CLI: run the sequence container scenario catalogue.
//!
//! - `seqcheck run [--config FILE] [--seed N] [--filter S] [--backend B] [--json]`
//!   (without `--config`, `./seqcheck.toml` is read when present)
//! - `seqcheck list`
//! - `seqcheck init`
//!
//! Exit status: 0 when every scenario passes, 1 when any fails, 2 on usage or
//! configuration errors.

mod commands;
mod format;

use std::path::Path;
use std::process;

use anyhow::Context;
use clap::ArgMatches;
use seqcheck_suite::{catalogue, Backend, Runner, SuiteConfig, CONFIG_FILE_NAME};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_catalogue, format_summary, OutputMode};

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    let code = match matches.subcommand() {
        Some(("run", sub)) => match load_config(sub, Path::new(".")) {
            Ok(config) => {
                let mode = if sub.get_flag("json") {
                    OutputMode::Json
                } else {
                    OutputMode::Human
                };
                let runner = Runner::new(config);
                let config = runner.config();
                info!(
                    backend = %config.backend,
                    seed = ?config.seed,
                    filter = ?config.filter,
                    "configuration"
                );
                let summary = runner.run_all();
                print!("{}", format_summary(&summary, mode));
                summary.exit_code()
            }
            Err(e) => {
                eprintln!("error: {:#}", e);
                2
            }
        },
        Some(("list", _)) => {
            print!("{}", format_catalogue(&catalogue::<Vec<i32>>()));
            0
        }
        Some(("init", _)) => {
            print!("{}", SuiteConfig::default_toml());
            0
        }
        _ => 2,
    };
    process::exit(code);
}

/// Install the stderr subscriber; stdout carries the report.
fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// File values first, then command-line overrides.
///
/// The file is `--config` if given, otherwise `seqcheck.toml` in `dir` if it
/// exists.
fn load_config(matches: &ArgMatches, dir: &Path) -> anyhow::Result<SuiteConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => SuiteConfig::from_file(Path::new(path))
            .with_context(|| format!("loading configuration from {}", path))?,
        None => SuiteConfig::discover(dir)
            .with_context(|| format!("loading {}", dir.join(CONFIG_FILE_NAME).display()))?
            .unwrap_or_default(),
    };
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(*seed);
    }
    if let Some(filter) = matches.get_one::<String>("filter") {
        config.filter = Some(filter.clone());
    }
    if let Some(backend) = matches.get_one::<String>("backend") {
        config.backend = backend.parse::<Backend>()?;
    }
    Ok(config)
}
