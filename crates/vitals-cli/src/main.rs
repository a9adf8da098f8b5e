//! `vitals` — per-country health indicator workbook explorer.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::error;

use vitals_cli::cli::{Cli, LogFormatArg, OutputFormatArg};
use vitals_cli::commands::{OutputFormat, run_command};
use vitals_cli::logging::{LogConfig, LogFormat, init_logging};
use vitals_ingest::SnapshotCache;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(err) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {err}");
        std::process::exit(1);
    }
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let cache = SnapshotCache::new(&cli.workbook);
    // Loader failures degrade to a user-visible notice, never a crash.
    let snapshot = match cache.get_or_load() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!(workbook = %cli.workbook.display(), %err, "workbook unavailable");
            eprintln!("no data available: {err}");
            return 1;
        }
    };
    let output = match cli.output {
        OutputFormatArg::Table => OutputFormat::Table,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    match run_command(&snapshot, &cli.command, output) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
