//! CLI argument definitions for the `vitals` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vitals",
    version,
    about = "Explore a per-country public-health indicator workbook",
    long_about = "Explore a multi-sheet workbook of per-country public-health\n\
                  indicators (one sheet per country, one 'date' column per sheet).\n\
                  Lists countries and indicators, looks up latest values, ranks\n\
                  countries, builds map datasets and compares indicator series."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the indicator workbook, resolved relative to the working
    /// directory.
    #[arg(
        long = "workbook",
        short = 'w',
        value_name = "PATH",
        default_value = "indicators.xlsx",
        global = true
    )]
    pub workbook: PathBuf,

    /// Render results as a table or as JSON.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the countries (sheets) in the workbook.
    Countries,

    /// List every indicator available across countries.
    Indicators,

    /// Show the latest value of an indicator for one country.
    Latest(SeriesArgs),

    /// Rank countries by the latest value of an indicator, descending.
    Rank(IndicatorArgs),

    /// Build the choropleth dataset for an indicator.
    Map(IndicatorArgs),

    /// Compare two (country, indicator) series over their date axes.
    Compare(CompareArgs),

    /// Mean, median and mode of one (country, indicator) series.
    Stats(SeriesArgs),
}

#[derive(Parser)]
pub struct IndicatorArgs {
    /// Indicator column name (normalized: trimmed, lowercase).
    #[arg(value_name = "INDICATOR")]
    pub indicator: String,
}

#[derive(Parser)]
pub struct SeriesArgs {
    /// Country name (sheet name; case-insensitive).
    #[arg(value_name = "COUNTRY")]
    pub country: String,

    /// Indicator column name (normalized: trimmed, lowercase).
    #[arg(value_name = "INDICATOR")]
    pub indicator: String,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// First country name.
    #[arg(value_name = "COUNTRY1")]
    pub country1: String,

    /// Indicator for the first country.
    #[arg(value_name = "INDICATOR1")]
    pub indicator1: String,

    /// Second country name.
    #[arg(value_name = "COUNTRY2")]
    pub country2: String,

    /// Indicator for the second country.
    #[arg(value_name = "INDICATOR2")]
    pub indicator2: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
