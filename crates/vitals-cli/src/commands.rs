//! Command implementations: each one reads the snapshot and returns the
//! rendered output text.

use std::fmt::Write as _;

use anyhow::Result;
use serde_json::json;
use tracing::warn;

use vitals_analyze::{
    AnalyzeError, ComparisonSeries, LatestValue, MapDataset, Ranking, SeriesStats,
    indicator_catalog, indicator_stats, latest_value,
};
use vitals_model::Snapshot;

use crate::cli::{Command, CompareArgs, IndicatorArgs, SeriesArgs};
use crate::render;

/// Output rendering selected by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

pub fn run_command(snapshot: &Snapshot, command: &Command, output: OutputFormat) -> Result<String> {
    match command {
        Command::Countries => countries(snapshot, output),
        Command::Indicators => indicators(snapshot, output),
        Command::Latest(args) => latest(snapshot, args, output),
        Command::Rank(args) => rank(snapshot, args, output),
        Command::Map(args) => map(snapshot, args, output),
        Command::Compare(args) => compare(snapshot, args, output),
        Command::Stats(args) => stats(snapshot, args, output),
    }
}

fn countries(snapshot: &Snapshot, output: OutputFormat) -> Result<String> {
    let names: Vec<&str> = snapshot.countries().collect();
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&names)?),
        OutputFormat::Table => Ok(render::name_list("Country", names.into_iter()).to_string()),
    }
}

fn indicators(snapshot: &Snapshot, output: OutputFormat) -> Result<String> {
    let catalog = indicator_catalog(snapshot);
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&catalog)?),
        OutputFormat::Table => Ok(render::name_list(
            "Indicator",
            catalog.iter().map(String::as_str),
        )
        .to_string()),
    }
}

fn latest(snapshot: &Snapshot, args: &SeriesArgs, output: OutputFormat) -> Result<String> {
    let outcome = latest_value(snapshot, &args.country, &args.indicator)?;
    let country = snapshot
        .resolve_country(&args.country)
        .unwrap_or(&args.country);
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "country": country,
            "indicator": args.indicator,
            "latest": outcome,
        }))?),
        OutputFormat::Table => Ok(match outcome {
            LatestValue::Value(value) => format!("{country} · {}: {value}", args.indicator),
            LatestValue::Missing(reason) => {
                format!("{country} · {}: missing ({reason})", args.indicator)
            }
        }),
    }
}

fn rank(snapshot: &Snapshot, args: &IndicatorArgs, output: OutputFormat) -> Result<String> {
    let ranking = Ranking::build(snapshot, &args.indicator);
    for skip in &ranking.skipped {
        warn!(country = %skip.country, reason = %skip.reason, "skipped in ranking");
    }
    if ranking.is_empty() {
        return Err(AnalyzeError::EmptySelection {
            indicator: args.indicator.clone(),
        }
        .into());
    }
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ranking)?),
        OutputFormat::Table => {
            let mut out = render::ranking_table(&ranking).to_string();
            if !ranking.skipped.is_empty() {
                out.push('\n');
                out.push_str(render::skipped_lines(&ranking.skipped).trim_end());
            }
            Ok(out)
        }
    }
}

fn map(snapshot: &Snapshot, args: &IndicatorArgs, output: OutputFormat) -> Result<String> {
    let dataset = MapDataset::build(snapshot, &args.indicator);
    for skip in &dataset.skipped {
        warn!(country = %skip.country, reason = %skip.reason, "skipped in map dataset");
    }
    if dataset.is_empty() {
        return Err(AnalyzeError::EmptySelection {
            indicator: args.indicator.clone(),
        }
        .into());
    }
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&dataset)?),
        OutputFormat::Table => {
            let mut out = render::map_table(&dataset).to_string();
            if !dataset.skipped.is_empty() {
                out.push('\n');
                out.push_str(render::skipped_lines(&dataset.skipped).trim_end());
            }
            Ok(out)
        }
    }
}

fn compare(snapshot: &Snapshot, args: &CompareArgs, output: OutputFormat) -> Result<String> {
    let first = ComparisonSeries::build(snapshot, &args.country1, &args.indicator1)?;
    let second = ComparisonSeries::build(snapshot, &args.country2, &args.indicator2)?;
    let first_stats = SeriesStats::compute(&first.values());
    let second_stats = SeriesStats::compute(&second.values());
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "series": [first, second],
            "stats": [first_stats, second_stats],
        }))?),
        OutputFormat::Table => {
            let mut out = String::new();
            for (series, stats) in [(first, first_stats), (second, second_stats)] {
                let _ = writeln!(out, "{} · {}", series.country, series.indicator);
                let _ = writeln!(out, "{}", render::series_table(&series));
                let _ = writeln!(out, "{}", render::stats_lines(stats));
                out.push('\n');
            }
            Ok(out.trim_end().to_string())
        }
    }
}

fn stats(snapshot: &Snapshot, args: &SeriesArgs, output: OutputFormat) -> Result<String> {
    let stats = indicator_stats(snapshot, &args.country, &args.indicator)?;
    let country = snapshot
        .resolve_country(&args.country)
        .unwrap_or(&args.country);
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "country": country,
            "indicator": args.indicator,
            "stats": stats,
        }))?),
        OutputFormat::Table => Ok(format!(
            "{country} · {}\n{}",
            args.indicator,
            render::stats_lines(stats)
        )),
    }
}
