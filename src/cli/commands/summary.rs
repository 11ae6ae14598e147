//! Summary command: the dashboard metrics as a terminal report or JSON

use super::shared::RunReport;
use crate::app::models::{Column, LightLevel};
use crate::app::services::pipeline::{LoadedLog, Pipeline};
use crate::cli::args::{OutputFormat, SummaryArgs};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use std::fmt;
use tracing::info;

/// Summary command runner
pub fn run_summary(config: &Config, args: &SummaryArgs) -> Result<RunReport> {
    let mut pipeline = Pipeline::new(config);
    let loaded = pipeline.load_file(&args.load.input)?;

    match args.format {
        OutputFormat::Human => print!("{}", render_report(&loaded)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.snapshot)
                .map_err(|e| Error::serialization("Failed to serialize snapshot", e))?;
            println!("{}", json);
        }
    }

    info!("Summary complete: {}", loaded.dataset.parse_stats().summary());
    Ok(RunReport::from_stats(loaded.dataset.parse_stats(), true))
}

fn format_delta(delta: f64, unit: &str) -> ColoredString {
    let text = format!("{:+.1}{}", delta, unit);
    if delta > 0.0 {
        text.green()
    } else if delta < 0.0 {
        text.red()
    } else {
        text.normal()
    }
}

fn format_light_level(level: LightLevel) -> ColoredString {
    match level {
        LightLevel::High => level.as_str().yellow().bold(),
        LightLevel::Medium => level.as_str().yellow(),
        LightLevel::Low => level.as_str().blue(),
    }
}

/// Render the human-readable dashboard report
pub fn render_report(loaded: &LoadedLog) -> String {
    DashboardReport(loaded).to_string()
}

struct DashboardReport<'a>(&'a LoadedLog);

impl fmt::Display for DashboardReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = &self.0.snapshot;
        let stats = self.0.dataset.parse_stats();

        writeln!(f, "{}", "Station Dashboard".bold().cyan())?;
        writeln!(f, "{}", "=================".cyan())?;

        // Current readings
        writeln!(f)?;
        writeln!(f, "{}", "Current readings".bold())?;
        for column in Column::WITH_DELTA {
            let delta = snapshot.delta(column).unwrap_or(0.0);
            writeln!(
                f,
                "  {:<12} {:>10.1} {:<4} ({} over {} samples)",
                column.name(),
                snapshot.latest_value(column),
                column.unit(),
                format_delta(delta, column.unit()),
                snapshot.delta_lag
            )?;
        }
        writeln!(
            f,
            "  {:<12} {:>10.0} {:<4} ({})",
            Column::Light.name(),
            snapshot.latest_value(Column::Light),
            Column::Light.unit(),
            format_light_level(snapshot.latest_light_level())
        )?;

        // Statistics
        writeln!(f)?;
        writeln!(f, "{}", "Statistics".bold())?;
        writeln!(
            f,
            "  {:<12} {:>10} {:>10} {:>10}",
            "column", "min", "max", "mean"
        )?;
        for column in Column::NORMALIZED {
            match snapshot.summary(column) {
                Some(summary) => {
                    writeln!(
                        f,
                        "  {:<12} {:>10.1} {:>10.1} {:>10.1} {}",
                        column.name(),
                        summary.min,
                        summary.max,
                        summary.mean,
                        column.unit()
                    )?;
                }
                None => {
                    writeln!(f, "  {:<12} {}", column.name(), "no valid values".dimmed())?;
                }
            }
        }
        for column in snapshot.degenerate_columns() {
            writeln!(
                f,
                "  {} {} is constant; its normalized series is flat at 0",
                "note:".yellow(),
                column
            )?;
        }

        // GPS
        let trajectory = &snapshot.trajectory;
        writeln!(f)?;
        writeln!(f, "{}", "GPS".bold())?;
        writeln!(
            f,
            "  position     {:.6}, {:.6}",
            trajectory.current_position.latitude, trajectory.current_position.longitude
        )?;
        writeln!(
            f,
            "  altitude     {:.0} m",
            trajectory.current_position.altitude
        )?;
        writeln!(f, "  distance     {:.2} km", trajectory.distance_km)?;
        writeln!(
            f,
            "  map centre   {:.6}, {:.6}",
            trajectory.map_center.latitude, trajectory.map_center.longitude
        )?;

        // Data quality
        writeln!(f)?;
        writeln!(f, "{}", "Log".bold())?;
        writeln!(
            f,
            "  readings     {} ({} with timestamps)",
            snapshot.row_count, snapshot.timed_count
        )?;
        if let Some((start, end)) = snapshot.time_span {
            writeln!(f, "  span         {} -> {}", start, end)?;
        }
        if stats.rows_rejected > 0 {
            writeln!(
                f,
                "  {}     {} malformed rows skipped",
                "rejected".red(),
                stats.rows_rejected
            )?;
        }

        Ok(())
    }
}
