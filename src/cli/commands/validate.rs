//! Validate command: parse-quality report for a station log

use super::shared::RunReport;
use crate::app::services::log_parser::{LogParser, ParseStats};
use crate::cli::args::ValidateArgs;
use crate::config::Config;
use crate::Result;
use colored::*;
use std::fmt;
use tracing::{info, warn};

/// Validate command runner
///
/// Parsing only; no metrics are derived, so an empty log is reported rather
/// than treated as an error.
pub fn run_validate(config: &Config, args: &ValidateArgs) -> Result<RunReport> {
    let parser = LogParser::new(config.parsing.clone());
    let dataset = parser.parse_file(&args.load.input)?;
    let stats = dataset.parse_stats();

    if dataset.is_empty() {
        warn!("No readings parsed from {}", args.load.input.display());
    }

    let clean = !args.strict || (stats.rows_rejected == 0 && stats.untimed_rows == 0);
    print!("{}", render_validation(stats, args.max_faults, clean));

    info!("Validation complete: {}", stats.summary());
    Ok(RunReport::from_stats(stats, clean))
}

/// Render the validation report, listing at most `max_faults` faults
pub fn render_validation(stats: &ParseStats, max_faults: usize, clean: bool) -> String {
    ValidationReport {
        stats,
        max_faults,
        clean,
    }
    .to_string()
}

struct ValidationReport<'a> {
    stats: &'a ParseStats,
    max_faults: usize,
    clean: bool,
}

impl fmt::Display for ValidationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            stats,
            max_faults,
            clean,
        } = *self;

        writeln!(f, "{}", "Log validation".bold().cyan())?;
        writeln!(f, "  rows         {}", stats.total_rows)?;
        writeln!(
            f,
            "  parsed       {} ({:.1}%)",
            stats.rows_parsed,
            stats.success_rate()
        )?;
        writeln!(f, "  rejected     {}", stats.rows_rejected)?;
        writeln!(f, "  untimed      {}", stats.untimed_rows)?;

        if stats.fault_count() > 0 {
            writeln!(f)?;
            writeln!(f, "{}", "Faults".bold())?;
            for fault in stats.faults.iter().take(max_faults) {
                let marker = if fault.rejects_row() {
                    "rejected".red()
                } else {
                    "untimed".yellow()
                };
                writeln!(f, "  [{}] {}", marker, fault)?;
            }
            let listed = stats.faults.len().min(max_faults);
            let remaining = stats.fault_count() - listed;
            if remaining > 0 {
                writeln!(f, "  ... and {} more", remaining)?;
            }
        }

        writeln!(f)?;
        let verdict = if clean {
            "OK".green().bold()
        } else {
            "FAILED".red().bold()
        };
        writeln!(f, "Result: {}", verdict)?;

        Ok(())
    }
}
