//! Command-line argument definitions for the station dashboard
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::RowPolicy;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the station dashboard
///
/// Parses weather-station logs and reports the metrics, statistics and
/// trajectory figures behind a monitoring dashboard.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "station-dashboard",
    version,
    about = "Summarize weather-station logs: metrics, statistics, normalized series and GPS trajectory",
    long_about = "Reads headerless weather-station logs (date, time, temperature, humidity, pressure, \
                  light, latitude, longitude, altitude) and derives the latest readings, trailing \
                  deltas, per-column statistics, normalized overlay series and the approximate \
                  distance travelled."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// Defaults to ~/.config/station-dashboard/config.toml when present.
    #[arg(short = 'c', long = "config", value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the dashboard metrics for a log file
    Summary(SummaryArgs),
    /// Check a log file for malformed rows and timestamps
    Validate(ValidateArgs),
    /// Write the parsed dataset and derived snapshot as JSON
    Export(ExportArgs),
}

/// Options shared by every command that loads a log
#[derive(Debug, Clone, ClapArgs)]
pub struct LoadArgs {
    /// Station log file to read
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// How to treat rows with malformed numeric fields
    #[arg(long = "row-policy", value_enum, value_name = "POLICY")]
    pub row_policy: Option<RowPolicy>,
}

/// Arguments for the summary command
#[derive(Debug, Clone, ClapArgs)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Samples between the latest reading and its delta reference
    #[arg(long = "delta-lag", value_name = "N")]
    pub delta_lag: Option<usize>,

    /// Output format for the report
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Debug, Clone, ClapArgs)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Fail when any row is rejected or untimed
    #[arg(long = "strict")]
    pub strict: bool,

    /// Maximum number of faults to list
    #[arg(long = "max-faults", value_name = "N", default_value = "20")]
    pub max_faults: usize,
}

/// Arguments for the export command
#[derive(Debug, Clone, ClapArgs)]
pub struct ExportArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Destination JSON file
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Pretty-print the JSON
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Overwrite the output file if it exists
    #[arg(long = "force")]
    pub force_overwrite: bool,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured terminal report
    Human,
    /// Snapshot as JSON on stdout
    Json,
}

impl Args {
    /// Log level implied by the verbosity flags, if any were given
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Validate argument combinations that clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config_file {
            check_input_file(path, "config file")?;
        }

        match &self.command {
            Some(Commands::Summary(args)) => {
                check_input_file(&args.load.input, "log file")?;
                if args.delta_lag == Some(0) {
                    return Err(Error::configuration("--delta-lag must be at least 1"));
                }
            }
            Some(Commands::Validate(args)) => {
                check_input_file(&args.load.input, "log file")?;
            }
            Some(Commands::Export(args)) => {
                check_input_file(&args.load.input, "log file")?;
                if args.output.exists() && !args.force_overwrite {
                    return Err(Error::configuration(format!(
                        "Output file '{}' already exists (use --force to overwrite)",
                        args.output.display()
                    )));
                }
            }
            None => {}
        }

        Ok(())
    }

    /// Loading options of the selected command
    pub fn load_args(&self) -> Option<&LoadArgs> {
        match &self.command {
            Some(Commands::Summary(args)) => Some(&args.load),
            Some(Commands::Validate(args)) => Some(&args.load),
            Some(Commands::Export(args)) => Some(&args.load),
            None => None,
        }
    }
}

fn check_input_file(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "The {} '{}' is not a regular file",
            what,
            path.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_summary_defaults() {
        let args = Args::try_parse_from(["station-dashboard", "summary", "station.log"]).unwrap();

        match args.command {
            Some(Commands::Summary(summary)) => {
                assert_eq!(summary.load.input, PathBuf::from("station.log"));
                assert_eq!(summary.format, OutputFormat::Human);
                assert_eq!(summary.delta_lag, None);
                assert_eq!(summary.load.row_policy, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_summary_options() {
        let args = Args::try_parse_from([
            "station-dashboard",
            "summary",
            "station.log",
            "--format",
            "json",
            "--delta-lag",
            "5",
            "--row-policy",
            "abort",
            "-vv",
        ])
        .unwrap();

        match &args.command {
            Some(Commands::Summary(summary)) => {
                assert_eq!(summary.format, OutputFormat::Json);
                assert_eq!(summary.delta_lag, Some(5));
                assert_eq!(summary.load.row_policy, Some(RowPolicy::Abort));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.get_log_level(), Some("trace"));
    }

    #[test]
    fn test_export_requires_output() {
        let result = Args::try_parse_from(["station-dashboard", "export", "station.log"]);
        assert!(result.is_err());

        let args = Args::try_parse_from([
            "station-dashboard",
            "export",
            "station.log",
            "-o",
            "out.json",
            "--pretty",
        ])
        .unwrap();
        match args.command {
            Some(Commands::Export(export)) => {
                assert_eq!(export.output, PathBuf::from("out.json"));
                assert!(export.pretty);
                assert!(!export.force_overwrite);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let result = Args::try_parse_from(["station-dashboard", "-q", "-v", "summary", "x.log"]);
        assert!(result.is_err());

        let args = Args::try_parse_from(["station-dashboard", "-q", "summary", "x.log"]).unwrap();
        assert_eq!(args.get_log_level(), Some("error"));
    }

    #[test]
    fn test_validate_missing_input() {
        let args =
            Args::try_parse_from(["station-dashboard", "validate", "/nonexistent/station.log"])
                .unwrap();
        assert!(matches!(args.validate(), Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_delta_lag() {
        let mut log = NamedTempFile::new().unwrap();
        writeln!(log, "251021,10:41:09,23.5,55.4,992.0,801,50.6,3.1,50.0").unwrap();
        let path = log.path().to_string_lossy().to_string();

        let args = Args::try_parse_from(["station-dashboard", "summary", &path, "--delta-lag", "0"])
            .unwrap();
        assert!(args.validate().is_err());

        let args = Args::try_parse_from(["station-dashboard", "summary", &path]).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_export_refuses_to_overwrite() {
        let log = NamedTempFile::new().unwrap();
        let existing = NamedTempFile::new().unwrap();
        let log_path = log.path().to_string_lossy().to_string();
        let out_path = existing.path().to_string_lossy().to_string();

        let args =
            Args::try_parse_from(["station-dashboard", "export", &log_path, "-o", &out_path])
                .unwrap();
        assert!(args.validate().is_err());

        let args = Args::try_parse_from([
            "station-dashboard",
            "export",
            &log_path,
            "-o",
            &out_path,
            "--force",
        ])
        .unwrap();
        assert!(args.validate().is_ok());
    }
}
