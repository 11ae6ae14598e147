//! Shared components for CLI commands
//!
//! Configuration loading, CLI overrides and logging setup used by every
//! command.

use crate::Result;
use crate::app::services::log_parser::ParseStats;
use crate::cli::args::{Args, Commands};
use crate::config::Config;
use std::path::PathBuf;

/// Outcome of a command, used to pick the process exit code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Rows turned into readings
    pub rows_parsed: usize,
    /// Rows dropped as malformed
    pub rows_rejected: usize,
    /// False when the command found problems it was asked to fail on
    pub clean: bool,
}

impl RunReport {
    pub fn from_stats(stats: &ParseStats, clean: bool) -> Self {
        Self {
            rows_parsed: stats.rows_parsed,
            rows_rejected: stats.rows_rejected,
            clean,
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("station_dashboard={}", level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path: Option<PathBuf> = if args.config_file.is_none() {
        Config::default_config_path()
            .ok()
            .filter(|path| path.exists())
    } else {
        None
    };

    let config_file = args.config_file.as_deref().or(default_config_path.as_deref());

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(level) = args.get_log_level() {
        config.logging.level = level.to_string();
    }

    if let Some(policy) = args.load_args().and_then(|load| load.row_policy) {
        config.parsing.row_policy = policy;
    }

    if let Some(Commands::Summary(summary)) = &args.command {
        if let Some(lag) = summary.delta_lag {
            config.metrics.delta_lag = lag;
        }
    }
}
