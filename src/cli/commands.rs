//! Command implementations for the station dashboard CLI
//!
//! This module dispatches to the individual commands after setting up
//! configuration and logging.

mod export;
mod shared;
mod summary;
mod validate;

pub use shared::RunReport;

use crate::Result;
use crate::cli::args::{Args, Commands};
use tracing::debug;

/// Main command runner
///
/// 1. Validate arguments
/// 2. Load layered configuration and set up logging
/// 3. Run the selected command
pub fn run(args: Args) -> Result<RunReport> {
    args.validate()?;

    let config = shared::load_configuration(&args)?;
    shared::setup_logging(&config.logging.level, args.quiet);
    debug!("Command line arguments: {:?}", args);
    debug!("Effective configuration: {:?}", config);

    match args.command {
        Some(Commands::Summary(summary_args)) => summary::run_summary(&config, &summary_args),
        Some(Commands::Validate(validate_args)) => {
            validate::run_validate(&config, &validate_args)
        }
        Some(Commands::Export(export_args)) => export::run_export(&config, &export_args),
        None => Ok(RunReport::default()),
    }
}
