//! Export command: dataset and derived snapshot as JSON for other view layers

use super::shared::RunReport;
use crate::app::services::pipeline::{LoadedLog, Pipeline};
use crate::cli::args::ExportArgs;
use crate::config::Config;
use crate::{Error, Result};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Export command runner
pub fn run_export(config: &Config, args: &ExportArgs) -> Result<RunReport> {
    let mut pipeline = Pipeline::new(config);
    let loaded = pipeline.load_file(&args.load.input)?;

    write_json(&loaded, &args.output, args.pretty)?;

    info!(
        "Exported {} readings to {}",
        loaded.dataset.len(),
        args.output.display()
    );
    Ok(RunReport::from_stats(loaded.dataset.parse_stats(), true))
}

/// Write a loaded log to `path` as JSON
pub fn write_json(loaded: &LoadedLog, path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::io(
                format!("Failed to create output directory '{}'", parent.display()),
                e,
            )
        })?;
    }

    let file = std::fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create '{}'", path.display()), e))?;
    let mut writer = BufWriter::new(file);

    let result = if pretty {
        serde_json::to_writer_pretty(&mut writer, loaded)
    } else {
        serde_json::to_writer(&mut writer, loaded)
    };
    result.map_err(|e| Error::serialization("Failed to write JSON export", e))?;

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush '{}'", path.display()), e))
}
