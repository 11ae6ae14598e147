//! Parse-and-derive pipeline
//!
//! One load runs the parser and the calculator once, synchronously, and
//! hands back an immutable [`LoadedLog`]. Loading the same bytes again is
//! served from the snapshot cache.

use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use super::log_parser::LogParser;
use super::metrics::{DerivedSnapshot, MetricsCalculator};
use super::snapshot_cache::SnapshotCache;
use crate::app::models::Dataset;
use crate::config::Config;
use crate::{Error, Result};

/// A parsed dataset together with its derived snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedLog {
    pub dataset: Dataset,
    pub snapshot: DerivedSnapshot,
}

/// Parser, calculator and cache wired together from one configuration
#[derive(Debug)]
pub struct Pipeline {
    parser: LogParser,
    calculator: MetricsCalculator,
    cache: SnapshotCache<LoadedLog>,
}

impl Pipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            parser: LogParser::new(config.parsing.clone()),
            calculator: MetricsCalculator::new(config.metrics.clone()),
            cache: SnapshotCache::new(config.cache.capacity),
        }
    }

    /// Parse and derive a log held in memory
    pub fn load_bytes(&mut self, content: &[u8]) -> Result<Arc<LoadedLog>> {
        let parser = &self.parser;
        let calculator = &self.calculator;

        self.cache.get_or_try_insert_with(content, || {
            let dataset = parser.parse_bytes(content)?;
            let snapshot = calculator.derive(&dataset)?;
            Ok(LoadedLog { dataset, snapshot })
        })
    }

    /// Read, parse and derive a log file
    pub fn load_file(&mut self, path: &Path) -> Result<Arc<LoadedLog>> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read(path)
            .map_err(|e| Error::io(format!("Failed to read log file {}", path.display()), e))?;
        info!("Loaded {} bytes from {}", content.len(), path.display());

        self.load_bytes(&content)
    }

    pub fn parser(&self) -> &LogParser {
        &self.parser
    }

    pub fn cache(&self) -> &SnapshotCache<LoadedLog> {
        &self.cache
    }
}
