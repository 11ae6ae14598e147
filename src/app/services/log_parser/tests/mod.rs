//! Test utilities for station log parser testing
//!
//! Common log fixtures and helper functions used across the parser test
//! modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod stats_tests;

/// A well-formed three-row log
pub fn create_test_log() -> String {
    "251021,10:41:09,23.5,55.4,992.0,801,50.604988,3.150694,50.0\n\
     251021,10:41:19,23.7,55.1,992.1,790,50.605012,3.150731,50.5\n\
     251021,10:41:29,23.9,54.8,992.1,612,50.605040,3.150770,51.0\n"
        .to_string()
}

/// A log mixing good rows, an untimed row and rejected rows
pub fn create_mixed_log() -> String {
    "251021,10:41:09,20.0,50.0,1000.0,500,0.0,0.0,10.0\n\
     999999,10:41:19,21.0,50.0,1000.0,700,0.0,0.001,10.0\n\
     251021,10:41:29,abc,50.0,1000.0,900,0.0,0.002,10.0\n\
     251021,10:41:39,22.0,50.0\n\
     251021,10:41:49,24.0,50.0,1000.0,900,0.0,0.003,10.0\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
