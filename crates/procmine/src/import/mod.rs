//! Event log import.
//!
//! Logs are validated completely at load time: records missing a required
//! field are rejected here rather than when an analysis touches them.

mod xes;

pub use xes::{parse_timestamp, parse_xes, parse_xes_with_options};

use crate::error::{MiningError, Result};
use crate::models::EventLog;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling log import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Reject events without `time:timestamp`.
    pub require_timestamps: bool,
}

impl ImportOptions {
    /// Require every event to carry a timestamp.
    pub fn with_required_timestamps(mut self) -> Self {
        self.require_timestamps = true;
        self
    }
}

/// Load an XES event log from a file.
pub fn load_log(path: impl AsRef<Path>) -> Result<EventLog> {
    load_log_with_options(path, &ImportOptions::default())
}

/// Load an XES event log from a file with explicit options.
///
/// A missing or unreadable file is a [`MiningError::Parse`], like a
/// malformed one.
pub fn load_log_with_options(
    path: impl AsRef<Path>,
    options: &ImportOptions,
) -> Result<EventLog> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| MiningError::Parse(format!("cannot read {}: {}", path.display(), e)))?;
    let log = parse_xes_with_options(&text, options)?;
    log::info!(
        "Loaded {} traces ({} events) from {}",
        log.len(),
        log.event_count(),
        path.display()
    );
    Ok(log)
}
