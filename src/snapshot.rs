//! Chart snapshots - the user-facing save/load format.
//!
//! A snapshot is a named, timestamped copy of the item list as JSON text.
//! Loading validates before anything is applied: malformed text or a
//! snapshot that violates the id-uniqueness invariant is rejected whole,
//! so a bad file can never corrupt the in-memory chart.

use crate::chart::Chart;
use crate::types::Item;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("snapshot contains duplicate item id {0}")]
    DuplicateId(u64),
}

/// A saved chart: name, creation timestamp, and the full item list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub name: String,
    pub created: DateTime<Utc>,
    pub seats: Vec<Item>,
}

impl ChartSnapshot {
    /// Snapshot the chart as it stands now.
    pub fn capture(chart: &Chart) -> Self {
        Self {
            name: chart.name.clone(),
            created: Utc::now(),
            seats: chart.items.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse and validate snapshot text.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: ChartSnapshot = serde_json::from_str(text)?;

        let mut seen = HashSet::with_capacity(snapshot.seats.len());
        for item in &snapshot.seats {
            if !seen.insert(item.id) {
                return Err(SnapshotError::DuplicateId(item.id));
            }
        }
        Ok(snapshot)
    }
}
