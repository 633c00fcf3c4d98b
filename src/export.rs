//! Timestamped snapshot export

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::controller::Snapshot;
use crate::error::Result;

/// Snapshot stamped with the time it was exported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotExport {
    pub exported_at: DateTime<Utc>,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

impl SnapshotExport {
    /// Stamp `snapshot` with the current time
    pub fn now(snapshot: Snapshot) -> Self {
        Self::at(snapshot, Utc::now())
    }

    pub fn at(snapshot: Snapshot, exported_at: DateTime<Utc>) -> Self {
        Self { exported_at, snapshot }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
