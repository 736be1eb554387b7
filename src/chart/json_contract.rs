use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{ChartOptions, PartialChartOptions};
use crate::error::{ChartError, ChartResult};

use super::ChartSnapshot;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

const SCHEMA_VERSION_KEY: &str = "schema_version";

/// Versioned envelope around a [`ChartSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

#[derive(Serialize)]
struct ChartSnapshotEnvelope<'a> {
    schema_version: u32,
    snapshot: &'a ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("chart snapshot {} not serializable: {e}", self.id))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let envelope = ChartSnapshotEnvelope {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self,
        };
        serde_json::to_string_pretty(&envelope).map_err(|e| {
            ChartError::InvalidData(format!(
                "chart snapshot {} not serializable as schema v{CHART_SNAPSHOT_JSON_SCHEMA_V1}: {e}",
                self.id
            ))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    ///
    /// The presence of a top-level `schema_version` key selects the versioned
    /// form; errors name the form that was rejected.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("chart snapshot is not valid json: {e}"))
        })?;

        let Some(version) = value.get(SCHEMA_VERSION_KEY).cloned() else {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("bare chart snapshot rejected: {e}"))
            });
        };
        if version.as_u64() != Some(u64::from(CHART_SNAPSHOT_JSON_SCHEMA_V1)) {
            return Err(ChartError::InvalidData(format!(
                "chart snapshot schema_version {version} is not supported \
                 (expected {CHART_SNAPSHOT_JSON_SCHEMA_V1})"
            )));
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("versioned chart snapshot rejected: {e}"))
        })?;
        Ok(payload.snapshot)
    }
}

impl PartialChartOptions {
    /// Parses caller configuration. Unknown keys are kept in the `extra` map of
    /// the group they appear in.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart options: {e}")))
    }
}

impl ChartOptions {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart options: {e}"))
        })
    }
}
