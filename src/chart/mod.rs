mod base;
mod json_contract;
mod lifecycle;
mod snapshot;
mod variant;

pub use base::{ChartBase, ChartPhase};
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use snapshot::ChartSnapshot;
pub use variant::Chart;
