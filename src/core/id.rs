use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Process-unique token identifying one chart instance.
///
/// Used to namespace the root surface id so several charts can share one
/// document without collisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartId(String);

impl ChartId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id attached to the root surface node.
    #[must_use]
    pub fn surface_id(&self) -> String {
        format!("chart-{}", self.0)
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of chart ids. Every call must return a value not returned before
/// within the process.
pub trait IdProvider {
    fn generate_id(&self) -> ChartId;
}

static NEXT_CHART_ID: AtomicU64 = AtomicU64::new(1);

/// Default provider backed by a process-wide counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessIdProvider;

impl IdProvider for ProcessIdProvider {
    fn generate_id(&self) -> ChartId {
        let raw = NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed);
        ChartId(format!("{raw:08x}"))
    }
}
