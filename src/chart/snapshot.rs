use serde::{Deserialize, Serialize};

use crate::core::{ChartConfig, ChartId, ChartLayout, ChartOptions};
use crate::scene::Scene;

use super::{ChartBase, ChartPhase};

/// Serializable view of a chart's resolved state, for diagnostics and
/// regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub id: ChartId,
    pub phase: ChartPhase,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub options: Option<ChartOptions>,
    #[serde(default)]
    pub layout: Option<ChartLayout>,
}

impl<S: Scene, O: ChartConfig> ChartBase<S, O> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            id: self.id.clone(),
            phase: self.phase(),
            width: self.width,
            height: self.height,
            options: self.chart_options().cloned(),
            layout: self.layout,
        }
    }
}
