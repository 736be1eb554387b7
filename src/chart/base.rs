use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ChartConfig, ChartId, ChartLayout, ChartOptions};
use crate::scene::Scene;

/// Layer-owned lifecycle phase.
///
/// Whether a concrete chart has drawn into the canvas is not tracked here;
/// `reset` is the only transition this layer performs after bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartPhase {
    /// Scene nodes exist, options are unresolved and dimensions are zero.
    Constructed,
    /// Options resolved and layout computed at least once.
    Bootstrapped,
}

/// Shared state of every chart: the owned scene nodes, the resolved options
/// and the padded coordinate frame concrete charts render within.
///
/// The container is borrowed from the host and never modified beyond the
/// root surface appended to it. The root surface and the canvas group are
/// exclusively mutated through this type.
pub struct ChartBase<S: Scene, O: ChartConfig = ChartOptions> {
    pub(super) id: ChartId,
    pub(super) container: S::Node,
    pub(super) root: S::Node,
    pub(super) canvas: S::Node,
    pub(super) options: Option<O>,
    pub(super) layout: Option<ChartLayout>,
    pub(super) width: f64,
    pub(super) height: f64,
}

impl<S: Scene, O: ChartConfig> ChartBase<S, O> {
    #[must_use]
    pub fn id(&self) -> &ChartId {
        &self.id
    }

    /// Host element this chart was mounted into.
    #[must_use]
    pub fn container(&self) -> S::Node {
        self.container
    }

    /// Root surface spanning the full container.
    #[must_use]
    pub fn root(&self) -> S::Node {
        self.root
    }

    /// Content group translated by the padding offset; concrete charts draw here.
    #[must_use]
    pub fn canvas(&self) -> S::Node {
        self.canvas
    }

    /// Resolved options, `None` until the first bootstrap.
    #[must_use]
    pub fn options(&self) -> Option<&O> {
        self.options.as_ref()
    }

    #[must_use]
    pub fn chart_options(&self) -> Option<&ChartOptions> {
        self.options.as_ref().map(ChartConfig::chart_options)
    }

    /// Drawable width. May be negative when padding exceeds the container.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Drawable height. May be negative when padding exceeds the container.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn layout(&self) -> Option<ChartLayout> {
        self.layout
    }

    #[must_use]
    pub fn phase(&self) -> ChartPhase {
        if self.layout.is_some() {
            ChartPhase::Bootstrapped
        } else {
            ChartPhase::Constructed
        }
    }
}

impl<S: Scene, O: ChartConfig> fmt::Debug for ChartBase<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartBase")
            .field("id", &self.id)
            .field("container", &self.container)
            .field("root", &self.root)
            .field("canvas", &self.canvas)
            .field("options", &self.options)
            .field("layout", &self.layout)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
