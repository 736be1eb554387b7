use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Padding, Translation, ViewBox};

/// Coordinate frame derived from one container measurement.
///
/// `drawable` is the area concrete charts render into; its origin is the
/// content group origin after `translation` is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub container: Bounds,
    pub drawable: Bounds,
    pub view_box: ViewBox,
    pub translation: Translation,
}

impl ChartLayout {
    /// Subtracts padding from the container size. Over-large padding yields a
    /// negative drawable extent, which is returned as is.
    #[must_use]
    pub fn compute(container: Bounds, padding: &Padding) -> Self {
        Self {
            container,
            drawable: Bounds::new(
                container.width - padding.horizontal(),
                container.height - padding.vertical(),
            ),
            view_box: ViewBox::from_bounds(container),
            translation: Translation::new(padding.left, padding.top),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.drawable.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.drawable.height
    }
}
