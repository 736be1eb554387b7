//! chart-base: container, padded coordinate frame and options contract for
//! 2D chart types.
//!
//! A chart mounts a root surface into a host container, resolves its options
//! over typed defaults, derives the drawable area from the container size and
//! can clear its canvas between render passes. Scene mutation goes through the
//! [`scene::Scene`] trait so the same lifecycle drives any backend.

pub mod chart;
pub mod core;
pub mod error;
pub mod scene;
pub mod telemetry;

pub use crate::chart::{Chart, ChartBase};
pub use crate::core::{ChartOptions, PartialChartOptions};
pub use crate::error::{ChartError, ChartResult};
