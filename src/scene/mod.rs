mod markup;
mod node;
mod retained;

pub use node::{NodeId, NodeKind, SceneNode};
pub use retained::RetainedScene;

use std::fmt;

use crate::core::Bounds;

/// Minimal scene-graph contract the chart layer is written against.
///
/// Layout and lifecycle logic only ever talks to this trait, so the same
/// chart code can drive a retained tree, an immediate-mode canvas adapter or
/// a headless test double. Backend failures are reported through
/// `Self::Error` and are never translated by callers in this crate.
pub trait Scene {
    type Node: Copy + Eq + fmt::Debug;
    type Error: std::error::Error;

    /// Appends a new node of `kind` as the last child of `parent`.
    fn create_node(&mut self, parent: Self::Node, kind: NodeKind)
    -> Result<Self::Node, Self::Error>;

    fn set_attribute(
        &mut self,
        node: Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    /// Adds a style class. Adding a class the node already has is a no-op.
    fn add_class(&mut self, node: Self::Node, class: &str) -> Result<(), Self::Error>;

    /// Destroys every descendant of `node` and returns how many were removed.
    fn remove_all_children(&mut self, node: Self::Node) -> Result<usize, Self::Error>;

    /// Current bounding box of `node` as laid out by the host environment.
    fn measure_bounds(&self, node: Self::Node) -> Result<Bounds, Self::Error>;
}
