use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Bounds;

/// Handle to a node stored in a `RetainedScene`.
///
/// Slots are reused once their node is removed; the generation tells a live
/// handle apart from a stale one pointing at the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    #[must_use]
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Scene root; serialized as its children only.
    Document,
    /// Host element a chart is mounted into.
    Container,
    /// Root drawing surface owned by a chart.
    Surface,
    Group,
    Rect,
    Circle,
    Line,
    Path,
    Text,
}

impl NodeKind {
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Document => "",
            Self::Container => "div",
            Self::Surface => "svg",
            Self::Group => "g",
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Path => "path",
            Self::Text => "text",
        }
    }

    /// Shapes serialize as self-closing tags when they carry no content.
    #[must_use]
    pub const fn is_shape(self) -> bool {
        matches!(self, Self::Rect | Self::Circle | Self::Line | Self::Path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub(super) kind: NodeKind,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
    pub(super) attributes: IndexMap<String, String>,
    pub(super) classes: SmallVec<[String; 2]>,
    pub(super) bounds: Option<Bounds>,
    pub(super) text: Option<String>,
}

impl SceneNode {
    pub(super) fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            attributes: IndexMap::new(),
            classes: SmallVec::new(),
            bounds: None,
            text: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Explicit size assigned by the host, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
