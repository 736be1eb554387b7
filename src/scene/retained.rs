use tracing::trace;

use crate::core::Bounds;
use crate::error::{ChartError, ChartResult};

use super::markup::write_subtree;
use super::{NodeId, NodeKind, Scene, SceneNode};

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<SceneNode>,
}

/// Headless retained-mode scene tree.
///
/// Nodes live in a generational arena. Removed nodes free their slot for
/// reuse and bump its generation, so a stale `NodeId` fails with
/// `ChartError::UnknownNode` instead of aliasing the node that took its slot.
#[derive(Debug, Clone)]
pub struct RetainedScene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    document: NodeId,
}

impl Default for RetainedScene {
    fn default() -> Self {
        Self::new()
    }
}

impl RetainedScene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(SceneNode::new(NodeKind::Document, None)),
            }],
            free: Vec::new(),
            live: 1,
            document: NodeId::new(0, 0),
        }
    }

    #[must_use]
    pub fn document(&self) -> NodeId {
        self.document
    }

    /// Creates a sized host container directly under the document.
    pub fn create_container(&mut self, bounds: Bounds) -> ChartResult<NodeId> {
        self.create_container_in(self.document, bounds)
    }

    pub fn create_container_in(&mut self, parent: NodeId, bounds: Bounds) -> ChartResult<NodeId> {
        let container = self.insert(parent, NodeKind::Container)?;
        self.node_mut(container)?.bounds = Some(bounds);
        Ok(container)
    }

    /// Simulates the host resizing an element. Charts see the new size on
    /// their next bootstrap.
    pub fn set_bounds(&mut self, node: NodeId, bounds: Bounds) -> ChartResult<()> {
        self.node_mut(node)?.bounds = Some(bounds);
        Ok(())
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) -> ChartResult<()> {
        self.node_mut(node)?.text = Some(text.into());
        Ok(())
    }

    pub fn node(&self, node: NodeId) -> ChartResult<&SceneNode> {
        self.slots
            .get(node.index() as usize)
            .filter(|slot| slot.generation == node.generation())
            .and_then(|slot| slot.node.as_ref())
            .ok_or_else(|| unknown(node))
    }

    pub fn children(&self, node: NodeId) -> ChartResult<&[NodeId]> {
        Ok(self.node(node)?.children())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> ChartResult<Option<&str>> {
        Ok(self.node(node)?.attribute(name))
    }

    pub fn classes(&self, node: NodeId) -> ChartResult<&[String]> {
        Ok(self.node(node)?.classes())
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_ok()
    }

    /// Number of live nodes, including the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// The document node is never removed, so a scene is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of allocated slots, live or free. Bounded by the peak live
    /// node count.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Serializes `node` and its descendants as SVG/HTML markup.
    pub fn to_markup(&self, node: NodeId) -> ChartResult<String> {
        let mut out = String::new();
        write_subtree(self, node, &mut out)?;
        Ok(out)
    }

    fn node_mut(&mut self, node: NodeId) -> ChartResult<&mut SceneNode> {
        self.slots
            .get_mut(node.index() as usize)
            .filter(|slot| slot.generation == node.generation())
            .and_then(|slot| slot.node.as_mut())
            .ok_or_else(|| unknown(node))
    }

    fn insert(&mut self, parent: NodeId, kind: NodeKind) -> ChartResult<NodeId> {
        self.node(parent)?;
        let entry = SceneNode::new(kind, Some(parent));
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(entry);
                NodeId::new(index, slot.generation)
            }
            None => {
                let index = u32::try_from(self.slots.len()).map_err(|_| {
                    ChartError::InvalidData("scene node capacity exhausted".to_owned())
                })?;
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(entry),
                });
                NodeId::new(index, 0)
            }
        };
        self.live += 1;
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    fn release(&mut self, node: NodeId) -> Option<SceneNode> {
        let slot = self
            .slots
            .get_mut(node.index() as usize)
            .filter(|slot| slot.generation == node.generation())?;
        let detached = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(node.index());
        self.live -= 1;
        Some(detached)
    }
}

fn unknown(node: NodeId) -> ChartError {
    ChartError::UnknownNode {
        index: node.index(),
        generation: node.generation(),
    }
}

impl Scene for RetainedScene {
    type Node = NodeId;
    type Error = ChartError;

    fn create_node(&mut self, parent: NodeId, kind: NodeKind) -> ChartResult<NodeId> {
        self.insert(parent, kind)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> ChartResult<()> {
        self.node_mut(node)?
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> ChartResult<()> {
        let target = self.node_mut(node)?;
        if !target.has_class(class) {
            target.classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_all_children(&mut self, node: NodeId) -> ChartResult<usize> {
        let mut pending = std::mem::take(&mut self.node_mut(node)?.children);
        let mut removed = 0;
        while let Some(child) = pending.pop() {
            if let Some(detached) = self.release(child) {
                pending.extend(detached.children);
                removed += 1;
            }
        }
        trace!(
            node = node.index(),
            removed,
            free_slots = self.free.len(),
            "removed scene subtree"
        );
        Ok(removed)
    }

    fn measure_bounds(&self, node: NodeId) -> ChartResult<Bounds> {
        let mut current = Some(node);
        while let Some(id) = current {
            let entry = self.node(id)?;
            if let Some(bounds) = entry.bounds {
                return Ok(bounds);
            }
            current = entry.parent;
        }
        Ok(Bounds::default())
    }
}
