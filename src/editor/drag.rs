//! Drag controller: per-node pointer-drag sessions.
//!
//! Every update recomputes the node position from the session anchors
//! (pointer and node position at press time), never from frame-to-frame
//! deltas, so repeated moves cannot accumulate floating-point drift.
//! Callers must guarantee [`DragController::end`] runs on every exit path
//! (release or view teardown) so no session outlives its pointer capture.

use crate::error::{Result, SkemaError};
use crate::geometry::Point;
use crate::graph::{NodeId, Schematic};

#[derive(Debug, Clone, Copy)]
struct DragSession {
    node: NodeId,
    anchor_pointer: Point,
    anchor_node: Point,
}

/// Pointer-drag session manager for repositioning nodes.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag session is active (the view applies the grab cursor
    /// while this holds).
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The node being dragged, if any.
    pub fn dragged_node(&self) -> Option<NodeId> {
        self.session.map(|s| s.node)
    }

    /// Begin a drag on primary-button press over a node.
    ///
    /// Refused while placement mode is active, to keep click gestures
    /// unambiguous.
    pub fn begin(&mut self, store: &Schematic, node: NodeId, pointer: Point) -> Result<()> {
        if store.placement().is_active() {
            return Err(SkemaError::DragDuringPlacement);
        }
        let anchor_node = store
            .node(node)
            .ok_or(SkemaError::NodeNotFound(node))?
            .position;
        self.session = Some(DragSession {
            node,
            anchor_pointer: pointer,
            anchor_node,
        });
        Ok(())
    }

    /// Apply a pointer move. The pointer is captured globally, so this is
    /// valid even when the pointer has left the node's hit area.
    pub fn update(&mut self, store: &mut Schematic, pointer: Point) -> Result<()> {
        let session = self.session.ok_or(SkemaError::NoDragSession)?;
        let position = Point::new(
            session.anchor_node.x + (pointer.x - session.anchor_pointer.x),
            session.anchor_node.y + (pointer.y - session.anchor_pointer.y),
        );
        store.update_node_position(session.node, position)
    }

    /// End the session, returning the node that was dragged.
    pub fn end(&mut self) -> Option<NodeId> {
        self.session.take().map(|s| s.node)
    }
}
