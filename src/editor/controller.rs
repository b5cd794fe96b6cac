//! Placement controller: click and hover routing for the canvas.
//!
//! Interprets pointer input against the graph store: whether a click hits
//! an existing node, snaps onto a wire (splitting it), or opens a fresh
//! node in empty space, and drives the two-click placement protocol from
//! there. The controller holds only hover/preview state; everything
//! durable lives in [`Schematic`].

use crate::error::{Result, SkemaError};
use crate::geometry::Point;
use crate::graph::{ElementId, ElementType, NewElement, NodeId, Schematic};

/// Radius for selecting a wire with a click while not placing.
pub const WIRE_SELECT_RADIUS: f64 = 10.0;

/// Radius for snapping a placement click onto an existing node.
/// Nodes take priority over wires and empty space, so this is looser.
pub const NODE_SNAP_RADIUS: f64 = 15.0;

/// Radius for snapping a placement click onto a wire segment.
pub const WIRE_SNAP_RADIUS: f64 = 15.0;

/// What the canvas should preview under the pointer. At most one variant
/// is active per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Hover {
    /// Nothing highlighted.
    #[default]
    None,
    /// An existing node is under the pointer (placement active).
    Node(NodeId),
    /// The pointer is within snap range of a wire; `point` is where a new
    /// node would be inserted.
    WireSnap { wire: ElementId, point: Point },
    /// Free-floating preview of the node a click would create.
    TempNode(Point),
    /// A wire is under the pointer (placement inactive, selection preview).
    Wire(ElementId),
}

/// Result of routing a canvas click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// A wire was selected.
    SelectedWire(ElementId),
    /// Click in empty space cleared the selection.
    ClearedSelection,
    /// Placement advanced: this node is now the pending start.
    StartChosen(NodeId),
    /// Placement completed with this element.
    Placed(ElementId),
}

/// Click/hover routing surface consumed by the canvas view.
#[derive(Debug, Default)]
pub struct PlacementController {
    hover: Hover,
}

impl PlacementController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hover/preview state.
    pub fn hover(&self) -> Hover {
        self.hover
    }

    /// Route a primary-button canvas click.
    ///
    /// Priority while placing: existing node, then wire snap (splitting
    /// the wire around a new node), then a fresh node at the click
    /// position. While idle, a click selects a nearby wire or clears the
    /// selection.
    pub fn handle_click(&mut self, store: &mut Schematic, pos: Point) -> Result<ClickOutcome> {
        self.hover = Hover::None;

        if !store.placement().is_active() {
            return match store.nearest_wire(pos, WIRE_SELECT_RADIUS) {
                Some((wire, _)) => {
                    store.select_element(wire)?;
                    Ok(ClickOutcome::SelectedWire(wire))
                }
                None => {
                    store.clear_selection();
                    Ok(ClickOutcome::ClearedSelection)
                }
            };
        }

        let node = match store.find_node_near(pos, NODE_SNAP_RADIUS) {
            Some(node) => node,
            None => match store.nearest_wire(pos, WIRE_SNAP_RADIUS) {
                Some((wire, snap)) => split_wire_at(store, wire, snap)?,
                None => store.add_node(pos),
            },
        };

        if store.placement().start_node().is_some() {
            let placed = store.place_element(node)?;
            Ok(ClickOutcome::Placed(placed))
        } else {
            store.set_placement_start_node(node)?;
            Ok(ClickOutcome::StartChosen(node))
        }
    }

    /// Recompute the hover preview for a pointer position.
    pub fn update_hover(&mut self, store: &Schematic, pos: Point) {
        self.hover = if store.placement().is_active() {
            if let Some(node) = store.find_node_near(pos, NODE_SNAP_RADIUS) {
                Hover::Node(node)
            } else if let Some((wire, point)) = store.nearest_wire(pos, WIRE_SNAP_RADIUS) {
                Hover::WireSnap { wire, point }
            } else {
                Hover::TempNode(pos)
            }
        } else {
            match store.nearest_wire(pos, WIRE_SELECT_RADIUS) {
                Some((wire, _)) => Hover::Wire(wire),
                None => Hover::None,
            }
        };
    }

    /// Tool-palette click: selecting the already-active tool toggles
    /// placement off, anything else (re)starts it.
    pub fn handle_tool_click(&mut self, store: &mut Schematic, tool: ElementType) {
        if store.placement().tool() == Some(tool) {
            store.cancel_placement();
            self.hover = Hover::None;
        } else {
            store.start_placement(tool);
        }
    }

    /// Right-click cancels any in-progress placement and clears previews.
    /// (The view suppresses the context menu.)
    pub fn handle_right_click(&mut self, store: &mut Schematic) {
        if store.placement().is_active() {
            store.cancel_placement();
        }
        self.hover = Hover::None;
    }

    /// Delete/Backspace removes the selected element(s). Returns how many
    /// were removed. (The view suppresses the browser default for the key.)
    pub fn handle_delete_key(&mut self, store: &mut Schematic) -> usize {
        store.remove_selected_elements()
    }
}

/// Materialize a node at `point` on `wire`, replacing the wire with two
/// segments that share the new node.
///
/// The replacement wires are added before the original is removed, so the
/// endpoints are never transiently orphaned (which would cascade-delete
/// them).
fn split_wire_at(store: &mut Schematic, wire: ElementId, point: Point) -> Result<NodeId> {
    let (start, end, direction) = {
        let element = store
            .element(wire)
            .ok_or(SkemaError::ElementNotFound(wire))?;
        (element.start, element.end, element.direction)
    };

    let mid = store.add_node(point);
    store.add_element(NewElement {
        element_type: ElementType::Wire,
        start,
        end: mid,
        direction,
        is_open: None,
    })?;
    store.add_element(NewElement {
        element_type: ElementType::Wire,
        start: mid,
        end,
        direction,
        is_open: None,
    })?;
    store.remove_element(wire)?;
    Ok(mid)
}
