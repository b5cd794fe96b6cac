//! The authoritative in-memory schematic store.
//!
//! [`Schematic`] owns the node and element collections, the selection and
//! placement-mode state, and every mutation path. Views and controllers
//! never touch the collections directly; the named operations here are the
//! only invariant-preservation mechanism the editor has.
//!
//! Invariants maintained by every operation:
//! - connectivity symmetry: an element id appears in a node's
//!   `connected_elements` exactly when that node is one of its endpoints
//! - cascade deletion: a node disappears with its last connected element
//! - dense names: node names are `0..N-1`, element names per-type `1..=K`,
//!   restored by a renumbering pass at the end of each structural mutation
//! - switch `is_open`/`value` lockstep via [`Schematic::update_switch_state`]

use std::collections::HashMap;

use crate::error::{Result, SkemaError};
use crate::geometry::{Direction, Point, ALL_DIRECTIONS};

use super::element::{Element, ElementKind, ElementType, Node};
use super::placement::Placement;
use super::selection::Selection;
use super::types::{ElementId, NodeId, Value};

/// Element length used for direction-based placement and chain layout.
pub const DEFAULT_ELEMENT_SPAN: f64 = 150.0;

/// Radius within which a computed end position reuses an existing node.
pub const NODE_MERGE_RADIUS: f64 = 5.0;

/// Margin added to chain-generated layouts after normalization, so the
/// schematic lands well inside the canvas.
pub const CHAIN_MARGIN: f64 = 300.0;

/// Request for a new element; defaults are filled in by the store.
#[derive(Debug, Clone)]
pub struct NewElement {
    pub element_type: ElementType,
    pub start: NodeId,
    pub end: NodeId,
    pub direction: Direction,
    /// Initial switch state; ignored for non-switches. Defaults to closed.
    pub is_open: Option<bool>,
}

/// Layout options for chain generation.
#[derive(Debug, Clone, Copy)]
pub struct ChainOptions {
    /// Spacing between adjacent chain nodes, in canvas pixels
    pub spacing: f64,
    /// Offset applied to the whole layout after normalization
    pub margin: f64,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_ELEMENT_SPAN,
            margin: CHAIN_MARGIN,
        }
    }
}

/// The schematic graph store.
#[derive(Debug, Default)]
pub struct Schematic {
    nodes: Vec<Node>,
    elements: Vec<Element>,
    selection: Selection,
    placement: Placement,
    next_id: u64,
}

impl Schematic {
    /// Create an empty schematic.
    pub fn new() -> Self {
        Self::default()
    }

    // ======================= Accessors =======================

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All elements, in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up an element by id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Current selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current placement-mode state.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    fn require_node(&self, id: NodeId) -> Result<&Node> {
        self.node(id).ok_or(SkemaError::NodeNotFound(id))
    }

    fn require_element(&self, id: ElementId) -> Result<&Element> {
        self.element(id).ok_or(SkemaError::ElementNotFound(id))
    }

    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    // ======================= Structural mutations =======================

    /// Append a node at `position` with the next sequential name.
    ///
    /// No collision checking against existing geometry; snapping decisions
    /// belong to the placement controller.
    pub fn add_node(&mut self, position: Point) -> NodeId {
        let id = NodeId(self.alloc_id());
        let next_name = self
            .nodes
            .iter()
            .filter_map(Node::numeric_name)
            .max()
            .map_or(0, |m| m + 1);
        self.nodes.push(Node {
            id,
            position,
            connected_elements: Vec::new(),
            name: next_name.to_string(),
        });
        id
    }

    /// Create an element with the type's defaults and the next per-type name,
    /// wiring it into both endpoint nodes.
    ///
    /// Errors if either endpoint is missing.
    pub fn add_element(&mut self, req: NewElement) -> Result<ElementId> {
        self.require_node(req.start)?;
        self.require_node(req.end)?;

        let id = ElementId(self.alloc_id());
        let next_number = self
            .elements
            .iter()
            .filter(|e| e.element_type() == req.element_type)
            .filter_map(Element::numeric_name)
            .max()
            .map_or(1, |m| m + 1);
        let name = format!("{}{}", req.element_type.prefix(), next_number);

        let (kind, value) = match req.element_type {
            ElementType::Switch => {
                let is_open = req.is_open.unwrap_or(false);
                let value = Value::Number(if is_open { 0.0 } else { 1.0 });
                (ElementKind::Switch { is_open }, value)
            }
            ElementType::Wire => (ElementKind::Wire, req.element_type.default_value()),
            ElementType::Resistor => (ElementKind::Resistor, req.element_type.default_value()),
            ElementType::Capacitor => (ElementKind::Capacitor, req.element_type.default_value()),
            ElementType::Inductor => (ElementKind::Inductor, req.element_type.default_value()),
            ElementType::Voltage => (ElementKind::Voltage, req.element_type.default_value()),
        };

        self.elements.push(Element {
            id,
            kind,
            start: req.start,
            end: req.end,
            value,
            unit: req.element_type.default_unit().to_string(),
            rotation: req.direction.rotation_degrees(),
            name,
            direction: req.direction,
        });

        // Endpoint bookkeeping; a self-loop records the id once.
        if let Some(node) = self.node_mut(req.start) {
            node.connected_elements.push(id);
        }
        if req.end != req.start {
            if let Some(node) = self.node_mut(req.end) {
                node.connected_elements.push(id);
            }
        }

        Ok(id)
    }

    /// Remove one element, cascading empty endpoints and renumbering.
    pub fn remove_element(&mut self, id: ElementId) -> Result<()> {
        self.remove_element_inner(id)?;
        self.rename_nodes();
        self.rename_elements();
        Ok(())
    }

    /// Remove everything currently selected (primary and multi), with a
    /// single renumbering pass at the end. Returns the number removed.
    pub fn remove_selected_elements(&mut self) -> usize {
        let mut ids: Vec<ElementId> = self.selection.multi_elements().to_vec();
        if let Some(primary) = self.selection.element() {
            if !ids.contains(&primary) {
                ids.push(primary);
            }
        }

        let mut removed = 0;
        for id in ids {
            if self.remove_element_inner(id).is_ok() {
                removed += 1;
            }
        }
        if removed > 0 {
            self.rename_nodes();
            self.rename_elements();
        }
        removed
    }

    /// Removal without the trailing renumbering pass, shared by the single
    /// and bulk entry points.
    fn remove_element_inner(&mut self, id: ElementId) -> Result<()> {
        let index = self
            .elements
            .iter()
            .position(|e| e.id == id)
            .ok_or(SkemaError::ElementNotFound(id))?;
        let element = self.elements.remove(index);
        self.selection.forget_element(id);

        for endpoint in [element.start, element.end] {
            let emptied = match self.node_mut(endpoint) {
                Some(node) => {
                    node.connected_elements.retain(|&e| e != id);
                    node.connected_elements.is_empty()
                }
                // Self-loop: second pass over the same already-removed node.
                None => false,
            };
            if emptied {
                self.nodes.retain(|n| n.id != endpoint);
                self.selection.forget_node(endpoint);
            }
        }
        Ok(())
    }

    /// Replace an element's value in place. Symbolic expressions are
    /// accepted unvalidated; only the solver boundary rejects them.
    pub fn update_element_value(&mut self, id: ElementId, value: Value) -> Result<()> {
        self.require_element(id)?;
        if let Some(element) = self.element_mut(id) {
            element.value = value;
        }
        Ok(())
    }

    /// Set a switch's open state and derive its value atomically.
    ///
    /// This is the single sanctioned path for changing switch state;
    /// `is_open` and `value` are never written independently.
    pub fn update_switch_state(&mut self, id: ElementId, is_open: bool) -> Result<()> {
        let element = self.require_element(id)?;
        if !matches!(element.kind, ElementKind::Switch { .. }) {
            return Err(SkemaError::NotASwitch {
                name: element.name.clone(),
            });
        }
        if let Some(element) = self.element_mut(id) {
            element.kind = ElementKind::Switch { is_open };
            element.value = Value::Number(if is_open { 0.0 } else { 1.0 });
        }
        Ok(())
    }

    /// Replace a node's position. Proximity to other geometry is an
    /// interaction concern, not a store invariant.
    pub fn update_node_position(&mut self, id: NodeId, position: Point) -> Result<()> {
        self.require_node(id)?;
        if let Some(node) = self.node_mut(id) {
            node.position = position;
        }
        Ok(())
    }

    /// Remove all nodes and elements and reset interaction state.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.elements.clear();
        self.selection.clear();
        self.placement = Placement::Idle;
    }

    // ======================= Selection operations =======================

    /// Select an element as the primary selection.
    pub fn select_element(&mut self, id: ElementId) -> Result<()> {
        self.require_element(id)?;
        self.selection.select_element(id);
        Ok(())
    }

    /// Select a node as the primary selection.
    pub fn select_node(&mut self, id: NodeId) -> Result<()> {
        self.require_node(id)?;
        self.selection.select_node(id);
        Ok(())
    }

    /// Toggle an element in the multi-selection set.
    pub fn toggle_multi_element(&mut self, id: ElementId) -> Result<()> {
        self.require_element(id)?;
        self.selection.toggle_multi_element(id);
        Ok(())
    }

    /// Toggle a node in the multi-selection set.
    pub fn toggle_multi_node(&mut self, id: NodeId) -> Result<()> {
        self.require_node(id)?;
        self.selection.toggle_multi_node(id);
        Ok(())
    }

    /// Switch between single- and multi-select mode.
    pub fn set_multi_select_mode(&mut self, on: bool) {
        self.selection.set_multi_mode(on);
    }

    /// Clear the multi-selection sets.
    pub fn clear_multi_selection(&mut self) {
        self.selection.clear_multi();
    }

    /// Clear both primary selections.
    pub fn clear_selection(&mut self) {
        self.selection.clear_primary();
    }

    // ======================= Renumbering passes =======================

    /// Repair gaps in node names so the surviving set is the dense run
    /// `0..N-1`.
    ///
    /// Only the minimal set of highest-numbered nodes moves: each name at
    /// or above N is reassigned to a missing integer below N, smallest
    /// missing first. Density is guaranteed; which physical node holds
    /// which number is not.
    pub fn rename_nodes(&mut self) {
        let n = self.nodes.len() as u32;
        let taken: Vec<u32> = self.nodes.iter().filter_map(Node::numeric_name).collect();

        let mut missing: Vec<u32> = (0..n).filter(|i| !taken.contains(i)).collect();
        missing.sort_unstable();

        let mut movers: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| self.nodes[i].numeric_name().map_or(true, |v| v >= n))
            .collect();
        movers.sort_by_key(|&i| std::cmp::Reverse(self.nodes[i].numeric_name().unwrap_or(u32::MAX)));

        for (index, name) in movers.into_iter().zip(missing) {
            self.nodes[index].name = name.to_string();
        }
    }

    /// Reassign per-type dense element names `1..=count`.
    ///
    /// Each type is renumbered independently: regroup, sort by current
    /// numeric name ascending, and hand out fresh numbers in that order.
    pub fn rename_elements(&mut self) {
        let mut by_type: HashMap<ElementType, Vec<usize>> = HashMap::new();
        for (i, element) in self.elements.iter().enumerate() {
            by_type.entry(element.element_type()).or_default().push(i);
        }

        for (element_type, mut indices) in by_type {
            indices.sort_by_key(|&i| self.elements[i].numeric_name().unwrap_or(u32::MAX));
            for (offset, index) in indices.into_iter().enumerate() {
                self.elements[index].name =
                    format!("{}{}", element_type.prefix(), offset as u32 + 1);
            }
        }
    }

    // ======================= Geometry queries =======================

    /// The closest node within `radius` of `point`, if any.
    pub fn find_node_near(&self, point: Point, radius: f64) -> Option<NodeId> {
        self.nodes
            .iter()
            .map(|n| (n.id, n.position.distance(point)))
            .filter(|&(_, d)| d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    /// The wire whose segment passes closest to `point`, within `radius`,
    /// together with the snap point on that segment.
    pub fn nearest_wire(&self, point: Point, radius: f64) -> Option<(ElementId, Point)> {
        let mut best: Option<(ElementId, Point, f64)> = None;
        for element in self.elements.iter().filter(|e| e.is_wire()) {
            let (Some(a), Some(b)) = (self.node(element.start), self.node(element.end)) else {
                continue;
            };
            let snap = crate::geometry::closest_point_on_segment(point, a.position, b.position);
            let dist = snap.distance(point);
            if dist <= radius && best.map_or(true, |(_, _, d)| dist < d) {
                best = Some((element.id, snap, dist));
            }
        }
        best.map(|(id, snap, _)| (id, snap))
    }

    /// Compass directions not already occupied by an element at `node`.
    ///
    /// An element occupies its `direction` at its start node and the
    /// mirrored direction at its end node.
    pub fn available_directions(&self, node: NodeId) -> Vec<Direction> {
        let mut occupied = Vec::new();
        for element in &self.elements {
            if element.start == node {
                occupied.push(element.direction);
            }
            if element.end == node {
                occupied.push(element.direction.opposite());
            }
        }
        ALL_DIRECTIONS
            .into_iter()
            .filter(|d| !occupied.contains(d))
            .collect()
    }

    // ======================= Placement state machine =======================

    /// Enter placement mode with the given tool. Restarting with a tool
    /// already active resets any chosen start node.
    pub fn start_placement(&mut self, tool: ElementType) {
        self.placement = Placement::AwaitingStart { tool };
    }

    /// Choose the first endpoint for the pending element.
    pub fn set_placement_start_node(&mut self, node: NodeId) -> Result<()> {
        self.require_node(node)?;
        match self.placement {
            Placement::AwaitingStart { tool } | Placement::AwaitingEnd { tool, .. } => {
                self.placement = Placement::AwaitingEnd { tool, start: node };
                Ok(())
            }
            Placement::Idle => Err(SkemaError::NoActivePlacement),
        }
    }

    /// Complete placement onto an existing node.
    ///
    /// Zero-length self-loops are rejected and the machine stays in
    /// `AwaitingEnd` so the user can pick a different endpoint.
    pub fn place_element(&mut self, end: NodeId) -> Result<ElementId> {
        let (tool, start) = match self.placement {
            Placement::AwaitingEnd { tool, start } => (tool, start),
            Placement::AwaitingStart { .. } => return Err(SkemaError::NoStartNode),
            Placement::Idle => return Err(SkemaError::NoActivePlacement),
        };
        if end == start {
            return Err(SkemaError::SelfLoop);
        }
        self.require_node(end)?;

        let direction = self.edge_direction(start, end);
        let id = self.add_element(NewElement {
            element_type: tool,
            start,
            end,
            direction,
            is_open: None,
        })?;
        self.placement = Placement::Idle;
        Ok(id)
    }

    /// Complete placement by extending one span in `direction` from the
    /// start node, reusing an existing node at the computed end position
    /// when one sits within the merge tolerance.
    pub fn place_element_in_direction(&mut self, direction: Direction) -> Result<ElementId> {
        let (tool, start) = match self.placement {
            Placement::AwaitingEnd { tool, start } => (tool, start),
            Placement::AwaitingStart { .. } => return Err(SkemaError::NoStartNode),
            Placement::Idle => return Err(SkemaError::NoActivePlacement),
        };
        let origin = self.require_node(start)?.position;
        let end_pos = direction.offset(origin, DEFAULT_ELEMENT_SPAN);

        let end = match self.find_node_near(end_pos, NODE_MERGE_RADIUS) {
            Some(existing) if existing != start => existing,
            _ => self.add_node(end_pos),
        };

        let id = self.add_element(NewElement {
            element_type: tool,
            start,
            end,
            direction,
            is_open: None,
        })?;
        self.placement = Placement::Idle;
        Ok(id)
    }

    /// Abandon any in-progress placement without touching the graph.
    pub fn cancel_placement(&mut self) {
        self.placement = Placement::Idle;
    }

    /// Dominant axis from `from` to `to`, used to record the direction of
    /// elements placed by the two-click protocol.
    fn edge_direction(&self, from: NodeId, to: NodeId) -> Direction {
        let (Some(a), Some(b)) = (self.node(from), self.node(to)) else {
            return Direction::Right;
        };
        let dx = b.position.x - a.position.x;
        let dy = b.position.y - a.position.y;
        if dx.abs() >= dy.abs() {
            if dx >= 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy >= 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_wire(store: &mut Schematic) -> (NodeId, NodeId, ElementId) {
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(200.0, 0.0));
        let w = store
            .add_element(NewElement {
                element_type: ElementType::Wire,
                start: a,
                end: b,
                direction: Direction::Right,
                is_open: None,
            })
            .unwrap();
        (a, b, w)
    }

    fn add_typed(store: &mut Schematic, ty: ElementType, a: NodeId, b: NodeId) -> ElementId {
        store
            .add_element(NewElement {
                element_type: ty,
                start: a,
                end: b,
                direction: Direction::Right,
                is_open: None,
            })
            .unwrap()
    }

    #[test]
    fn test_add_node_sequential_names() {
        let mut store = Schematic::new();
        store.add_node(Point::new(0.0, 0.0));
        store.add_node(Point::new(1.0, 0.0));
        store.add_node(Point::new(2.0, 0.0));
        let names: Vec<&str> = store.nodes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_add_element_wires_endpoints() {
        let mut store = Schematic::new();
        let (a, b, w) = two_node_wire(&mut store);
        assert_eq!(store.node(a).unwrap().connected_elements, vec![w]);
        assert_eq!(store.node(b).unwrap().connected_elements, vec![w]);
        assert_eq!(store.element(w).unwrap().name, "W1");
    }

    #[test]
    fn test_add_element_missing_node_errors() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let err = store
            .add_element(NewElement {
                element_type: ElementType::Resistor,
                start: a,
                end: NodeId(999),
                direction: Direction::Right,
                is_open: None,
            })
            .unwrap_err();
        assert!(matches!(err, SkemaError::NodeNotFound(NodeId(999))));
        // Nothing half-committed.
        assert!(store.elements().is_empty());
        assert!(store.node(a).unwrap().connected_elements.is_empty());
    }

    #[test]
    fn test_connectivity_symmetry_after_mutations() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(100.0, 0.0));
        let c = store.add_node(Point::new(200.0, 0.0));
        let r = add_typed(&mut store, ElementType::Resistor, a, b);
        add_typed(&mut store, ElementType::Capacitor, b, c);
        store.remove_element(r).unwrap();

        for node in store.nodes() {
            for &eid in &node.connected_elements {
                let element = store.element(eid).expect("dangling element id");
                assert!(element.touches(node.id));
            }
        }
        for element in store.elements() {
            for endpoint in [element.start, element.end] {
                let node = store.node(endpoint).expect("dangling node id");
                assert!(node.connected_elements.contains(&element.id));
            }
        }
    }

    #[test]
    fn test_cascade_deletes_orphaned_nodes() {
        let mut store = Schematic::new();
        let (_, b, w) = two_node_wire(&mut store);
        let c = store.add_node(Point::new(400.0, 0.0));
        add_typed(&mut store, ElementType::Resistor, b, c);

        store.remove_element(w).unwrap();
        // The wire's exclusive endpoint is gone; the shared one survives.
        assert_eq!(store.nodes().len(), 2);
        assert!(store.node(b).is_some());
    }

    #[test]
    fn test_node_density_after_removals() {
        let mut store = Schematic::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(store.add_node(Point::new(i as f64 * 100.0, 0.0)));
        }
        let mut elements = Vec::new();
        for pair in ids.windows(2) {
            elements.push(add_typed(&mut store, ElementType::Wire, pair[0], pair[1]));
        }
        // Dropping the first wire orphans node 0.
        store.remove_element(elements[0]).unwrap();

        let mut names: Vec<u32> = store
            .nodes()
            .iter()
            .map(|n| n.numeric_name().unwrap())
            .collect();
        names.sort_unstable();
        assert_eq!(names, (0..store.nodes().len() as u32).collect::<Vec<_>>());
    }

    #[test]
    fn test_rename_nodes_moves_minimal_set() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0)); // "0"
        let b = store.add_node(Point::new(1.0, 0.0)); // "1"
        let c = store.add_node(Point::new(2.0, 0.0)); // "2"
        store.node_mut(b).unwrap().name = "5".to_string();
        store.rename_nodes();
        // "0" and "2" keep their names; only the gap-filler moves.
        assert_eq!(store.node(a).unwrap().name, "0");
        assert_eq!(store.node(c).unwrap().name, "2");
        assert_eq!(store.node(b).unwrap().name, "1");
    }

    #[test]
    fn test_rename_nodes_idempotent() {
        let mut store = Schematic::new();
        for i in 0..4 {
            store.add_node(Point::new(i as f64, 0.0));
        }
        store.rename_nodes();
        let before: Vec<String> = store.nodes().iter().map(|n| n.name.clone()).collect();
        store.rename_nodes();
        let after: Vec<String> = store.nodes().iter().map(|n| n.name.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_bulk_delete_renumbers_once_dense() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(100.0, 0.0));
        let c = store.add_node(Point::new(200.0, 0.0));
        let d = store.add_node(Point::new(300.0, 0.0));
        add_typed(&mut store, ElementType::Resistor, a, b);
        let r2 = add_typed(&mut store, ElementType::Resistor, b, c);
        add_typed(&mut store, ElementType::Resistor, c, d);

        store.remove_element(r2).unwrap();

        let mut names: Vec<&str> = store.elements().iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        // Former R3 becomes R2; no gap survives.
        assert_eq!(names, vec!["R1", "R2"]);
    }

    #[test]
    fn test_per_type_density_independent() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(100.0, 0.0));
        let c = store.add_node(Point::new(200.0, 0.0));
        let r1 = add_typed(&mut store, ElementType::Resistor, a, b);
        add_typed(&mut store, ElementType::Capacitor, b, c);
        add_typed(&mut store, ElementType::Resistor, a, c);
        add_typed(&mut store, ElementType::Capacitor, a, c);

        store.remove_element(r1).unwrap();

        let resistors: Vec<&str> = store
            .elements()
            .iter()
            .filter(|e| e.element_type() == ElementType::Resistor)
            .map(|e| e.name.as_str())
            .collect();
        let capacitors: Vec<&str> = store
            .elements()
            .iter()
            .filter(|e| e.element_type() == ElementType::Capacitor)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(resistors, vec!["R1"]);
        assert_eq!(capacitors, vec!["C1", "C2"]);
    }

    #[test]
    fn test_remove_selected_elements_union() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(100.0, 0.0));
        let c = store.add_node(Point::new(200.0, 0.0));
        let r1 = add_typed(&mut store, ElementType::Resistor, a, b);
        let r2 = add_typed(&mut store, ElementType::Resistor, b, c);
        let r3 = add_typed(&mut store, ElementType::Resistor, a, c);

        store.set_multi_select_mode(true);
        store.toggle_multi_element(r1).unwrap();
        store.select_element(r2).unwrap();
        let removed = store.remove_selected_elements();

        assert_eq!(removed, 2);
        assert_eq!(store.elements().len(), 1);
        assert_eq!(store.element(r3).unwrap().name, "R1");
        assert_eq!(store.selection().element(), None);
        assert!(store.selection().multi_elements().is_empty());
    }

    #[test]
    fn test_switch_state_lockstep() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(100.0, 0.0));
        let sw = store
            .add_element(NewElement {
                element_type: ElementType::Switch,
                start: a,
                end: b,
                direction: Direction::Right,
                is_open: Some(true),
            })
            .unwrap();
        assert_eq!(store.element(sw).unwrap().value, Value::Number(0.0));

        store.update_switch_state(sw, false).unwrap();
        let element = store.element(sw).unwrap();
        assert_eq!(element.switch_is_open(), Some(false));
        assert_eq!(element.value, Value::Number(1.0));

        store.update_switch_state(sw, true).unwrap();
        let element = store.element(sw).unwrap();
        assert_eq!(element.switch_is_open(), Some(true));
        assert_eq!(element.value, Value::Number(0.0));
    }

    #[test]
    fn test_switch_update_rejects_other_kinds() {
        let mut store = Schematic::new();
        let (_, _, w) = two_node_wire(&mut store);
        let err = store.update_switch_state(w, true).unwrap_err();
        assert!(matches!(err, SkemaError::NotASwitch { .. }));
    }

    #[test]
    fn test_update_element_value_accepts_expressions() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(100.0, 0.0));
        let r = add_typed(&mut store, ElementType::Resistor, a, b);
        store.update_element_value(r, Value::Expr("j5".into())).unwrap();
        assert_eq!(store.element(r).unwrap().value, Value::Expr("j5".into()));
    }

    #[test]
    fn test_selection_exclusivity_through_store() {
        let mut store = Schematic::new();
        let (a, _, w) = two_node_wire(&mut store);
        store.select_element(w).unwrap();
        store.select_node(a).unwrap();
        assert_eq!(store.selection().element(), None);
        assert_eq!(store.selection().node(), Some(a));
    }

    #[test]
    fn test_find_node_near_picks_closest() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(10.0, 0.0));
        assert_eq!(store.find_node_near(Point::new(3.0, 0.0), 15.0), Some(a));
        assert_eq!(store.find_node_near(Point::new(8.0, 0.0), 15.0), Some(b));
        assert_eq!(store.find_node_near(Point::new(500.0, 0.0), 15.0), None);
    }

    #[test]
    fn test_nearest_wire_within_threshold_only() {
        let mut store = Schematic::new();
        let (_, _, w) = two_node_wire(&mut store);
        let hit = store.nearest_wire(Point::new(100.0, 8.0), 10.0);
        let (id, snap) = hit.unwrap();
        assert_eq!(id, w);
        assert!((snap.x - 100.0).abs() < 1e-9);
        assert!((snap.y - 0.0).abs() < 1e-9);
        assert!(store.nearest_wire(Point::new(100.0, 30.0), 10.0).is_none());
    }

    #[test]
    fn test_available_directions_excludes_occupied() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(150.0, 0.0));
        add_typed(&mut store, ElementType::Wire, a, b);

        let at_start = store.available_directions(a);
        assert!(!at_start.contains(&Direction::Right));
        assert_eq!(at_start.len(), 3);

        // The end node sees the mirrored direction as occupied.
        let at_end = store.available_directions(b);
        assert!(!at_end.contains(&Direction::Left));
        assert_eq!(at_end.len(), 3);
    }

    #[test]
    fn test_placement_two_click_flow() {
        let mut store = Schematic::new();
        store.start_placement(ElementType::Wire);
        assert!(store.placement().is_active());

        let a = store.add_node(Point::new(100.0, 100.0));
        store.set_placement_start_node(a).unwrap();
        assert_eq!(store.placement().start_node(), Some(a));

        let b = store.add_node(Point::new(300.0, 100.0));
        let w = store.place_element(b).unwrap();
        assert_eq!(store.placement(), Placement::Idle);
        let wire = store.element(w).unwrap();
        assert_eq!((wire.start, wire.end), (a, b));
        assert_eq!(wire.direction, Direction::Right);
    }

    #[test]
    fn test_placement_rejects_self_loop_and_stays_armed() {
        let mut store = Schematic::new();
        store.start_placement(ElementType::Resistor);
        let a = store.add_node(Point::new(0.0, 0.0));
        store.set_placement_start_node(a).unwrap();

        let err = store.place_element(a).unwrap_err();
        assert!(matches!(err, SkemaError::SelfLoop));
        assert_eq!(store.placement().start_node(), Some(a));

        let b = store.add_node(Point::new(100.0, 0.0));
        store.place_element(b).unwrap();
        assert_eq!(store.placement(), Placement::Idle);
    }

    #[test]
    fn test_placement_in_direction_creates_end_node() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(500.0, 500.0));
        store.start_placement(ElementType::Inductor);
        store.set_placement_start_node(a).unwrap();
        let l = store.place_element_in_direction(Direction::Down).unwrap();

        let element = store.element(l).unwrap();
        let end = store.node(element.end).unwrap();
        assert_eq!(end.position, Point::new(500.0, 500.0 + DEFAULT_ELEMENT_SPAN));
        assert_eq!(element.rotation, 90.0);
        assert_eq!(store.placement(), Placement::Idle);
    }

    #[test]
    fn test_placement_in_direction_reuses_nearby_node() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        // Sits 2px off the computed end position, inside the merge radius.
        let near = store.add_node(Point::new(DEFAULT_ELEMENT_SPAN + 2.0, 0.0));
        store.start_placement(ElementType::Resistor);
        store.set_placement_start_node(a).unwrap();
        let r = store.place_element_in_direction(Direction::Right).unwrap();

        assert_eq!(store.element(r).unwrap().end, near);
        assert_eq!(store.nodes().len(), 2);
    }

    #[test]
    fn test_cancel_placement_discards_start_without_side_effects() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        store.start_placement(ElementType::Voltage);
        store.set_placement_start_node(a).unwrap();
        store.cancel_placement();
        assert_eq!(store.placement(), Placement::Idle);
        assert_eq!(store.nodes().len(), 1);
        assert!(store.elements().is_empty());
    }

    #[test]
    fn test_placement_errors_outside_mode() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        assert!(matches!(
            store.set_placement_start_node(a).unwrap_err(),
            SkemaError::NoActivePlacement
        ));
        assert!(matches!(
            store.place_element(a).unwrap_err(),
            SkemaError::NoActivePlacement
        ));
        store.start_placement(ElementType::Wire);
        assert!(matches!(
            store.place_element(a).unwrap_err(),
            SkemaError::NoStartNode
        ));
    }

    #[test]
    fn test_remove_element_missing_is_inspectable() {
        let mut store = Schematic::new();
        let err = store.remove_element(ElementId(42)).unwrap_err();
        assert!(matches!(err, SkemaError::ElementNotFound(ElementId(42))));
    }
}
