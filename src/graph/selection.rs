//! Selection state: one primary element or node, plus optional multi-sets.
//!
//! Primary selections are mutually exclusive. The multi-selection sets are
//! live only while multi-select mode is on; dropping back to single-select
//! clears them.

use super::types::{ElementId, NodeId};

/// Selection state for the schematic editor.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    element: Option<ElementId>,
    node: Option<NodeId>,
    multi_elements: Vec<ElementId>,
    multi_nodes: Vec<NodeId>,
    multi_mode: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The primary selected element, if any.
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    /// The primary selected node, if any.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Multi-selected element ids (empty outside multi-select mode).
    pub fn multi_elements(&self) -> &[ElementId] {
        &self.multi_elements
    }

    /// Multi-selected node ids (empty outside multi-select mode).
    pub fn multi_nodes(&self) -> &[NodeId] {
        &self.multi_nodes
    }

    /// Whether multi-select mode is active.
    pub fn multi_mode(&self) -> bool {
        self.multi_mode
    }

    /// Select an element as primary, clearing any primary node.
    pub fn select_element(&mut self, id: ElementId) {
        self.element = Some(id);
        self.node = None;
    }

    /// Select a node as primary, clearing any primary element.
    pub fn select_node(&mut self, id: NodeId) {
        self.node = Some(id);
        self.element = None;
    }

    /// Toggle an element in the multi-selection set.
    ///
    /// Only meaningful in multi-select mode; ignored otherwise.
    pub fn toggle_multi_element(&mut self, id: ElementId) {
        if !self.multi_mode {
            return;
        }
        if let Some(pos) = self.multi_elements.iter().position(|&e| e == id) {
            self.multi_elements.remove(pos);
        } else {
            self.multi_elements.push(id);
        }
    }

    /// Toggle a node in the multi-selection set.
    pub fn toggle_multi_node(&mut self, id: NodeId) {
        if !self.multi_mode {
            return;
        }
        if let Some(pos) = self.multi_nodes.iter().position(|&n| n == id) {
            self.multi_nodes.remove(pos);
        } else {
            self.multi_nodes.push(id);
        }
    }

    /// Enter or leave multi-select mode. Leaving clears the multi-sets.
    pub fn set_multi_mode(&mut self, on: bool) {
        self.multi_mode = on;
        if !on {
            self.clear_multi();
        }
    }

    /// Clear the multi-selection sets without changing the mode flag.
    pub fn clear_multi(&mut self) {
        self.multi_elements.clear();
        self.multi_nodes.clear();
    }

    /// Clear both primary selections.
    pub fn clear_primary(&mut self) {
        self.element = None;
        self.node = None;
    }

    /// Clear everything: primary selections, multi-sets and mode.
    pub fn clear(&mut self) {
        self.clear_primary();
        self.clear_multi();
        self.multi_mode = false;
    }

    /// Drop a removed element from all selection state.
    pub fn forget_element(&mut self, id: ElementId) {
        if self.element == Some(id) {
            self.element = None;
        }
        self.multi_elements.retain(|&e| e != id);
    }

    /// Drop a removed node from all selection state.
    pub fn forget_node(&mut self, id: NodeId) {
        if self.node == Some(id) {
            self.node = None;
        }
        self.multi_nodes.retain(|&n| n != id);
    }
}
