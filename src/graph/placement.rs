//! Placement-mode state machine.
//!
//! Two-click element creation runs through four states:
//!
//! ```text
//! Idle --start_placement--> AwaitingStart --set start node--> AwaitingEnd
//!   ^                                                              |
//!   +------------- place / place_in_direction / cancel ------------+
//! ```
//!
//! The machine only tracks mode; the graph mutations it triggers live in
//! [`super::store::Schematic`].

use super::element::ElementType;
use super::types::NodeId;

/// Current placement-mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// No tool selected.
    #[default]
    Idle,
    /// Tool selected, waiting for the first endpoint.
    AwaitingStart { tool: ElementType },
    /// First endpoint chosen, waiting for the second.
    AwaitingEnd { tool: ElementType, start: NodeId },
}

impl Placement {
    /// Whether placement mode is active at all.
    pub fn is_active(&self) -> bool {
        !matches!(self, Placement::Idle)
    }

    /// The selected tool, if placement is active.
    pub fn tool(&self) -> Option<ElementType> {
        match self {
            Placement::Idle => None,
            Placement::AwaitingStart { tool } | Placement::AwaitingEnd { tool, .. } => Some(*tool),
        }
    }

    /// The chosen start node, if one has been picked.
    pub fn start_node(&self) -> Option<NodeId> {
        match self {
            Placement::AwaitingEnd { start, .. } => Some(*start),
            _ => None,
        }
    }
}
