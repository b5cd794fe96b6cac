//! Error types for the Skema schematic editor core.
//!
//! This module provides a unified error type [`SkemaError`] that covers
//! all error conditions that can occur during graph mutation, placement,
//! chain parsing, and connectivity validation.

use thiserror::Error;

use crate::graph::{ElementId, NodeId};

/// Result type alias using [`SkemaError`].
pub type Result<T> = std::result::Result<T, SkemaError>;

/// Unified error type for all Skema operations.
#[derive(Error, Debug)]
pub enum SkemaError {
    // ============ Graph Reference Errors ============
    /// Operation referenced a node id that is not in the graph
    #[error("Node {0} not found in schematic")]
    NodeNotFound(NodeId),

    /// Operation referenced an element id that is not in the graph
    #[error("Element {0} not found in schematic")]
    ElementNotFound(ElementId),

    /// A switch-only operation was applied to a different element kind
    #[error("Element '{name}' is not a switch")]
    NotASwitch { name: String },

    // ============ Placement Errors ============
    /// A placement transition was requested outside placement mode
    #[error("No placement in progress")]
    NoActivePlacement,

    /// Placement completion was requested before a start node was chosen
    #[error("Placement has no start node yet")]
    NoStartNode,

    /// Placement completion would create a zero-length self-loop
    #[error("Element endpoints must be distinct nodes")]
    SelfLoop,

    /// A drag session was requested while placement mode is active
    #[error("Dragging is disabled while placing an element")]
    DragDuringPlacement,

    /// A drag update arrived with no active drag session
    #[error("No drag session in progress")]
    NoDragSession,

    // ============ Chain Parsing Errors ============
    /// Error parsing a chain-description line
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Chain description references a start label with no traversal path
    #[error("Chain node label {label} is unreachable from label 0")]
    UnreachableLabel { label: u32 },

    // ============ Connectivity Validation ============
    /// A node has fewer than two connected elements (advisory; blocks export only)
    #[error("Node '{name}' has only {count} connection(s); every node needs at least 2")]
    UnderConnectedNode { name: String, count: usize },

    /// The schematic is empty
    #[error("Schematic has no elements")]
    EmptySchematic,

    // ============ I/O Errors ============
    /// Error reading a chain-description file
    #[error("Failed to read chain file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SkemaError {
    /// Create a parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an under-connected node error.
    pub fn under_connected(name: impl Into<String>, count: usize) -> Self {
        Self::UnderConnectedNode {
            name: name.into(),
            count,
        }
    }
}
