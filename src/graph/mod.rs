//! Schematic graph representation and mutation.
//!
//! This module provides the in-memory model of a circuit schematic. The
//! [`Schematic`] store owns nodes, elements, selection, and placement-mode
//! state, and exposes every mutation the editor is allowed to perform.

mod chain;
mod element;
mod placement;
mod selection;
mod store;
mod types;
mod validate;

pub use element::{Element, ElementKind, ElementType, Node, ALL_ELEMENT_TYPES};
pub use placement::Placement;
pub use selection::Selection;
pub use store::{
    ChainOptions, NewElement, Schematic, CHAIN_MARGIN, DEFAULT_ELEMENT_SPAN, NODE_MERGE_RADIUS,
};
pub use types::{ElementId, NodeId, Value};
pub use validate::validate_connectivity;
