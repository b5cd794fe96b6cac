//! Parsed form of a chain-description line.

use crate::geometry::Direction;
use crate::graph::{ElementType, Value};

/// One element line from a chain description.
#[derive(Debug, Clone)]
pub struct ChainLine {
    /// Element name as written (`"R1"`)
    pub name: String,
    /// Type decoded from the name's leading letter(s)
    pub element_type: ElementType,
    /// Numeric node label of the first endpoint
    pub start_label: u32,
    /// Numeric node label of the second endpoint
    pub end_label: u32,
    /// Explicit placement direction, when the line carries one
    pub direction: Option<Direction>,
    /// Element value, when the line carries one
    pub value: Option<Value>,
    /// Switch initial state decoded from a `no`/`nc` value token
    pub is_open: Option<bool>,
    /// Source line number for error reporting (1-indexed)
    pub line: usize,
}
