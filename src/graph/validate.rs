//! Connectivity validation.
//!
//! Advisory only: a failing check blocks submission to the solver, but the
//! schematic stays fully editable.

use crate::error::{Result, SkemaError};

use super::store::Schematic;

/// Validate a schematic before solver export.
///
/// Checks:
/// - the schematic has at least one element
/// - every node has at least 2 connected elements
pub fn validate_connectivity(schematic: &Schematic) -> Result<()> {
    if schematic.elements().is_empty() {
        return Err(SkemaError::EmptySchematic);
    }

    for node in schematic.nodes() {
        let count = node.connected_elements.len();
        if count < 2 {
            return Err(SkemaError::under_connected(&node.name, count));
        }
    }

    Ok(())
}
