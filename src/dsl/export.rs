//! Solver-boundary serialization of a schematic.

use crate::error::{Result, SkemaError};
use crate::graph::{ElementKind, Schematic};

/// Serialize the schematic into the solver's line format, one element per
/// line: `"<ElementName> <StartNodeName> <EndNodeName>[ <value>];"`.
///
/// Wires carry no value. Switches emit `no`/`nc` plus a `0`
/// initial-condition marker. Node display names (not internal ids) go on
/// the wire, since the solver only sees the textual description.
pub fn export(schematic: &Schematic) -> Result<String> {
    let mut out = String::new();
    for element in schematic.elements() {
        let start = schematic
            .node(element.start)
            .ok_or(SkemaError::NodeNotFound(element.start))?;
        let end = schematic
            .node(element.end)
            .ok_or(SkemaError::NodeNotFound(element.end))?;

        match element.kind {
            ElementKind::Wire => {
                out.push_str(&format!("{} {} {};\n", element.name, start.name, end.name));
            }
            ElementKind::Switch { is_open } => {
                let state = if is_open { "no" } else { "nc" };
                out.push_str(&format!(
                    "{} {} {} {} 0;\n",
                    element.name, start.name, end.name, state
                ));
            }
            _ => {
                out.push_str(&format!(
                    "{} {} {} {};\n",
                    element.name, start.name, end.name, element.value
                ));
            }
        }
    }
    Ok(out)
}
