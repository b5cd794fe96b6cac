//! Chain generation: rebuild the whole schematic from a textual description.
//!
//! Layout is coordinate assignment by depth-first discovery, not a
//! force-directed pass: each newly reached label sits one spacing unit from
//! its parent in the connecting edge's direction (mirrored when the edge is
//! walked backward). Deterministic; graphs with cycles or diamonds can
//! produce overlapping nodes, which is acceptable for the simple
//! chain/ladder topologies the generator emits.

use std::collections::HashMap;

use crate::dsl::{self, ChainLine};
use crate::error::{Result, SkemaError};
use crate::geometry::{Direction, Point};

use super::store::{ChainOptions, NewElement, Schematic};
use super::types::NodeId;

impl Schematic {
    /// Clear the graph and rebuild it from a chain description.
    ///
    /// Parsing and layout run before anything is cleared, so a bad
    /// description leaves the current schematic untouched.
    pub fn generate_chain(&mut self, text: &str, options: ChainOptions) -> Result<()> {
        let lines = dsl::parse_chain(text)?;
        let positions = layout_labels(&lines, options)?;

        self.clear();

        let mut labels: Vec<u32> = positions.keys().copied().collect();
        labels.sort_unstable();

        let mut label_nodes: HashMap<u32, NodeId> = HashMap::new();
        for label in labels {
            label_nodes.insert(label, self.add_node(positions[&label]));
        }

        for line in &lines {
            let id = self.add_element(NewElement {
                element_type: line.element_type,
                start: label_nodes[&line.start_label],
                end: label_nodes[&line.end_label],
                direction: line.direction.unwrap_or(Direction::Right),
                is_open: line.is_open,
            })?;
            if let Some(value) = line.value.clone() {
                self.update_element_value(id, value)?;
            }
        }
        Ok(())
    }
}

/// Assign a canvas position to every node label by DFS from label 0
/// (or the smallest label when 0 is absent), then normalize so all
/// coordinates are non-negative plus the margin.
fn layout_labels(lines: &[ChainLine], options: ChainOptions) -> Result<HashMap<u32, Point>> {
    let mut adjacency: HashMap<u32, Vec<(u32, Direction)>> = HashMap::new();
    for line in lines {
        let direction = line.direction.unwrap_or(Direction::Right);
        adjacency
            .entry(line.start_label)
            .or_default()
            .push((line.end_label, direction));
        adjacency
            .entry(line.end_label)
            .or_default()
            .push((line.start_label, direction.opposite()));
    }

    let mut positions: HashMap<u32, Point> = HashMap::new();
    if adjacency.is_empty() {
        return Ok(positions);
    }

    let root = if adjacency.contains_key(&0) {
        0
    } else {
        *adjacency.keys().min().unwrap_or(&0)
    };

    let mut stack = vec![root];
    positions.insert(root, Point::new(0.0, 0.0));
    while let Some(label) = stack.pop() {
        let origin = positions[&label];
        if let Some(neighbors) = adjacency.get(&label) {
            for &(next, direction) in neighbors {
                if !positions.contains_key(&next) {
                    positions.insert(next, direction.offset(origin, options.spacing));
                    stack.push(next);
                }
            }
        }
    }

    for &label in adjacency.keys() {
        if !positions.contains_key(&label) {
            return Err(SkemaError::UnreachableLabel { label });
        }
    }

    let min_x = positions.values().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = positions.values().map(|p| p.y).fold(f64::INFINITY, f64::min);
    for position in positions.values_mut() {
        position.x = position.x - min_x + options.margin;
        position.y = position.y - min_y + options.margin;
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ElementType;

    #[test]
    fn test_chain_generation_scenario() {
        let mut store = Schematic::new();
        let options = ChainOptions::default();
        store
            .generate_chain("R1 0 1; right\nC1 1 2; down", options)
            .unwrap();

        assert_eq!(store.nodes().len(), 3);
        assert_eq!(store.elements().len(), 2);

        let node = |name: &str| {
            store
                .nodes()
                .iter()
                .find(|n| n.name == name)
                .unwrap_or_else(|| panic!("no node named {}", name))
        };
        let n0 = node("0");
        let n1 = node("1");
        let n2 = node("2");

        assert_eq!(n1.position.x, n0.position.x + options.spacing);
        assert_eq!(n1.position.y, n0.position.y);
        assert_eq!(n2.position.x, n1.position.x);
        assert_eq!(n2.position.y, n1.position.y + options.spacing);

        let types: Vec<ElementType> = store.elements().iter().map(|e| e.element_type()).collect();
        assert_eq!(types, vec![ElementType::Resistor, ElementType::Capacitor]);
    }

    #[test]
    fn test_chain_normalization_keeps_margin() {
        let mut store = Schematic::new();
        let options = ChainOptions::default();
        // Walks left then up, so raw coordinates go negative before
        // normalization pulls everything back.
        store
            .generate_chain("R1 0 1; left\nL1 1 2; up", options)
            .unwrap();
        for node in store.nodes() {
            assert!(node.position.x >= options.margin);
            assert!(node.position.y >= options.margin);
        }
        let min_x = store
            .nodes()
            .iter()
            .map(|n| n.position.x)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(min_x, options.margin);
    }

    #[test]
    fn test_chain_replaces_existing_graph() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(100.0, 0.0));
        store
            .add_element(NewElement {
                element_type: ElementType::Voltage,
                start: a,
                end: b,
                direction: Direction::Right,
                is_open: None,
            })
            .unwrap();

        store
            .generate_chain("W1 0 1", ChainOptions::default())
            .unwrap();
        assert_eq!(store.nodes().len(), 2);
        assert_eq!(store.elements().len(), 1);
        assert!(store.elements()[0].is_wire());
    }

    #[test]
    fn test_chain_backward_edge_mirrors_direction() {
        let mut store = Schematic::new();
        let options = ChainOptions::default();
        // Second line points from 2 to 1; the walk discovers 2 from 1, so
        // label 2 lands one spacing *left* of label 1 (mirror of right).
        store
            .generate_chain("R1 0 1; right\nC1 2 1; right", options)
            .unwrap();
        let pos = |name: &str| {
            store
                .nodes()
                .iter()
                .find(|n| n.name == name)
                .unwrap()
                .position
        };
        assert_eq!(pos("2").x, pos("1").x - options.spacing);
        assert_eq!(pos("2").y, pos("1").y);
    }

    #[test]
    fn test_chain_disconnected_label_errors_without_clearing() {
        let mut store = Schematic::new();
        let a = store.add_node(Point::new(0.0, 0.0));
        let b = store.add_node(Point::new(100.0, 0.0));
        store
            .add_element(NewElement {
                element_type: ElementType::Wire,
                start: a,
                end: b,
                direction: Direction::Right,
                is_open: None,
            })
            .unwrap();

        let err = store
            .generate_chain("R1 0 1\nC1 5 6", ChainOptions::default())
            .unwrap_err();
        assert!(matches!(err, SkemaError::UnreachableLabel { .. }));
        // Atomicity: the old graph survives a failed rebuild.
        assert_eq!(store.nodes().len(), 2);
        assert_eq!(store.elements().len(), 1);
    }

    #[test]
    fn test_chain_switch_state_carried() {
        let mut store = Schematic::new();
        store
            .generate_chain("SW1 0 1 no", ChainOptions::default())
            .unwrap();
        let sw = &store.elements()[0];
        assert_eq!(sw.switch_is_open(), Some(true));
        assert_eq!(sw.value, crate::graph::Value::Number(0.0));
    }
}
