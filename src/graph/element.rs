//! Node and element definitions for the schematic graph.
//!
//! Elements are two-terminal components represented as a shared base shape
//! plus a tagged kind; the switch is the only kind carrying extra state
//! (`is_open`), and that state is mutated exclusively through
//! `Schematic::update_switch_state` to keep it consistent with `value`.

use crate::geometry::{Direction, Point};

use super::types::{ElementId, NodeId, Value};

/// A connection point in the schematic.
#[derive(Debug, Clone)]
pub struct Node {
    /// Stable id, never reused
    pub id: NodeId,
    /// Position in canvas pixel space
    pub position: Point,
    /// Ids of elements terminating at this node, in insertion order
    pub connected_elements: Vec<ElementId>,
    /// Display label: a dense non-negative integer rendered as a string
    pub name: String,
}

impl Node {
    /// The node's name parsed back to its integer form.
    ///
    /// Names are always written by the store as decimal integers; a parse
    /// failure would indicate a store bug.
    pub fn numeric_name(&self) -> Option<u32> {
        self.name.parse().ok()
    }
}

/// The tool palette of element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Wire,
    Resistor,
    Capacitor,
    Inductor,
    Voltage,
    Switch,
}

/// All element types, in prefix-table order.
pub const ALL_ELEMENT_TYPES: [ElementType; 6] = [
    ElementType::Wire,
    ElementType::Resistor,
    ElementType::Capacitor,
    ElementType::Inductor,
    ElementType::Voltage,
    ElementType::Switch,
];

impl ElementType {
    /// Display-name prefix for this type (`R1`, `C2`, `SW1`, ...).
    pub fn prefix(&self) -> &'static str {
        match self {
            ElementType::Wire => "W",
            ElementType::Resistor => "R",
            ElementType::Capacitor => "C",
            ElementType::Inductor => "L",
            ElementType::Voltage => "V",
            ElementType::Switch => "SW",
        }
    }

    /// Parse an element type from the first letter(s) of a chain-description
    /// name, case-insensitive.
    pub fn from_code(name: &str) -> Option<Self> {
        match name.chars().next()?.to_ascii_uppercase() {
            'R' => Some(Self::Resistor),
            'C' => Some(Self::Capacitor),
            'L' => Some(Self::Inductor),
            'V' => Some(Self::Voltage),
            'W' => Some(Self::Wire),
            'S' => Some(Self::Switch),
            _ => None,
        }
    }

    /// Default value assigned at creation.
    pub fn default_value(&self) -> Value {
        match self {
            // Open switches get 0 via update_switch_state; the default is closed.
            ElementType::Wire => Value::Number(0.0),
            _ => Value::Number(1.0),
        }
    }

    /// Default display unit.
    pub fn default_unit(&self) -> &'static str {
        match self {
            ElementType::Wire => "",
            ElementType::Resistor => "Ohm",
            ElementType::Capacitor => "F",
            ElementType::Inductor => "H",
            ElementType::Voltage => "V",
            ElementType::Switch => "",
        }
    }
}

/// Kind-specific element payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Wire,
    Resistor,
    Capacitor,
    Inductor,
    Voltage,
    /// `is_open == true` means the switch is OFF. Kept in lockstep with
    /// the element's `value` (open = 0, closed = 1).
    Switch { is_open: bool },
}

impl ElementKind {
    /// The payload-free type tag for this kind.
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Wire => ElementType::Wire,
            ElementKind::Resistor => ElementType::Resistor,
            ElementKind::Capacitor => ElementType::Capacitor,
            ElementKind::Inductor => ElementType::Inductor,
            ElementKind::Voltage => ElementType::Voltage,
            ElementKind::Switch { .. } => ElementType::Switch,
        }
    }
}

/// A two-terminal element connecting exactly two nodes.
#[derive(Debug, Clone)]
pub struct Element {
    /// Stable id, never reused
    pub id: ElementId,
    /// Type tag plus kind-specific state
    pub kind: ElementKind,
    /// First endpoint
    pub start: NodeId,
    /// Second endpoint
    pub end: NodeId,
    /// Component value; symbolic expressions pass through unvalidated
    pub value: Value,
    /// Display unit
    pub unit: String,
    /// Rendering rotation in degrees, derived from `direction`
    pub rotation: f64,
    /// Display label: type prefix + per-type dense integer from 1
    pub name: String,
    /// Axis the element occupies, relative to its start node
    pub direction: Direction,
}

impl Element {
    /// The element's type tag.
    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Whether this element is a plain wire.
    pub fn is_wire(&self) -> bool {
        matches!(self.kind, ElementKind::Wire)
    }

    /// Switch open state, if this element is a switch.
    pub fn switch_is_open(&self) -> Option<bool> {
        match self.kind {
            ElementKind::Switch { is_open } => Some(is_open),
            _ => None,
        }
    }

    /// True if `node` is one of this element's endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.start == node || self.end == node
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint.
    pub fn other_endpoint(&self, node: NodeId) -> Option<NodeId> {
        if self.start == node {
            Some(self.end)
        } else if self.end == node {
            Some(self.start)
        } else {
            None
        }
    }

    /// The numeric part of the element's name (`"R12"` → `12`).
    pub fn numeric_name(&self) -> Option<u32> {
        self.name
            .strip_prefix(self.element_type().prefix())?
            .parse()
            .ok()
    }
}
