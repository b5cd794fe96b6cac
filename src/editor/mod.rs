//! Pointer-input controllers for the canvas view.
//!
//! Controllers read the graph store and write to it through its named
//! operations only; they own just the transient per-gesture state
//! (hover previews, drag anchors).

mod controller;
mod drag;

pub use controller::{
    ClickOutcome, Hover, PlacementController, NODE_SNAP_RADIUS, WIRE_SELECT_RADIUS,
    WIRE_SNAP_RADIUS,
};
pub use drag::DragController;
