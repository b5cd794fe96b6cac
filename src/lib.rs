//! # Skema Core
//!
//! The interactive core of a browser-based schematic editor for linear
//! electrical circuits.
//!
//! This library provides:
//! - An in-memory circuit graph of nodes and two-terminal elements
//!   (wires, resistors, capacitors, inductors, voltage sources, switches)
//! - The click-driven placement protocol (node/wire snapping, two-click
//!   and direction-based element creation) and drag-to-reposition
//! - Dense automatic renaming of nodes and elements after structural edits
//! - Chain generation: rebuilding a schematic from a textual description
//! - Serialization to the line format consumed by the external solver
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`graph`] - The authoritative schematic store and its invariants
//! - [`editor`] - Placement and drag controllers consumed by the canvas
//! - [`dsl`] - The two textual circuit formats (chain import, solver export)
//! - [`geometry`] - Points, compass directions, segment projection
//!
//! ## Usage
//!
//! ```
//! use skema_core::geometry::Point;
//! use skema_core::graph::{ElementType, Schematic};
//! use skema_core::editor::PlacementController;
//!
//! let mut store = Schematic::new();
//! let mut controller = PlacementController::new();
//!
//! store.start_placement(ElementType::Resistor);
//! controller.handle_click(&mut store, Point::new(100.0, 100.0)).unwrap();
//! controller.handle_click(&mut store, Point::new(300.0, 100.0)).unwrap();
//!
//! assert_eq!(store.elements()[0].name, "R1");
//! ```
//!
//! ## Concurrency model
//!
//! Single-threaded and event-driven: every store operation runs
//! synchronously to completion inside one input-event handler, including
//! the renumbering pass at the end of each structural mutation. Bulk
//! operations renumber once at the end instead of once per element.

pub mod dsl;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod graph;

// Re-export main types for convenience
pub use error::{Result, SkemaError};
pub use graph::{Schematic, validate_connectivity};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSchematic;
