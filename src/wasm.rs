//! WASM bindings for Skema Core.
//!
//! This module provides JavaScript-friendly bindings so a browser canvas
//! can drive the editor core directly: pointer events in, store state and
//! solver text out.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSchematic } from 'skema_core';
//!
//! await init();
//!
//! const editor = new WasmSchematic();
//! editor.select_tool('resistor');
//! editor.click(100, 100);
//! editor.click(300, 100);
//! const solverText = editor.export_circuit();
//! ```

use wasm_bindgen::prelude::*;

use crate::dsl;
use crate::editor::{DragController, PlacementController};
use crate::geometry::Point;
use crate::graph::{ChainOptions, ElementId, ElementType, NodeId, Schematic, Value};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn tool_from_str(tool: &str) -> Option<ElementType> {
    match tool {
        "wire" => Some(ElementType::Wire),
        "resistor" => Some(ElementType::Resistor),
        "capacitor" => Some(ElementType::Capacitor),
        "inductor" => Some(ElementType::Inductor),
        "voltage" => Some(ElementType::Voltage),
        "switch" => Some(ElementType::Switch),
        _ => None,
    }
}

/// WASM-compatible schematic editor.
///
/// Wraps the native store and controllers behind a flat, JavaScript-friendly
/// API keyed by canvas coordinates and u64 ids.
#[wasm_bindgen]
pub struct WasmSchematic {
    store: Schematic,
    placement: PlacementController,
    drag: DragController,
}

#[wasm_bindgen]
impl WasmSchematic {
    /// Create an empty schematic editor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSchematic {
        WasmSchematic {
            store: Schematic::new(),
            placement: PlacementController::new(),
            drag: DragController::new(),
        }
    }

    /// Select or toggle a placement tool by name
    /// (`wire`, `resistor`, `capacitor`, `inductor`, `voltage`, `switch`).
    pub fn select_tool(&mut self, tool: &str) -> Result<(), JsValue> {
        let tool = tool_from_str(tool)
            .ok_or_else(|| JsValue::from_str(&format!("unknown tool '{}'", tool)))?;
        self.placement.handle_tool_click(&mut self.store, tool);
        Ok(())
    }

    /// Route a primary-button canvas click.
    pub fn click(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.placement
            .handle_click(&mut self.store, Point::new(x, y))
            .map(|_| ())
            .map_err(js_err)
    }

    /// Recompute hover previews for a pointer move.
    pub fn hover(&mut self, x: f64, y: f64) {
        self.placement.update_hover(&self.store, Point::new(x, y));
    }

    /// Right-click: cancel placement and clear previews.
    pub fn right_click(&mut self) {
        self.placement.handle_right_click(&mut self.store);
    }

    /// Delete/Backspace: remove selected element(s). Returns the count.
    pub fn delete_selected(&mut self) -> usize {
        self.placement.handle_delete_key(&mut self.store)
    }

    /// Begin dragging a node.
    pub fn begin_drag(&mut self, node_id: u64, x: f64, y: f64) -> Result<(), JsValue> {
        self.drag
            .begin(&self.store, NodeId(node_id), Point::new(x, y))
            .map_err(js_err)
    }

    /// Apply a pointer move to the active drag session.
    pub fn update_drag(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.drag
            .update(&mut self.store, Point::new(x, y))
            .map_err(js_err)
    }

    /// End the drag session (also call on teardown while dragging).
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Whether a drag session is active (drives the cursor affordance).
    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Set an element's value from a numeric-or-symbolic string.
    pub fn set_element_value(&mut self, element_id: u64, value: &str) -> Result<(), JsValue> {
        let value = match value.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Expr(value.to_string()),
        };
        self.store
            .update_element_value(ElementId(element_id), value)
            .map_err(js_err)
    }

    /// Set a switch's open state.
    pub fn set_switch_open(&mut self, element_id: u64, is_open: bool) -> Result<(), JsValue> {
        self.store
            .update_switch_state(ElementId(element_id), is_open)
            .map_err(js_err)
    }

    /// Rebuild the schematic from a chain description.
    pub fn generate_chain(&mut self, text: &str) -> Result<(), JsValue> {
        self.store
            .generate_chain(text, ChainOptions::default())
            .map_err(js_err)
    }

    /// Serialize the schematic for the solver, after the connectivity
    /// check that gates submission.
    pub fn export_circuit(&self) -> Result<String, JsValue> {
        crate::graph::validate_connectivity(&self.store).map_err(js_err)?;
        dsl::export(&self.store).map_err(js_err)
    }

    /// Number of nodes in the schematic.
    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.store.nodes().len()
    }

    /// Number of elements in the schematic.
    #[wasm_bindgen(getter)]
    pub fn element_count(&self) -> usize {
        self.store.elements().len()
    }
}

impl Default for WasmSchematic {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
