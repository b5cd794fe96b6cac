//! Textual circuit formats at the solver boundary.
//!
//! Two line-oriented formats meet here. They look similar but differ in
//! delimiter placement, and both are supported exactly:
//!
//! # Chain-description import (consumed by `Schematic::generate_chain`)
//!
//! ```text
//! line      = name ' ' start ' ' end [' ' value] [';' direction] [';' value]
//! name      = type_code digits
//! type_code = 'R' | 'C' | 'L' | 'V' | 'W' | 'S'     (case-insensitive)
//! start/end = non-negative integer node label
//! direction = "up" | "down" | "left" | "right"
//! value     = number | expression | "no" | "nc"      ("no"/"nc": switches)
//! ```
//!
//! Unrecognized type codes fall back to wire with a logged warning rather
//! than failing the parse.
//!
//! # Solver export (produced by [`export`])
//!
//! One line per element, terminated by `;`:
//!
//! ```text
//! <ElementName> <StartNodeName> <EndNodeName>[ <value>];
//! ```
//!
//! Wires omit the value. Switches emit `no`/`nc` (normally-open /
//! normally-closed) followed by a `0` initial-condition marker:
//!
//! ```text
//! R1 0 1 10;
//! W1 1 2;
//! SW1 0 1 no 0;
//! ```

mod ast;
mod export;
mod parser;

pub use ast::ChainLine;
pub use export::export;
pub use parser::parse_chain;
