//! Skema - schematic chain tool
//!
//! Rebuilds a schematic from a chain-description file and prints its
//! solver-boundary serialization.
//!
//! # Usage
//!
//! ```bash
//! skema circuit.chain
//! skema --spacing 200 circuit.chain
//! ```

use std::path::PathBuf;

use clap::Parser;
use skema_core::{
    dsl,
    error::Result,
    graph::{validate_connectivity, ChainOptions, Schematic, CHAIN_MARGIN, DEFAULT_ELEMENT_SPAN},
};

/// Schematic chain tool: chain description in, solver lines out
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the chain-description file
    #[arg(value_name = "CHAIN_FILE")]
    chain_file: PathBuf,

    /// Node spacing in canvas pixels
    #[arg(short, long, default_value_t = DEFAULT_ELEMENT_SPAN)]
    spacing: f64,

    /// Canvas margin applied after layout normalization
    #[arg(short, long, default_value_t = CHAIN_MARGIN)]
    margin: f64,

    /// Skip the connectivity check before printing
    #[arg(long)]
    no_validate: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Read the chain description
    let text = std::fs::read_to_string(&args.chain_file).map_err(|e| {
        skema_core::SkemaError::FileReadError {
            path: args.chain_file.display().to_string(),
            source: e,
        }
    })?;
    let lines = dsl::parse_chain(&text)?;
    log::info!(
        "parsed {} element line(s) from {}",
        lines.len(),
        args.chain_file.display()
    );

    // Build the schematic
    let mut schematic = Schematic::new();
    schematic.generate_chain(
        &text,
        ChainOptions {
            spacing: args.spacing,
            margin: args.margin,
        },
    )?;

    // Validate
    if !args.no_validate {
        validate_connectivity(&schematic)?;
    }

    // Print the solver serialization
    print!("{}", dsl::export(&schematic)?);

    Ok(())
}
