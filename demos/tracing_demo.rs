//! Demonstrates tracing output from chain evaluation
//!
//! Run with: cargo run --example tracing_demo --features tracing

use checklist::chain;
use checklist::predicate::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let full_name = chain![not_empty(), starts_with_capital(), has_single_space()];

    for input in ["Grace Hopper", "grace", "   "] {
        let result = full_name.evaluate(input);
        tracing::info!(input, passed = result.passed(), "validated");
    }
}
