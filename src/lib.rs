//! Expense Core offers the in-memory expense ledger, validation, and
//! projection primitives that power the bundled command-line shell.

use std::sync::Once;

pub mod book;
pub mod cli;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

static INIT_TRACING: Once = Once::new();

/// Initializes the tracing subscriber exactly once for the process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
