#![doc(test(attr(deny(warnings))))]

//! Shotengai Core offers the player ledger, shop catalog, and game session
//! primitives that power the shopping-street trading and accounting games.

pub mod catalog;
pub mod cli;
pub mod errors;
pub mod ids;
pub mod ledger;
pub mod services;
pub mod session;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Shotengai Core tracing initialized.");
    });
}
