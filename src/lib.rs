#![doc(test(attr(deny(warnings))))]

//! Activity Budget records named activities against a budget, evaluates whether
//! each stays within it, and projects simple returns. The library keeps all
//! state in an explicit per-session context; the bundled shell renders it.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Activity Budget tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}
