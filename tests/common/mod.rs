//! Common test utilities: tracing setup and key builders.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives (e.g. `vmcache::heap=trace`)
//! - `VMCACHE_LOG_FILE`: when set, also write JSON events to this path

#![allow(dead_code)]

use std::env;
use std::fs::File;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Ensures tracing is only initialized once across all tests.
static INIT: Once = Once::new();

/// Initialize the tracing subscriber. Safe to call from every test; only the
/// first call takes effect.
pub fn init_tracing() {
    INIT.call_once(setup_tracing);
}

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()))
}

fn setup_tracing() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_target(true)
        .compact()
        .with_filter(make_filter());

    let file_layer = env::var("VMCACHE_LOG_FILE").ok().map(|path| {
        // Leaked to get the 'static lifetime the writer needs.
        let file: &'static File =
            Box::leak(Box::new(File::create(path).expect("failed to create log file")));
        tracing_subscriber::fmt::layer()
            .with_writer(move || file)
            .json()
            .with_filter(make_filter())
    });

    let _ = Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

// ============================================================================
//  Key builders
// ============================================================================

/// Length-prefix a payload: a 4-byte little-endian size field followed by the
/// payload bytes. The prefix makes it impossible for one valid key to be a
/// prefix of another, which the index requires.
pub fn prefixed(payload: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(4 + payload.len());
    key.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    key.extend_from_slice(payload);
    key
}

/// Length-prefixed 8-byte big-endian counter key.
pub fn counter_key(n: u64) -> Vec<u8> {
    prefixed(&n.to_be_bytes())
}
