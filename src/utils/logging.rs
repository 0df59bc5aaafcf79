// ============================================================================
// Logging Setup
// tracing-subscriber installation for hosts without their own subscriber
// ============================================================================
//
// The backend only emits `debug!`/`trace!` events (registry construction,
// domain errors, rejected input). Hosts that already install a subscriber
// need none of this.

use tracing::Level;

/// Install a global formatting subscriber at `max_level`.
///
/// Returns false if a global subscriber was already set.
pub fn init_logging(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Install a debug-level subscriber that writes through the test harness,
/// so output is captured per test. Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}
