//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber: compact lines, no module
//! prefix (`with_target(false)`), level filtering from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` / `Shutdown` with `entity_type` and final store size
//! - **Store Operations**: `Created`, `Created batch`, `Updated batch`, `Deleted` with counts
//! - **Client Calls**: one span per client method (`#[instrument]`)
//! - **HTTP**: one span per request from `tower-http`'s `TraceLayer`
//!
//! ## Usage
//!
//! ```bash
//! # Default when RUST_LOG is unset
//! RUST_LOG=info,tower_http=debug cargo run
//!
//! # Full payloads and every actor message
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, creating two orders for a known user reads:
//!
//! ```text
//! INFO Created batch entity_type="Order" created=2 size=2
//! INFO create_orders{count=2}: Orders created created=2
//! ```
//!
//! Passwords never reach the log: the user types implement `Debug` by hand and
//! leave the hash and plain password out.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tower_http=debug";

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type identifies the actor
        .compact()
        .init();
}
