//! # Tracing Setup
//!
//! Structured logging for every actor-based service built on this crate.
//!
//! The actors emit one record per request with the entity type and id as fields, so a
//! single submission reads like this at `RUST_LOG=debug`:
//!
//! ```text
//! INFO  submit_order{items=2 total=6200}: Sending create_order to actor
//! DEBUG Create entity_type="Order" params=OrderCreate { items: 2, total: 6200, .. }
//! INFO  Stock reduction is simulated, inventory unchanged order_id=ORD-1760515200000-k3j9x0a2q product_id=1 quantity=2
//! INFO  New order notification (simulated) order_id=ORD-1760515200000-k3j9x0a2q
//! INFO  Created entity_type="Order" id=ORD-1760515200000-k3j9x0a2q size=1
//! ```
//!
//! Filter with the usual `EnvFilter` syntax:
//!
//! ```bash
//! RUST_LOG=info cargo run                      # lifecycle + created/updated records
//! RUST_LOG=debug cargo run                     # full payloads
//! RUST_LOG=heladeria=debug,tower_http=info cargo run
//! ```

/// Installs the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG`; when unset everything at `info` and above is shown.
/// Calling this twice panics, as with any global subscriber.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a record comes from
        .compact()
        .init();
}
