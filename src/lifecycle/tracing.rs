//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered
//! by `RUST_LOG`. The store, controller and HTTP service log with structured
//! fields:
//!
//! - **Store lifecycle**: startup, shutdown, final state
//! - **Refreshes**: ticket issued, catalog replaced (`size`), superseded responses
//! - **Failures**: list/create errors with the service error attached
//!
//! ```bash
//! RUST_LOG=info catalog-viewer list     # one line per refresh
//! RUST_LOG=debug catalog-viewer list    # tickets and request payloads
//! ```
//!
//! With `RUST_LOG=info` a create looks like:
//!
//! ```text
//! INFO create_placeholder: Creating placeholder upc=100000000004
//! INFO create_placeholder:refresh: Catalog replaced ticket=refresh_2 size=4
//! INFO create_placeholder:refresh: Refresh complete ticket=refresh_2 result=Applied
//! ```
//!
//! Logs go to stderr so they never interleave with the rendered view on stdout.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
