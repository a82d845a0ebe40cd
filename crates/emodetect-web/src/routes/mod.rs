//! Route handlers.

pub mod emotion;
pub mod index;

/// GET /health - Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
