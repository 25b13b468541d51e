//! HTTP adapter: router, session middleware, handlers, and HTML views.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;

// Re-export key types for convenience
pub use routes::{app_router, AppState};
