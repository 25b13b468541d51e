//! HTTP middleware for axum.
//!
//! - `session` - resolves the browser cookie to a session id

pub mod session;

pub use session::session_middleware;
