//! Domain model: todo lists and the per-browser session that owns them.

pub mod session;
pub mod todos;
