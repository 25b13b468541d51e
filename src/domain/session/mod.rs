//! Per-browser session state.

mod data;
mod id;

pub use data::{Flash, SessionData};
pub use id::SessionId;
