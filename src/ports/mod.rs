//! Ports - trait boundaries between the domain and infrastructure.

mod session_store;

pub use session_store::{SessionStore, SessionStoreError};
