//! Listkeeper - session-backed todo list manager.
//!
//! Users create named lists, add and complete todo items, and the server
//! renders HTML views of state kept entirely in per-browser session
//! snapshots. There is no database; the in-memory session store is the
//! only stateful component.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
