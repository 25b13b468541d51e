//! Adapters - infrastructure implementations of the ports plus the HTTP
//! surface.

pub mod http;
pub mod storage;
