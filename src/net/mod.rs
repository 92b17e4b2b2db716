//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → axum::serve (accept loop, HTTP/1.1 upgrade)
//!     → connection.rs (session ID, live-session count)
//!     → Hand off to the session task
//! ```
//!
//! # Design Decisions
//! - No connection cap: every upgrade is accepted
//! - Each session tracked for graceful shutdown

pub mod connection;

pub use connection::{ConnectionGuard, ConnectionId, ConnectionTracker};
