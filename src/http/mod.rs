//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace layer)
//!     → websocket.rs (upgrade, greeting, echo loop, disconnect log)
//!     → protocol.rs (reply text)
//! ```

pub mod server;
pub mod websocket;

pub use server::{AppState, EchoServer, ServerError};
