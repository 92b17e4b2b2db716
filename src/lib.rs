//! WebSocket echo server library.
//!
//! Every client receives a greeting on connect, then one reply per message:
//! the reply prefix followed by the message verbatim.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod protocol;

pub use config::EchoConfig;
pub use http::EchoServer;
pub use lifecycle::Shutdown;
