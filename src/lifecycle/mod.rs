//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → metrics exporter → bind → signal handler → serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → stop accepting → closing flag set → sessions send Close(1001)
//!     → drain → exit
//! ```
//!
//! # Design Decisions
//! - Shutdown has timeout: server returns after the drain deadline even
//!   if a session is stuck

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
