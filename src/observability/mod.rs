//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Sessions and server produce:
//!     → logging.rs (structured log events on stdout)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → Terminal / log collector
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
