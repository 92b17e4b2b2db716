//! Metrics collection and exposition.
//!
//! # Metrics
//! - `echo_connections_total` (counter): sessions accepted
//! - `echo_active_connections` (gauge): current session count
//! - `echo_messages_total` (counter): echoed messages by kind
//!
//! Recording is a no-op until `init_metrics` installs the exporter.

use metrics::{counter, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;

/// Kind of inbound data frame that produced an echo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Binary,
}

impl MessageKind {
    fn as_label(self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Binary => "binary",
        }
    }
}

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_connection_opened() {
    counter!("echo_connections_total").increment(1);
    gauge!("echo_active_connections").increment(1.0);
}

pub fn record_connection_closed() {
    gauge!("echo_active_connections").decrement(1.0);
}

pub fn record_message(kind: MessageKind) {
    counter!("echo_messages_total", "kind" => kind.as_label()).increment(1);
}
