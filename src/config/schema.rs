//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the echo server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Greeting sent to every client as soon as the upgrade completes.
pub const DEFAULT_GREETING: &str = "[서버 접속 완료!]";

/// Prefix placed in front of every echoed payload.
pub const DEFAULT_REPLY_PREFIX: &str = "서버로부터 응답: ";

/// Log line written when a session ends.
pub const DEFAULT_DISCONNECT_NOTICE: &str = "클라이언트 접속 해제";

/// Root configuration for the echo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EchoConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Texts exchanged with clients.
    pub messages: MessageConfig,

    /// Graceful shutdown settings.
    pub shutdown: ShutdownConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Fixed texts of the echo protocol.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MessageConfig {
    /// First message sent on every new connection.
    pub greeting: String,

    /// Prepended verbatim to each received payload.
    pub reply_prefix: String,

    /// Logged once per closed session, at `info` on the
    /// `echo_websocket::disconnect` target. That target is never filtered
    /// out by `observability.log_level` or `RUST_LOG`.
    pub disconnect_notice: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            reply_prefix: DEFAULT_REPLY_PREFIX.to_string(),
            disconnect_notice: DEFAULT_DISCONNECT_NOTICE.to_string(),
        }
    }
}

/// Graceful shutdown configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// How long to wait for open sessions to close after a shutdown signal.
    pub drain_timeout_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            drain_timeout_secs: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). The disconnection
    /// line is written even at `warn` or `error`.
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: EchoConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert_eq!(config.messages.greeting, "[서버 접속 완료!]");
        assert_eq!(config.messages.reply_prefix, "서버로부터 응답: ");
        assert_eq!(config.messages.disconnect_notice, "클라이언트 접속 해제");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: EchoConfig = toml::from_str(
            r#"
            [messages]
            greeting = "hello"
            "#,
        )
        .unwrap();
        assert_eq!(config.messages.greeting, "hello");
        assert_eq!(config.messages.reply_prefix, DEFAULT_REPLY_PREFIX);
        assert_eq!(config.shutdown.drain_timeout_secs, 5);
    }
}
