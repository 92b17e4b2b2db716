//! WebSocket session handling.
//!
//! # Responsibilities
//! - Complete the upgrade handshake with the client
//! - Send the greeting, then echo every data frame with the reply prefix
//! - Log the disconnection exactly once per session
//!
//! # Data Flow
//! ```text
//! Client ──── upgrade ────→ upgrade_handler ──spawn──→ run_session
//!        ←─── greeting ───
//!        ──── M ─────────→
//!        ←─── prefix + M ─
//! ```
//!
//! # Design Decisions
//! - One task per session, sequential receive/reply loop keeps replies in order
//! - Ping/pong handled by the protocol library
//! - A received Close is not a loop exit: the next read flushes the close
//!   reply and then yields `None`
//! - Server shutdown closes open sessions with 1001 (Going Away)

use std::net::SocketAddr;

use axum::{
    extract::{
        ws::{close_code, CloseFrame, Message, WebSocket, WebSocketUpgrade},
        ConnectInfo, State,
    },
    response::Response,
};
use tokio::sync::watch;

use crate::config::MessageConfig;
use crate::http::server::AppState;
use crate::net::ConnectionId;
use crate::observability::logging::DISCONNECT_TARGET;
use crate::observability::metrics::{self, MessageKind};
use crate::protocol::{binary_payload_text, echo_reply, greeting};

/// Why a session loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    /// Stream finished after a close handshake or a dropped transport.
    Closed,
    /// The server is shutting down.
    Shutdown,
}

/// Accept a WebSocket upgrade on any path and spawn the session.
pub async fn upgrade_handler(
    State(state): State<AppState>,
    ConnectInfo(peer_addr): ConnectInfo<SocketAddr>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_failed_upgrade(move |e| {
        tracing::warn!(peer_addr = %peer_addr, error = %e, "WebSocket upgrade failed");
    })
    .on_upgrade(move |socket| run_session(socket, peer_addr, state))
}

/// Drive one client session from greeting to disconnection.
async fn run_session(mut socket: WebSocket, peer_addr: SocketAddr, state: AppState) {
    let guard = state.tracker.track();
    let id = guard.id();
    let mut closing = state.closing.clone();

    tracing::info!(connection_id = %id, peer_addr = %peer_addr, "Client connected");

    match echo_loop(&mut socket, id, &state.messages, &mut closing).await {
        Ok(SessionEnd::Closed) => {}
        Ok(SessionEnd::Shutdown) => {
            tracing::debug!(connection_id = %id, "Session closed by server shutdown");
        }
        Err(e) => {
            tracing::debug!(connection_id = %id, error = %e, "Session ended with transport error");
        }
    }

    tracing::info!(
        target: DISCONNECT_TARGET,
        connection_id = %id,
        "{}",
        state.messages.disconnect_notice
    );
    drop(guard);
}

async fn echo_loop(
    socket: &mut WebSocket,
    id: ConnectionId,
    messages: &MessageConfig,
    closing: &mut watch::Receiver<bool>,
) -> Result<SessionEnd, axum::Error> {
    socket
        .send(Message::Text(greeting(messages).into()))
        .await?;
    tracing::debug!(connection_id = %id, "Greeting sent");

    loop {
        let next = tokio::select! {
            _ = closing.wait_for(|closing| *closing) => None,
            frame = socket.recv() => Some(frame),
        };

        let Some(frame) = next else {
            socket
                .send(Message::Close(Some(CloseFrame {
                    code: close_code::AWAY,
                    reason: "server shutting down".into(),
                })))
                .await?;
            return Ok(SessionEnd::Shutdown);
        };

        let Some(frame) = frame else {
            return Ok(SessionEnd::Closed);
        };

        let reply = match frame? {
            Message::Text(text) => {
                metrics::record_message(MessageKind::Text);
                echo_reply(&messages.reply_prefix, text.as_str())
            }
            Message::Binary(bytes) => {
                metrics::record_message(MessageKind::Binary);
                echo_reply(&messages.reply_prefix, &binary_payload_text(&bytes))
            }
            Message::Close(frame) => {
                tracing::debug!(
                    connection_id = %id,
                    code = frame.as_ref().map(|f| f.code),
                    "Close frame received"
                );
                continue;
            }
            Message::Ping(_) | Message::Pong(_) => continue,
        };

        tracing::debug!(connection_id = %id, bytes = reply.len(), "Echoing message");
        socket.send(Message::Text(reply.into())).await?;
    }
}
