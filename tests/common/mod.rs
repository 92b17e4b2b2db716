//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use echo_websocket::net::ConnectionTracker;
use echo_websocket::{EchoConfig, EchoServer, Shutdown};
use futures_util::StreamExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

pub type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub const GREETING: &str = "[서버 접속 완료!]";
pub const PREFIX: &str = "서버로부터 응답: ";

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub tracker: ConnectionTracker,
    pub handle: JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("ws://{}/", self.addr)
    }
}

pub async fn start_server() -> TestServer {
    start_server_with(EchoConfig::default()).await
}

pub async fn start_server_with(mut config: EchoConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();
    config.shutdown.drain_timeout_secs = 2;

    let shutdown = Shutdown::new();
    let server = EchoServer::new(config);
    let tracker = server.tracker();
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move {
        server.run(listener, server_shutdown).await.unwrap();
    });

    TestServer {
        addr,
        shutdown,
        tracker,
        handle,
    }
}

/// Connect to `url` and return the client once the handshake completes.
pub async fn connect(url: &str) -> Client {
    let (ws, _) = connect_async(url).await.expect("server unreachable");
    ws
}

/// Connect and consume the greeting.
pub async fn connect_greeted(url: &str) -> Client {
    let mut ws = connect(url).await;
    assert_eq!(next_text(&mut ws).await, GREETING);
    ws
}

/// Next frame from the server, failing the test after two seconds.
pub async fn next_frame(ws: &mut Client) -> Option<Message> {
    tokio::time::timeout(Duration::from_secs(2), ws.next())
        .await
        .expect("timed out waiting for frame")
        .map(|frame| frame.expect("transport error"))
}

/// Next text frame, skipping pings and pongs.
pub async fn next_text(ws: &mut Client) -> String {
    loop {
        match next_frame(ws).await {
            Some(Message::Text(text)) => return text.as_str().to_owned(),
            Some(Message::Ping(_)) | Some(Message::Pong(_)) => continue,
            other => panic!("expected text frame, got {:?}", other),
        }
    }
}

/// Close from the client side and read until the stream ends.
pub async fn close(mut ws: Client) {
    ws.close(None).await.unwrap();
    while let Some(Ok(_)) = next_frame_raw(&mut ws).await {}
}

async fn next_frame_raw(
    ws: &mut Client,
) -> Option<Result<Message, tokio_tungstenite::tungstenite::Error>> {
    tokio::time::timeout(Duration::from_secs(2), ws.next())
        .await
        .ok()
        .flatten()
}
