use clap::Parser;
use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_tungstenite::{connect_async, tungstenite::Message};

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

#[derive(Parser)]
#[command(name = "echo-cli")]
#[command(about = "Send messages to the echo server and print its replies", long_about = None)]
struct Cli {
    /// Server URL to connect to
    #[arg(short, long, default_value = "ws://127.0.0.1:3000")]
    url: String,

    /// Messages to send; reads stdin line by line when empty
    messages: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (mut ws, _) = connect_async(cli.url.as_str()).await?;

    if let Some(greeting) = next_text(&mut ws).await? {
        println!("{}", greeting);
    }

    if cli.messages.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if !exchange(&mut ws, line).await? {
                return Ok(());
            }
        }
    } else {
        for message in cli.messages {
            if !exchange(&mut ws, message).await? {
                return Ok(());
            }
        }
    }

    ws.close(None).await?;
    Ok(())
}

/// Send one message and print the reply. Returns `false` once the server closed.
async fn exchange(ws: &mut WsStream, message: String) -> Result<bool, Box<dyn std::error::Error>> {
    ws.send(Message::Text(message.into())).await?;
    match next_text(ws).await? {
        Some(reply) => {
            println!("{}", reply);
            Ok(true)
        }
        None => {
            eprintln!("Connection closed by server");
            Ok(false)
        }
    }
}

/// Wait for the next text frame, skipping control frames.
async fn next_text(ws: &mut WsStream) -> Result<Option<String>, Box<dyn std::error::Error>> {
    while let Some(frame) = ws.next().await {
        match frame? {
            Message::Text(text) => return Ok(Some(text.as_str().to_owned())),
            Message::Binary(bytes) => {
                return Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
            }
            Message::Close(_) => return Ok(None),
            _ => {}
        }
    }
    Ok(None)
}
