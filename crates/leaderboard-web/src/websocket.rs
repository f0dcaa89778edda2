//! WebSocket handler for the live leaderboard.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use tracing::{debug, error, warn};

use crate::channel::LeaderboardChannel;
use crate::state::AppState;

/// What a client frame means to the leaderboard.
#[derive(Debug, PartialEq, Eq)]
enum Frame {
    /// Text to hand to the channel as an update.
    Update(String),
    Close,
    Ignore,
}

/// Text and UTF-8 binary frames carry updates; control frames are ignored.
fn decode_frame(message: Message) -> Frame {
    match message {
        Message::Text(text) => Frame::Update(text.as_str().to_string()),
        Message::Binary(bytes) => match std::str::from_utf8(&bytes) {
            Ok(text) => Frame::Update(text.to_string()),
            Err(e) => {
                warn!(error = %e, "Dropping non UTF-8 binary message");
                Frame::Ignore
            }
        },
        Message::Close(_) => Frame::Close,
        _ => Frame::Ignore,
    }
}

/// WebSocket upgrade handler.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.channel))
}

/// Drive one connection until either side goes away.
///
/// The snapshot goes out before any broadcast. Incoming messages are handled
/// one at a time; a close arriving while an update is being applied does not
/// cancel that update.
async fn handle_socket(socket: WebSocket, channel: LeaderboardChannel) {
    let (mut sender, mut receiver) = socket.split();
    let (mut subscription, snapshot) = match channel.open().await {
        Ok(opened) => opened,
        Err(e) => {
            error!(error = %e, "Failed to encode snapshot, dropping connection");
            return;
        }
    };

    if sender.send(Message::Text(snapshot.into())).await.is_err() {
        debug!("Client went away before the snapshot was sent");
        channel.close(subscription);
        return;
    }

    loop {
        tokio::select! {
            payload = subscription.next() => {
                let Some(payload) = payload else { break };
                if sender.send(Message::Text(payload.into())).await.is_err() {
                    debug!("WebSocket send failed, client disconnected");
                    break;
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(message)) => match decode_frame(message) {
                        Frame::Update(text) => {
                            channel.receive(&text).await;
                        }
                        Frame::Close => {
                            debug!("WebSocket client sent close frame");
                            break;
                        }
                        Frame::Ignore => {}
                    },
                    Some(Err(e)) => {
                        debug!(error = %e, "WebSocket receive failed");
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    channel.close(subscription);
}
