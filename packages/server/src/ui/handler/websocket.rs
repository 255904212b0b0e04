//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::{
    sync::{Mutex, MutexGuard, mpsc},
    task::JoinHandle,
};

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, SessionCommand},
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
};

use super::session::handle_command;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let connection_id = ConnectionIdFactory::generate();
    ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound flow: notifications addressed to this
/// connection (via the rx channel) are written to its socket in order.
///
/// # Arguments
///
/// * `rx` - Channel receiver for frames addressed to this connection
/// * `sender` - WebSocket sink to send frames to this client
///
/// # Returns
///
/// A `JoinHandle` for the spawned task
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Stop the receive task between two commands and keep dispatch locked.
///
/// `handle_command` holds `dispatch_lock` from mutation to fan-out, so once
/// the lock is acquired the task is not inside a command. It is aborted and
/// awaited before the guard is returned, leaving no half-applied command.
async fn stop_receive_task(
    dispatch_lock: &Mutex<()>,
    recv_task: JoinHandle<()>,
) -> MutexGuard<'_, ()> {
    let guard = dispatch_lock.lock().await;
    recv_task.abort();
    let _ = recv_task.await;
    guard
}

/// Decode one text frame into a command. Malformed frames are dropped.
fn parse_frame(connection_id: &ConnectionId, text: &str) -> Option<SessionCommand> {
    match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => Some(event.into()),
        Err(e) => {
            tracing::warn!("Dropped malformed frame from '{}': {}", connection_id, e);
            None
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive notifications
    let (tx, rx) = mpsc::unbounded_channel();
    state
        .connect_participant_usecase
        .execute(connection_id.clone(), tx)
        .await;
    tracing::info!("Connection '{}' established", connection_id);

    let state_clone = state.clone();
    let connection_id_clone = connection_id.clone();

    // Spawn a task to receive frames from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id_clone, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::trace!(
                        "Received from '{}': {}",
                        connection_id_clone,
                        text.as_str()
                    );
                    if let Some(command) = parse_frame(&connection_id_clone, text.as_str()) {
                        handle_command(&state_clone, &connection_id_clone, command).await;
                    }
                }
                Message::Binary(_) => {
                    tracing::debug!("Ignored binary frame from '{}'", connection_id_clone);
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id_clone);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // Spawn a task to forward notifications to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, stop the other
    let recv_finished = tokio::select! {
        _ = &mut recv_task => {
            send_task.abort();
            true
        }
        _ = &mut send_task => false,
    };

    let departures = {
        let _guard = if recv_finished {
            state.dispatch_lock.lock().await
        } else {
            stop_receive_task(&state.dispatch_lock, recv_task).await
        };
        state
            .disconnect_participant_usecase
            .execute(&connection_id)
            .await
    };
    tracing::info!(
        "Connection '{}' closed (left {} room(s))",
        connection_id,
        departures.len()
    );
}
