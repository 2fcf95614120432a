//! WebSocket endpoint streaming batch progress events.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;

use profashion_events::EventBus;

use crate::state::AppState;

/// GET /api/v1/events -- upgrade to WebSocket and stream every
/// [`BatchEvent`](profashion_events::BatchEvent) as a JSON text frame.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.event_bus))
}

/// Forward bus events to the socket until either side closes.
///
/// A lagged receiver (client slower than the event rate) skips the dropped
/// events and keeps streaming; the registry snapshot endpoint covers any
/// gap.
async fn handle_socket(socket: WebSocket, bus: std::sync::Arc<EventBus>) {
    let conn_id = uuid::Uuid::new_v4();
    tracing::info!(%conn_id, "Event stream connected");

    let mut rx = bus.subscribe();
    let (mut sink, mut stream) = socket.split();

    let send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let payload = match serde_json::to_string(&event) {
                        Ok(payload) => payload,
                        Err(err) => {
                            tracing::error!(%err, "Failed to serialize event");
                            continue;
                        }
                    };
                    if sink.send(Message::Text(payload.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event stream lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Inbound frames are only consumed to detect disconnection.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) | Err(_) => break,
            Ok(_) => {}
        }
    }

    send_task.abort();
    tracing::info!(%conn_id, "Event stream disconnected");
}

pub fn router() -> Router<AppState> {
    Router::new().route("/events", get(ws_handler))
}
