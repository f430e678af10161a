use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};

use crate::state::AppState;
use crate::ws::manager::WsManager;

/// GET /api/v1/ws
///
/// Upgrade to WebSocket and join the live signup feed. The feed is
/// anonymous and broadcast-only; no subscription handshake is needed.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| run_connection(socket, state.ws_manager))
}

/// Drive one feed connection until either side hangs up.
///
/// The connection is registered under a fresh UUID, then a single
/// select loop forwards broadcast frames from the manager channel to
/// the socket while draining inbound frames. Inbound traffic carries no
/// meaning on this feed; only Close (and transport errors) end the
/// loop. Deregistration happens on every exit path.
async fn run_connection(socket: WebSocket, ws_manager: Arc<WsManager>) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    let mut outbound = ws_manager.add(conn_id.clone()).await;
    tracing::info!(conn_id = %conn_id, "WebSocket connected");

    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            frame = outbound.recv() => {
                let Some(frame) = frame else {
                    // Manager dropped our channel (shutdown or replaced id).
                    break;
                };
                if sink.send(frame).await.is_err() {
                    break;
                }
            }
            inbound = stream.next() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                        break;
                    }
                }
            }
        }
    }

    ws_manager.remove(&conn_id).await;
    tracing::info!(conn_id = %conn_id, "WebSocket disconnected");
}
