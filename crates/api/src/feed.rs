//! Event-to-client fanout loop.
//!
//! [`SignupFeed`] subscribes to the event bus and, for each event,
//! updates the shared [`LiveBoard`] and pushes a JSON frame to every
//! connected WebSocket client. Clients that also received the record
//! as a direct response to their own POST are protected by the board's
//! dedup-by-id merge; on the wire each client applies the same rule.

use std::sync::Arc;

use axum::extract::ws::Message;
use premiere_events::SignupEvent;
use tokio::sync::broadcast;

use crate::live::LiveBoard;
use crate::ws::WsManager;

/// Routes signup events to the live board and all WebSocket clients.
pub struct SignupFeed {
    live_board: Arc<LiveBoard>,
    ws_manager: Arc<WsManager>,
}

impl SignupFeed {
    pub fn new(live_board: Arc<LiveBoard>, ws_manager: Arc<WsManager>) -> Self {
        Self {
            live_board,
            ws_manager,
        }
    }

    /// Run the fanout loop.
    ///
    /// Consumes events from `receiver` until the bus is closed (i.e.
    /// the [`EventBus`](premiere_events::EventBus) is dropped during
    /// shutdown). A lagged receiver logs and keeps going: the board
    /// was already updated by the originating handler, and clients
    /// recover missed frames on their next full fetch.
    pub async fn run(self, mut receiver: broadcast::Receiver<SignupEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.handle_event(event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Signup feed lagged behind the event bus");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, signup feed shutting down");
                    break;
                }
            }
        }
    }

    async fn handle_event(&self, event: SignupEvent) {
        match &event {
            SignupEvent::Created(submission) => {
                // The originating handler merged its own record already;
                // this echo deduplicates by id.
                let fresh = self.live_board.merge(submission.clone()).await;
                if !fresh {
                    tracing::debug!(id = submission.id, "Fanout echo of an already-merged signup");
                }
            }
            SignupEvent::Reset => {
                self.live_board.clear().await;
            }
        }

        match serde_json::to_string(&event) {
            Ok(frame) => {
                self.ws_manager.broadcast(Message::Text(frame.into())).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize signup event");
            }
        }
    }
}
