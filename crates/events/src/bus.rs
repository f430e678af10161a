//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`SignupEvent`]s. It
//! is designed to be shared via `Arc<EventBus>` across the application:
//! the signup handler publishes, and any number of consumers (the
//! WebSocket feed, future background workers) subscribe independently.

use premiere_core::submission::Submission;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// An event fanned out to all realtime consumers.
///
/// Serialized as-is onto the WebSocket wire, e.g.
/// `{"type":"signup.created","data":{...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SignupEvent {
    /// A submission was persisted. Carries the full record including
    /// the store-assigned `id` and `created_at`, so consumers can
    /// merge it without a follow-up fetch.
    #[serde(rename = "signup.created")]
    Created(Submission),

    /// The administrative bulk reset cleared all submissions.
    #[serde(rename = "signups.reset")]
    Reset,
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`SignupEvent`]. Each
/// receiver returned by [`subscribe`](EventBus::subscribe) owns only
/// its own channel half; dropping it releases exactly that
/// subscription.
pub struct EventBus {
    sender: broadcast::Sender<SignupEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are
    /// dropped and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently
    /// dropped; the store remains the source of truth either way.
    pub fn publish(&self, event: SignupEvent) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<SignupEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
