//! WebSocket infrastructure for the realtime signup feed.
//!
//! Provides connection management, heartbeat monitoring, and the HTTP
//! upgrade handler used by Axum routes. The feed is public and
//! broadcast-only: clients receive every frame, send nothing.

mod handler;
mod heartbeat;
pub mod manager;

pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::WsManager;
