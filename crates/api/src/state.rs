use std::sync::Arc;

use premiere_events::EventBus;
use premiere_geocode::GeocodeClient;

use crate::config::ServerConfig;
use crate::live::LiveBoard;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// All collaborators are injected here with an explicit lifecycle
/// (created at startup, dropped at shutdown) rather than living as
/// module-level singletons, so handlers stay testable in isolation.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: premiere_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (browser clients on the live feed).
    pub ws_manager: Arc<WsManager>,
    /// Centralized event bus for signup events.
    pub event_bus: Arc<EventBus>,
    /// In-memory mirror of the submission set, fed by the bus.
    pub live_board: Arc<LiveBoard>,
    /// Postal-code resolver.
    pub geocode: Arc<GeocodeClient>,
}
