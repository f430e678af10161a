use std::sync::Arc;
use std::time::Duration;

use crate::ws::manager::WsManager;

const PING_INTERVAL: Duration = Duration::from_secs(30);

/// Spawn the heartbeat task: every 30 seconds, ping each connected
/// client so intermediaries keep idle feed connections open. The handle
/// is aborted during shutdown.
pub fn start_heartbeat(ws_manager: Arc<WsManager>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PING_INTERVAL);
        loop {
            ticker.tick().await;
            let count = ws_manager.connection_count().await;
            if count == 0 {
                continue;
            }
            tracing::debug!(count, "WebSocket heartbeat ping");
            ws_manager.ping_all().await;
        }
    })
}
