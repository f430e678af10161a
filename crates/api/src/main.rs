use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use premiere_api::config::ServerConfig;
use premiere_api::feed::SignupFeed;
use premiere_api::live::LiveBoard;
use premiere_api::router::build_app_router;
use premiere_api::state::AppState;
use premiere_api::ws;
use premiere_db::SubmissionRepo;
use premiere_geocode::GeocodeClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let pool = connect_database().await;

    let ws_manager = Arc::new(ws::WsManager::new());
    let heartbeat_handle = ws::start_heartbeat(Arc::clone(&ws_manager));

    let geocode = Arc::new(GeocodeClient::new(
        config.geocode_base_url.clone(),
        config.geocode_timeout(),
    ));

    // Seed the live board from persisted history so the leaderboard and
    // late-joining clients agree with the store from the first request.
    let history = SubmissionRepo::list(&pool)
        .await
        .expect("Failed to load submission history");
    let live_board = Arc::new(LiveBoard::from_submissions(history));
    tracing::info!(count = live_board.len().await, "Live board seeded from store");

    let event_bus = Arc::new(premiere_events::EventBus::default());
    let feed = SignupFeed::new(Arc::clone(&live_board), Arc::clone(&ws_manager));
    let feed_handle = tokio::spawn(feed.run(event_bus.subscribe()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ws_manager: Arc::clone(&ws_manager),
        event_bus: Arc::clone(&event_bus),
        live_board,
        geocode,
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped accepting connections, cleaning up");

    // Closing the broadcast channel is the feed task's stop signal.
    drop(event_bus);
    let _ = tokio::time::timeout(Duration::from_secs(5), feed_handle).await;

    ws_manager.shutdown_all().await;
    heartbeat_handle.abort();
    tracing::info!("Graceful shutdown complete");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "premiere_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, verify, and migrate. Any failure here aborts startup; the
/// service is useless without its store.
async fn connect_database() -> premiere_db::DbPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = premiere_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    premiere_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    premiere_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    pool
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
