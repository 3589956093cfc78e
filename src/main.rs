//! Kriya Meditation - A meditation timer and Kriya Yoga library served over HTTP
//!
//! This is the main entry point for the kriya-meditation application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use kriya_meditation::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::tick_pump_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("kriya_meditation={},tower_http=info", config.log_level()))
        .init();

    info!("Starting kriya-meditation server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, tick={}ms",
          config.host, config.port, config.tick_ms);

    // Create application state
    let (state, ticks) = AppState::new(config.port, config.host.clone(), config.tick_period());
    let state = Arc::new(state);

    // Feed countdown ticks into the timer
    let pump_state = Arc::clone(&state);
    let pump = tokio::spawn(async move {
        tick_pump_task(pump_state, ticks).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /timer          - Current countdown and presets");
    info!("  POST /timer/start    - Start meditation");
    info!("  POST /timer/pause    - Pause meditation");
    info!("  PUT  /timer/duration - Select a preset duration");
    info!("  GET  /timer/events   - Stream timer changes");
    info!("  GET  /articles       - Kriya Yoga articles");
    info!("  GET  /gurus          - Guru biographies");
    info!("  GET  /status         - Server and timer status");
    info!("  GET  /health         - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Cancel any running countdown before the runtime goes away
    if let Err(e) = state.pause_timer() {
        tracing::warn!("Failed to stop timer on shutdown: {}", e);
    }
    pump.abort();

    info!("Server shutdown complete");
    Ok(())
}
