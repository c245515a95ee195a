//! Station Timer - an interval timer for circuit-style sessions
//!
//! This is the main entry point for the station-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use station_timer::{
    api::create_router,
    config::Config,
    session::SessionController,
    state::AppState,
    timer::SettingsBounds,
    utils::shutdown_signal,
    view::DisplayBoard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("station_timer={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting station-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, exit={:?}",
        config.host, config.port, config.exit_behavior
    );

    let display = Arc::new(DisplayBoard::new(!config.quiet));
    let controller = Arc::new(
        SessionController::new(display.clone(), config.exit_behavior).with_tick(config.tick()),
    );

    // Start right away when the command line carries a full set of settings
    if let Some(payload) = config.initial_settings() {
        let settings = SettingsBounds::default().check(&payload)?;
        controller.start(settings).await?;
    }

    let state = Arc::new(AppState::new(
        Arc::clone(&controller),
        display,
        config.port,
        config.host.clone(),
    ));
    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Control server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /setup      - Start a session with {{duration, breakDuration, numRepeats}}");
    info!("  POST /restart    - Restart with the last or given settings");
    info!("  POST /pause      - Pause the countdown");
    info!("  POST /resume     - Resume the countdown");
    info!("  GET  /pause/wait - Wait until the pause is released");
    info!("  POST /mute       - Mute the break beep");
    info!("  POST /unmute     - Unmute the break beep");
    info!("  POST /exit       - Exit");
    info!("  GET  /status     - Current sequence and display state");
    info!("  GET  /health     - Health check");

    let shutdown_controller = Arc::clone(&controller);
    let shutdown = async move {
        tokio::select! {
            _ = shutdown_signal() => {
                info!("Shutdown signal received");
            }
            _ = shutdown_controller.exit_requested() => {
                info!("Exit requested by client");
            }
        }
        // Release pending pause waits so in-flight requests can finish
        shutdown_controller.shutdown().await;
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        tracing::error!("Server error: {}", e);
    }

    info!("Shutdown complete");
    Ok(())
}
