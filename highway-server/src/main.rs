use highway_server::Highway;
use highway_server::config::ServerConfig;
use highway_server::logging;
use highway_server::web::{AppState, create_router};
use tracing::info;

#[tokio::main]
async fn main() {
    logging::init();

    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    // Build app state around an empty highway
    let state = AppState::new(Highway::new());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    info!(addr = %config.addr, "highway planner listening");
    println!("Highway planner listening on http://{}", config.addr);
    println!();
    println!("API Endpoints:");
    println!("  GET    /health                               - Health check");
    println!("  GET    /stations                             - List stations");
    println!("  POST   /stations                             - Build a station");
    println!("  DELETE /stations/{{distance}}                  - Demolish a station");
    println!("  POST   /stations/{{distance}}/vehicles         - Add a vehicle");
    println!("  DELETE /stations/{{distance}}/vehicles/{{range}} - Scrap a vehicle");
    println!("  GET    /route?start=&end=                    - Plan a route");
    println!("  POST   /commands                             - Run a command script");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutting down");
}
