//! Application startup and server initialization.
//!
//! This module handles the creation and configuration of the HTTP server,
//! including initialization of the metrics sink, trackers, and route setup.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::routes;
use crate::sinks::create_sink;
use crate::state::AppState;
use crate::trackers::create_tracker;

/// Initializes and runs the application server.
///
/// Sets up the metrics sink, trackers, and HTTP server with configured
/// routes. Binds to the address specified in the configuration and starts
/// serving requests.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the specified address
/// or encounters a runtime error during execution.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let sink = create_sink(&config.sink);
    let trackers: Arc<Vec<_>> = Arc::new(config.trackers.iter().map(create_tracker).collect());

    info!("Starting server on {}", config.bind_address);

    let state = AppState {
        config: config.clone(),
        sink,
        trackers,
    };

    let app = routes::create_router(state);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .expect("Could not bind to specified address");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .unwrap();

    Ok(())
}
