use std::env;

use telemetry_driver::rest;
use telemetry_driver::store::ReadingStore;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let server_port: u16 = env::var("SERVER_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);
    let seed_readings: usize = env::var("SEED_READINGS")
        .unwrap_or_else(|_| "30".to_string())
        .parse()
        .unwrap_or(30);

    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Starting telemetry driver");

    // Seed the read-only store once; every handler shares the snapshot.
    let store = ReadingStore::seeded(seed_readings);
    info!("Seeded {} readings", store.len());

    let app = rest::create_router(store);

    let addr = format!("{}:{}", server_host, server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    info!("HTTP server listening on {}", addr);

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap_or_else(|e| {
            error!("HTTP server error: {}", e);
        });
    });

    tokio::select! {
        _ = server_handle => {
            error!("HTTP server terminated");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Shutting down");
}
