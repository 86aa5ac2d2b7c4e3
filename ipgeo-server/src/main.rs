mod adapters;
mod application;
mod config;
mod domain;
mod infrastructure;

use crate::{
    adapters::{
        app_state::GeocoderState,
        http::{HttpServer, HttpServerConfig},
    },
    config::Config,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::load().expect("Failed to load configuration");
    let state = GeocoderState::from_config(&config);

    let http_server = HttpServer::new(
        HttpServerConfig {
            port: config.server_port,
        },
        state,
    )
    .await
    .expect("Failed to create HTTP server");
    http_server.run().await.expect("Failed to run HTTP server");
}
