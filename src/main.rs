mod api;
mod config;
mod forms;
mod loader;
mod notify;
mod render;
mod routes;
mod state;
mod store;
mod view;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::PortalConfig::from_env().expect("invalid portal configuration");
    let api = api::HttpPortalApi::new(&config.api_base_url, config.timeouts).expect("backend API client init failed");
    tracing::info!(base_url = api.base_url(), "backend API client initialized");

    let state = state::AppState::new(Arc::new(api));
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "civic-portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
