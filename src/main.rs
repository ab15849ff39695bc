mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(api_origin = %config.api_origin, "store API origin");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "game-haven listening");
    axum::serve(listener, app).await.expect("server failed");
}
