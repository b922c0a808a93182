use navdash_api::config::AppConfig;
use navdash_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up JWT_SECRET, DB_PATH, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // No fallback signing secret: refuse to start without one.
    let config = AppConfig::from_env().unwrap_or_else(|e| panic!("configuration error: {}", e));
    let port = config.server.port;

    let state = AppState::new(config)
        .await
        .unwrap_or_else(|e| panic!("failed to initialize storage: {}", e));

    let app = navdash_api::app(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Navdash API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
