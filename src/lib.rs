use axum::{
    extract::State,
    handler::Handler,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;

use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Assemble the full router. Exposed so integration tests serve exactly
/// what the binary serves.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // API routes, grouped by domain
        .merge(auth_routes(&state))
        .merge(bookmark_routes(&state))
        .merge(search_routes(&state))
        .merge(hot_routes(&state))
        .merge(weather_routes(&state))
        .merge(system_routes(&state))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes(state: &AppState) -> Router<AppState> {
    use crate::handlers::{protected::user, public::auth};

    let public = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login));

    let protected = Router::new()
        .route(
            "/api/auth/user",
            get(user::get_user_info).put(user::update_user_info),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    public.merge(protected)
}

fn bookmark_routes(state: &AppState) -> Router<AppState> {
    use crate::handlers::protected::bookmarks;

    Router::new()
        .route(
            "/api/bookmarks/categories",
            get(bookmarks::get_categories).post(bookmarks::add_category),
        )
        .route(
            "/api/bookmarks/categories/:id",
            put(bookmarks::update_category).delete(bookmarks::delete_category),
        )
        .route(
            "/api/bookmarks",
            get(bookmarks::get_bookmarks).post(bookmarks::add_bookmark),
        )
        .route(
            "/api/bookmarks/:id",
            put(bookmarks::update_bookmark).delete(bookmarks::delete_bookmark),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth))
}

fn search_routes(state: &AppState) -> Router<AppState> {
    use crate::handlers::protected::search;

    Router::new()
        .route(
            "/api/search/engines",
            get(search::get_engines).post(search::add_engine),
        )
        .route(
            "/api/search/engines/:id",
            put(search::update_engine).delete(search::delete_engine),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth))
}

fn hot_routes(state: &AppState) -> Router<AppState> {
    use crate::handlers::protected::hot;

    Router::new()
        .route(
            "/api/hot/sources",
            get(hot::get_sources).post(hot::add_source),
        )
        .route(
            "/api/hot/sources/:id",
            put(hot::update_source).delete(hot::delete_source),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth))
}

fn weather_routes(state: &AppState) -> Router<AppState> {
    use crate::handlers::protected::weather;

    Router::new()
        .route("/api/weather/current", get(weather::get_current_weather))
        .route_layer(from_fn_with_state(state.clone(), require_auth))
}

fn system_routes(state: &AppState) -> Router<AppState> {
    use crate::handlers::{protected, public};

    // The read is public; only the update sits behind the gate.
    Router::new().route(
        "/api/system/config",
        get(public::system::get_config).put(
            protected::system::update_config
                .layer(from_fn_with_state(state.clone(), require_auth)),
        ),
    )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "code": 200,
        "message": "ok",
        "data": {
            "name": "Navdash API",
            "version": version,
            "description": "Personal navigation dashboard backend built with Rust (Axum)",
            "endpoints": {
                "auth": "/api/auth/register, /api/auth/login (public), /api/auth/user (bearer)",
                "bookmarks": "/api/bookmarks[/:id], /api/bookmarks/categories[/:id] (bearer)",
                "search": "/api/search/engines[/:id] (bearer)",
                "hot": "/api/hot/sources[/:id] (bearer)",
                "system": "/api/system/config (GET public, PUT bearer)",
                "weather": "/api/weather/current (bearer)",
            },
        },
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "code": 200,
                "message": "ok",
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "code": 503,
                "message": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
