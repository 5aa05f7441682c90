use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::{get_dist_path, Config, CorsConfig};
use crate::shared::state::AppState;
use crate::system::middleware::request_logger::request_logger;

const INDEX_HTML: &str = "<h1>Employee Registration API</h1>\
<p>The server is running. Use the /register endpoint to POST data.</p>";

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Configure all application routes
///
/// Unknown paths are served from the frontend build; `/` falls back to a
/// short API page when no build is present.
pub fn configure_routes(config: &Config, state: AppState) -> Router {
    let frontend = ServeDir::new(get_dist_path(config)).fallback(get(index));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/register", post(handlers::a001_employee::register))
        .route("/api/employees", get(handlers::a001_employee::list_all))
        .route("/api/employees/:id", get(handlers::a001_employee::get_by_id))
        .with_state(state)
        .fallback_service(frontend)
        .layer(middleware::from_fn(request_logger))
        .layer(cors_layer(&config.cors))
}
