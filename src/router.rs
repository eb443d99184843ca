use crate::handlers::{health, tasks};
use crate::state::AppState;
use axum::http::{header, Method};
use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health))
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route("/tasks/{id}/toggle", patch(tasks::toggle))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

/// Any origin may call the API. DELETE is allowed here even though no route
/// accepts it.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
