use axum::http::{Method, header};
use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::cors::{Any, CorsLayer};

use crate::handler::{AppState, create_link, delete_link, get_links};

/// Builds the application router. CORS is permissive: browsers may call the
/// API from any origin with GET, POST or DELETE and a JSON body.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/links", get(get_links).post(create_link))
        .route("/links/:price", delete(delete_link))
        .layer(cors)
        .with_state(state)
}
