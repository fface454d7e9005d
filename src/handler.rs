use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::{CreateLinkRequest, DeleteResponse};
use crate::db::Database;
use crate::error::StoreError;
use crate::{bad_request, not_found, server_error};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

pub async fn get_links(State(state): State<AppState>) -> Response {
    match state.db.list_links().await {
        Ok(links) => (StatusCode::OK, Json(links)).into_response(),
        Err(e) => {
            tracing::error!("failed to list links. store_error: {}", e);
            server_error(&e.to_string())
        }
    }
}

pub async fn create_link(
    State(state): State<AppState>,
    Json(req): Json<CreateLinkRequest>,
) -> Response {
    // an empty link string counts as absent, a price of zero does not
    let (link, price) = match (req.link, req.price) {
        (Some(link), Some(price)) if !link.is_empty() => (link, price),
        _ => return bad_request("Link and price required"),
    };

    match state.db.create_link(&link, price).await {
        Ok(created) => {
            tracing::info!(price = created.price, "created link");
            (StatusCode::OK, Json(created)).into_response()
        }
        Err(StoreError::DuplicatePrice) => bad_request("Price already exists"),
        Err(e) => {
            tracing::error!("failed to create link. store_error: {}", e);
            server_error(&e.to_string())
        }
    }
}

pub async fn delete_link(State(state): State<AppState>, Path(price): Path<String>) -> Response {
    let Ok(price) = price.parse::<f64>() else {
        return bad_request("Invalid price");
    };

    match state.db.delete_by_price(price).await {
        Ok(Some(deleted)) => {
            tracing::info!(price = deleted.price, "deleted link");
            (
                StatusCode::OK,
                Json(DeleteResponse {
                    message: "Deleted".to_owned(),
                    link: deleted,
                }),
            )
                .into_response()
        }
        Ok(None) => not_found("Link not found"),
        Err(e) => {
            tracing::error!("failed to delete link. store_error: {}", e);
            server_error(&e.to_string())
        }
    }
}
