use crate::model::Link;
use serde::{Deserialize, Serialize};

/// Body of `POST /links`. Both fields are optional at the wire level so the
/// handler can answer a missing field with 400 instead of a decode failure.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub link: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: &str) -> Self {
        ErrorResponse {
            error: msg.to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub link: Link,
}
