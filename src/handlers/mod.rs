pub mod books;
pub mod search;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::index::Index;

/// Application context passed to all handlers.
pub struct Ctx {
    /// Fully loaded before the server starts; read-only from here on.
    pub index: Arc<Index>,
    pub consts: Consts,
}

/// Application constants.
#[derive(Clone)]
pub struct Consts {
    pub num_suggestions: usize,
    pub max_suggestions: usize,
    pub max_results: usize,
}

impl Default for Consts {
    fn default() -> Self {
        Self {
            num_suggestions: 8,
            max_suggestions: 20,
            max_results: 50,
        }
    }
}

/// API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResp<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: Serialize> IntoResponse for ApiResp<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub fn json<T: Serialize>(data: T) -> ApiResp<T> {
    ApiResp {
        data: Some(data),
        message: None,
    }
}

/// API error type.
#[derive(Debug)]
pub struct ApiErr {
    pub message: String,
    pub status: StatusCode,
}

impl ApiErr {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let json = Json(ApiResp::<()> {
            data: None,
            message: Some(self.message),
        });
        (self.status, json).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiErr>;

/// Resolve a requested limit: 0 takes the default, anything above max is
/// clamped.
pub fn limit(requested: usize, default: usize, max: usize) -> usize {
    match requested {
        0 => default.min(max),
        n => n.min(max),
    }
}
