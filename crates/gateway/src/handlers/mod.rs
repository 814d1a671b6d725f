//! API handlers module

pub mod catalog;
pub mod health;
pub mod registry;

use axum::http::{Method, Uri};
use backendapp_common::errors::AppError;

/// Fallback for every unmatched route
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::info!(method = %method, uri = %uri, "Request to unknown route");

    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
