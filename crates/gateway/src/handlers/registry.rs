//! In-memory product registry handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::response::Envelope;
use crate::AppState;
use backendapp_common::{
    errors::{AppError, Result},
    registry::{RegisterProductRequest, RegisteredProduct},
};

/// POST /api/productos
pub async fn register_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<RegisteredProduct>>)> {
    let Json(request) = payload.map_err(|e| AppError::InvalidFormat {
        message: e.body_text(),
    })?;

    let product = state.registry.create(request).await;
    tracing::info!(id = product.id, "Product registered in memory");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(
            StatusCode::CREATED,
            product,
            "Producto creado correctamente",
        )),
    ))
}

/// GET /api/productos/memoria
pub async fn list_registered_products(
    State(state): State<AppState>,
) -> Json<Envelope<Vec<RegisteredProduct>>> {
    Json(Envelope::data(StatusCode::OK, state.registry.list().await))
}
