//! Database-backed catalog handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::response::{CreatedDetailResponse, Envelope};
use crate::AppState;
use backendapp_common::{
    catalog::CreateDetailRequest,
    db::{
        models::{Producto, Proveedor},
        DetailView,
    },
    errors::{AppError, Result},
};

/// Query string of `GET /api/detalle-producto`
#[derive(Debug, Default, Deserialize)]
pub struct DetailSearchParams {
    pub busqueda: Option<String>,
}

/// GET /api/productos
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Producto>>> {
    let products = state.catalog.list_products().await?;
    Ok(Json(products))
}

/// GET /api/proveedores
pub async fn list_suppliers(State(state): State<AppState>) -> Result<Json<Vec<Proveedor>>> {
    let suppliers = state.catalog.list_suppliers().await?;
    Ok(Json(suppliers))
}

/// GET /api/detalle-producto?busqueda=texto
pub async fn list_details(
    State(state): State<AppState>,
    params: std::result::Result<Query<DetailSearchParams>, QueryRejection>,
) -> Result<Json<Vec<DetailView>>> {
    let Query(params) = params.map_err(|e| AppError::InvalidFormat {
        message: e.body_text(),
    })?;
    let rows = state.catalog.list_details(params.busqueda.as_deref()).await?;

    tracing::debug!(
        busqueda = ?params.busqueda,
        results = rows.len(),
        "Detail search served"
    );

    Ok(Json(rows))
}

/// POST /api/detalle-producto
pub async fn create_detail(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateDetailRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedDetailResponse>)> {
    let Json(request) = payload.map_err(|e| AppError::InvalidFormat {
        message: e.body_text(),
    })?;
    let (product, supplier) = request.into_parts()?;

    let created = state.catalog.create_detail(product, supplier).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDetailResponse {
            envelope: Envelope::new(
                StatusCode::CREATED,
                created.detail_id,
                "Detalle de producto creado correctamente",
            ),
            producto_id: created.product_id,
            proveedor_id: created.supplier_id,
        }),
    ))
}
