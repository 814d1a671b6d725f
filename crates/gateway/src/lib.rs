//! BackendApp HTTP gateway
//!
//! Routes the catalog API consumed by the mobile client:
//! - `/api/productos`, `/api/proveedores`: raw table listings
//! - `/api/detalle-producto`: transactional create and joined search
//! - `/api/productos` (POST), `/api/productos/memoria`: in-memory registry
//! - `/health`, `/ready`: probes

pub mod handlers;
pub mod response;

use axum::{
    routing::get,
    Router,
};
use backendapp_common::{config::AppConfig, CatalogService, DbPool, ProductRegistry};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: CatalogService,
    pub registry: ProductRegistry,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, db: DbPool, registry: ProductRegistry) -> Self {
        Self {
            config,
            catalog: CatalogService::new(db),
            registry,
        }
    }
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // The mobile client is served from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    let timeout = TimeoutLayer::new(state.config.request_timeout());

    // API routes
    let api_routes = Router::new()
        // Database listings + in-memory create
        .route(
            "/productos",
            get(handlers::catalog::list_products).post(handlers::registry::register_product),
        )
        .route("/productos/memoria", get(handlers::registry::list_registered_products))
        .route("/proveedores", get(handlers::catalog::list_suppliers))

        // Detail endpoints
        .route(
            "/detalle-producto",
            get(handlers::catalog::list_details).post(handlers::catalog::create_detail),
        );

    // Compose the app
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(timeout)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(request_id)
        .layer(propagate_id)
        .with_state(state)
}
