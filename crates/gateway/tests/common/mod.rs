//! Helper harness: the full router over an in-memory SQLite database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use backendapp_common::db::models::{DetalleProductoEntity, ProductoEntity, ProveedorEntity};
use backendapp_common::{config::AppConfig, DbPool, ProductRegistry};
use backendapp_gateway::{create_router, AppState};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DbBackend, EntityTrait, PaginatorTrait, Schema,
};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    router: Router,
    pub db: DbPool,
    pub registry: ProductRegistry,
}

impl TestApp {
    /// Construct a new test application with a fresh database.
    pub async fn new() -> Self {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let conn = Database::connect(opts)
            .await
            .expect("connect to in-memory sqlite");

        let schema = Schema::new(DbBackend::Sqlite);
        let tables = [
            schema.create_table_from_entity(ProductoEntity),
            schema.create_table_from_entity(ProveedorEntity),
            schema.create_table_from_entity(DetalleProductoEntity),
        ];
        for table in &tables {
            conn.execute(DbBackend::Sqlite.build(table))
                .await
                .expect("create catalog table");
        }

        let db = DbPool::from_connection(conn);
        let registry = ProductRegistry::new();
        let state = AppState::new(Arc::new(AppConfig::default()), db.clone(), registry.clone());

        Self {
            router: create_router(state),
            db,
            registry,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("build request");
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("build request");
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };

        (status, body)
    }

    /// Make every insert into `detalle_producto` fail.
    pub async fn break_detail_inserts(&self) {
        self.db
            .connection()
            .execute_unprepared(
                "CREATE TRIGGER fail_detalle BEFORE INSERT ON detalle_producto \
                 BEGIN SELECT RAISE(ABORT, 'forced fault'); END;",
            )
            .await
            .expect("create fault trigger");
    }

    /// Row counts of (producto, proveedor, detalle_producto)
    pub async fn counts(&self) -> (u64, u64, u64) {
        let conn = self.db.connection();
        (
            ProductoEntity::find().count(conn).await.expect("count producto"),
            ProveedorEntity::find().count(conn).await.expect("count proveedor"),
            DetalleProductoEntity::find().count(conn).await.expect("count detalle"),
        )
    }
}
