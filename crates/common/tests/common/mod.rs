//! Test harness: a fresh SQLite in-memory database with the catalog tables.

#![allow(dead_code)]

use backendapp_common::catalog::{ProductInput, SupplierInput};
use backendapp_common::db::models::{DetalleProductoEntity, ProductoEntity, ProveedorEntity};
use backendapp_common::DbPool;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DbBackend, EntityTrait, PaginatorTrait, Schema,
};

/// Connect to an in-memory database and create the three tables.
///
/// The pool holds a single connection: every SQLite in-memory connection is
/// its own database.
pub async fn setup_db() -> DbPool {
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

    DbPool::from_connection(conn)
}

/// Make every insert into `detalle_producto` fail.
pub async fn break_detail_inserts(pool: &DbPool) {
    pool.connection()
        .execute_unprepared(
            "CREATE TRIGGER fail_detalle BEFORE INSERT ON detalle_producto \
             BEGIN SELECT RAISE(ABORT, 'forced fault'); END;",
        )
        .await
        .expect("create fault trigger");
}

/// Row counts of (producto, proveedor, detalle_producto)
pub async fn counts(pool: &DbPool) -> (u64, u64, u64) {
    let conn = pool.connection();
    (
        ProductoEntity::find().count(conn).await.expect("count producto"),
        ProveedorEntity::find().count(conn).await.expect("count proveedor"),
        DetalleProductoEntity::find().count(conn).await.expect("count detalle"),
    )
}

pub fn product(nombre: &str, referencia: &str) -> ProductInput {
    ProductInput {
        nombre: Some(nombre.to_string()),
        valor_unit: Some(25000.0),
        caregoria: Some("Insumos".to_string()),
        referencia: Some(referencia.to_string()),
    }
}

pub fn supplier(nombre: &str) -> SupplierInput {
    SupplierInput {
        nombre: Some(nombre.to_string()),
        direcion: Some("Calle 1".to_string()),
        correo: Some("a@b.com".to_string()),
        telefono: None,
    }
}
