//! Repository pattern for database operations
//!
//! Provides a clean interface for all data access operations
//! with proper error handling and transaction support.

use crate::db::models::*;
use crate::db::query::{DetailQuery, DetailView};
use crate::db::{run_in_transaction, DbPool};
use crate::errors::Result;
use sea_orm::{
    ActiveValue::NotSet, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

/// Validated product row ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub nombre: String,
    pub valor_unit: f64,
    pub caregoria: Option<String>,
    pub referencia: String,
}

/// Validated supplier row ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplier {
    pub nombre: String,
    pub direcion: String,
    pub correo: String,
    pub telefono: Option<String>,
}

/// Identifiers generated by a transactional detail write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedDetail {
    pub detail_id: i32,
    pub product_id: i32,
    pub supplier_id: i32,
}

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    pool: DbPool,
}

impl Repository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> &DatabaseConnection {
        self.pool.connection()
    }

    // ========================================================================
    // Health Check
    // ========================================================================

    /// Ping the database
    pub async fn ping(&self) -> Result<()> {
        self.pool.ping().await
    }

    // ========================================================================
    // Raw Listings
    // ========================================================================

    /// All products, newest first
    pub async fn list_products(&self) -> Result<Vec<Producto>> {
        ProductoEntity::find()
            .order_by_desc(ProductoColumn::IdProducto)
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    /// All suppliers, newest first
    pub async fn list_suppliers(&self) -> Result<Vec<Proveedor>> {
        ProveedorEntity::find()
            .order_by_desc(ProveedorColumn::IdProveedor)
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    // ========================================================================
    // Detail Operations
    // ========================================================================

    /// Joined detail rows matching `query`, newest first
    pub async fn list_details(&self, query: &DetailQuery) -> Result<Vec<DetailView>> {
        query
            .select()
            .into_model::<DetailView>()
            .all(self.conn())
            .await
            .map_err(Into::into)
    }

    /// Insert product, supplier and the detail linking them in one transaction
    pub async fn create_detail(
        &self,
        product: NewProduct,
        supplier: NewSupplier,
    ) -> Result<CreatedDetail> {
        run_in_transaction(self.conn(), move |txn| {
            Box::pin(async move {
                let product_id = insert_product(txn, product).await?;
                let supplier_id = insert_supplier(txn, supplier).await?;
                let detail_id = insert_detail(txn, product_id, supplier_id).await?;

                Ok(CreatedDetail {
                    detail_id,
                    product_id,
                    supplier_id,
                })
            })
        })
        .await
    }
}

async fn insert_product<C: ConnectionTrait>(conn: &C, product: NewProduct) -> Result<i32> {
    let row = ProductoActiveModel {
        id_producto: NotSet,
        nombre: Set(product.nombre),
        valor_unit: Set(product.valor_unit),
        caregoria: Set(product.caregoria),
        referencia: Set(product.referencia),
    };

    let result = ProductoEntity::insert(row).exec(conn).await?;
    Ok(result.last_insert_id)
}

async fn insert_supplier<C: ConnectionTrait>(conn: &C, supplier: NewSupplier) -> Result<i32> {
    let row = ProveedorActiveModel {
        id_proveedor: NotSet,
        nombre: Set(supplier.nombre),
        direcion: Set(supplier.direcion),
        correo: Set(supplier.correo),
        telefono: Set(supplier.telefono),
    };

    let result = ProveedorEntity::insert(row).exec(conn).await?;
    Ok(result.last_insert_id)
}

async fn insert_detail<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
    supplier_id: i32,
) -> Result<i32> {
    let row = DetalleProductoActiveModel {
        id_detalle: NotSet,
        id_producto: Set(product_id),
        id_proveedor: Set(supplier_id),
    };

    let result = DetalleProductoEntity::insert(row).exec(conn).await?;
    Ok(result.last_insert_id)
}
