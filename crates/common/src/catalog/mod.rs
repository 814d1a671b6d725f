//! Catalog service
//!
//! Orchestrates the two database-backed operations of the API:
//! - the transactional product + supplier + detail write
//! - the detail search over the joined tables
//!
//! Validation always runs before a connection is checked out, so a rejected
//! request never opens a transaction.

mod input;

pub use input::{validate_pair, CreateDetailRequest, ProductInput, SupplierInput};

use std::time::Instant;

use tracing::{info, instrument, warn};

use crate::db::models::{Producto, Proveedor};
use crate::db::{CreatedDetail, DbPool, DetailQuery, DetailView, Repository};
use crate::errors::Result;
use crate::metrics;

#[derive(Clone)]
pub struct CatalogService {
    repo: Repository,
}

impl CatalogService {
    pub fn new(pool: DbPool) -> Self {
        Self {
            repo: Repository::new(pool),
        }
    }

    /// Validate, then insert product, supplier and detail atomically.
    #[instrument(skip_all, fields(referencia = ?product.referencia))]
    pub async fn create_detail(
        &self,
        product: ProductInput,
        supplier: SupplierInput,
    ) -> Result<CreatedDetail> {
        let (new_product, new_supplier) = validate_pair(product, supplier)?;

        let start = Instant::now();
        match self.repo.create_detail(new_product, new_supplier).await {
            Ok(created) => {
                metrics::record_detail_created(start.elapsed().as_secs_f64());
                info!(
                    detail_id = created.detail_id,
                    product_id = created.product_id,
                    supplier_id = created.supplier_id,
                    "Detail created"
                );
                Ok(created)
            }
            Err(e) => {
                metrics::record_detail_failed();
                warn!(error = %e, "Detail creation rolled back");
                Err(e)
            }
        }
    }

    /// Joined detail rows, optionally filtered by product name or reference.
    #[instrument(skip(self))]
    pub async fn list_details(&self, search_term: Option<&str>) -> Result<Vec<DetailView>> {
        let query = DetailQuery::new().search(search_term);

        let start = Instant::now();
        let rows = self.repo.list_details(&query).await?;
        metrics::record_search(
            start.elapsed().as_secs_f64(),
            query.term().is_some(),
            rows.len(),
        );

        Ok(rows)
    }

    pub async fn list_products(&self) -> Result<Vec<Producto>> {
        self.repo.list_products().await
    }

    pub async fn list_suppliers(&self) -> Result<Vec<Proveedor>> {
        self.repo.list_suppliers().await
    }

    pub async fn ping(&self) -> Result<()> {
        self.repo.ping().await
    }
}
