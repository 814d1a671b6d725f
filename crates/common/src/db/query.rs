//! Detail search query builder
//!
//! The join projection is assembled with SeaQuery; the optional search term
//! becomes a bound `LIKE` parameter and is never spliced into the SQL text.

use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    Condition, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};
use serde::{Deserialize, Serialize};

use super::models::{
    DetalleProductoColumn, DetalleProductoEntity, DetalleProductoRelation, ProductoColumn,
    ProductoEntity, ProveedorColumn,
};

/// Character used to escape LIKE wildcards in the search term
const LIKE_ESCAPE: char = '\\';

/// Flattened detail row: the detail plus its product and supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult)]
pub struct DetailView {
    pub id_detalle: i32,
    pub id_producto: i32,
    /// Product name
    pub producto: String,
    pub referencia: String,
    pub valor_unit: f64,
    pub caregoria: Option<String>,
    pub id_proveedor: i32,
    /// Supplier name
    pub proveedor: String,
    pub correo: String,
    pub telefono: Option<String>,
}

/// Builder for the detail listing query
#[derive(Debug, Clone, Default)]
pub struct DetailQuery {
    search: Option<String>,
}

impl DetailQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by product name or reference. Blank terms are ignored.
    pub fn search(mut self, term: Option<&str>) -> Self {
        self.search = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned);
        self
    }

    /// The effective (trimmed, non-blank) search term
    pub fn term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Finalize into a select over `detalle_producto` joined with both parents
    pub fn select(&self) -> Select<DetalleProductoEntity> {
        let mut query = DetalleProductoEntity::find()
            .select_only()
            .column(DetalleProductoColumn::IdDetalle)
            .column(ProductoColumn::IdProducto)
            .column_as(ProductoColumn::Nombre, "producto")
            .column(ProductoColumn::Referencia)
            .column(ProductoColumn::ValorUnit)
            .column(ProductoColumn::Caregoria)
            .column(ProveedorColumn::IdProveedor)
            .column_as(ProveedorColumn::Nombre, "proveedor")
            .column(ProveedorColumn::Correo)
            .column(ProveedorColumn::Telefono)
            .join(JoinType::InnerJoin, DetalleProductoRelation::Producto.def())
            .join(JoinType::InnerJoin, DetalleProductoRelation::Proveedor.def());

        if let Some(term) = self.term() {
            query = query.filter(search_condition(term));
        }

        query.order_by_desc(DetalleProductoColumn::IdDetalle)
    }
}

/// `producto.nombre LIKE ? OR producto.referencia LIKE ?`
fn search_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(term));

    Condition::any()
        .add(
            Expr::col((ProductoEntity, ProductoColumn::Nombre))
                .like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)),
        )
        .add(
            Expr::col((ProductoEntity, ProductoColumn::Referencia))
                .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
        )
}

/// Make `%`, `_` and the escape character match literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
