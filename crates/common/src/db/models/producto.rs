//! Product entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "producto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_producto: i32,

    pub nombre: String,

    pub valor_unit: f64,

    #[sea_orm(nullable)]
    pub caregoria: Option<String>,

    /// Searchable reference code, e.g. `REF-001`
    pub referencia: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::detalle_producto::Entity")]
    DetalleProducto,
}

impl Related<super::detalle_producto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetalleProducto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
