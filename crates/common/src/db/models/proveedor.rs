//! Supplier entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "proveedor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_proveedor: i32,

    pub nombre: String,

    pub direcion: String,

    pub correo: String,

    #[sea_orm(nullable)]
    pub telefono: Option<String>,
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
