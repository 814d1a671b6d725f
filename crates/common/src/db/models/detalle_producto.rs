//! Detail entity: links one product to one supplier

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "detalle_producto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_detalle: i32,

    pub id_producto: i32,

    pub id_proveedor: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::producto::Entity",
        from = "Column::IdProducto",
        to = "super::producto::Column::IdProducto"
    )]
    Producto,

    #[sea_orm(
        belongs_to = "super::proveedor::Entity",
        from = "Column::IdProveedor",
        to = "super::proveedor::Column::IdProveedor"
    )]
    Proveedor,
}

impl Related<super::producto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Producto.def()
    }
}

impl Related<super::proveedor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proveedor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
