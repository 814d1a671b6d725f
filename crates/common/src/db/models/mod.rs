//! SeaORM entity models
//!
//! Entities for the pre-existing catalog tables. Field names are the column
//! names, so serialized rows keep the shape the mobile client reads.

mod producto;
mod proveedor;
mod detalle_producto;

pub use producto::{
    Entity as ProductoEntity,
    Model as Producto,
    ActiveModel as ProductoActiveModel,
    Column as ProductoColumn,
};

pub use proveedor::{
    Entity as ProveedorEntity,
    Model as Proveedor,
    ActiveModel as ProveedorActiveModel,
    Column as ProveedorColumn,
};

pub use detalle_producto::{
    Entity as DetalleProductoEntity,
    Model as DetalleProducto,
    ActiveModel as DetalleProductoActiveModel,
    Column as DetalleProductoColumn,
    Relation as DetalleProductoRelation,
};
