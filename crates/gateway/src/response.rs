//! Response envelope shared by the write endpoints
//!
//! `{code, data, message}` plus flattened extras, the shape the mobile client
//! already parses.

use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            data,
            message: Some(message.into()),
        }
    }

    /// Envelope without a message
    pub fn data(status: StatusCode, data: T) -> Self {
        Self {
            code: status.as_u16(),
            data,
            message: None,
        }
    }
}

/// Body of a successful `POST /api/detalle-producto`; `data` is the detail id
#[derive(Debug, Serialize)]
pub struct CreatedDetailResponse {
    #[serde(flatten)]
    pub envelope: Envelope<i32>,
    #[serde(rename = "productoId")]
    pub producto_id: i32,
    #[serde(rename = "proveedorId")]
    pub proveedor_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_detail_shape() {
        let body = CreatedDetailResponse {
            envelope: Envelope::new(StatusCode::CREATED, 7, "Detalle de producto creado correctamente"),
            producto_id: 3,
            proveedor_id: 4,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "code": 201,
                "data": 7,
                "message": "Detalle de producto creado correctamente",
                "productoId": 3,
                "proveedorId": 4
            })
        );
    }

    #[test]
    fn test_message_is_optional() {
        let body = Envelope::data(StatusCode::OK, vec![1, 2]);
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "code": 200, "data": [1, 2] }));
    }
}
