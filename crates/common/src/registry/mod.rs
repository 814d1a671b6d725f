//! In-memory product registry
//!
//! Backs `POST /api/productos` and `GET /api/productos/memoria`. Entries live
//! only as long as the process: nothing is persisted and a restart starts
//! from an empty list. This is a known limitation of the endpoint.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::metrics;

/// Body of `POST /api/productos`; every field is free-form JSON
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterProductRequest {
    #[serde(default)]
    pub producto: serde_json::Value,
    #[serde(default)]
    pub vendedor: serde_json::Value,
    #[serde(default)]
    pub detalle: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredProduct {
    pub id: u64,
    pub producto: serde_json::Value,
    pub vendedor: serde_json::Value,
    pub detalle: serde_json::Value,
    /// RFC 3339, millisecond precision
    pub created_at: String,
}

/// Process-scoped, append-only product list
#[derive(Clone, Default)]
pub struct ProductRegistry {
    entries: Arc<Mutex<Vec<RegisteredProduct>>>,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product; ids start at 1 and follow insertion order.
    pub async fn create(&self, request: RegisterProductRequest) -> RegisteredProduct {
        let mut entries = self.entries.lock().await;

        let product = RegisteredProduct {
            id: entries.len() as u64 + 1,
            producto: request.producto,
            vendedor: request.vendedor,
            detalle: request.detalle,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        entries.push(product.clone());
        metrics::record_registry_size(entries.len());

        product
    }

    /// Snapshot of every product in insertion order
    pub async fn list(&self) -> Vec<RegisteredProduct> {
        self.entries.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Drop every entry. Called on shutdown.
    pub async fn clear(&self) {
        let mut entries = self.entries.lock().await;
        entries.clear();
        metrics::record_registry_size(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(name: &str) -> RegisterProductRequest {
        RegisterProductRequest {
            producto: json!(name),
            vendedor: json!("Tienda Central"),
            detalle: json!({ "color": "verde" }),
        }
    }

    #[tokio::test]
    async fn test_ids_follow_insertion_order() {
        let registry = ProductRegistry::new();
        for name in ["a", "b", "c"] {
            registry.create(request(name)).await;
        }

        let items = registry.list().await;
        assert_eq!(items.len(), 3);
        assert_eq!(items.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(items[0].producto, json!("a"));
        assert_eq!(items[2].producto, json!("c"));
    }

    #[tokio::test]
    async fn test_fresh_registry_is_empty() {
        let registry = ProductRegistry::new();
        registry.create(request("a")).await;

        // A new registry models a process restart
        let restarted = ProductRegistry::new();
        assert!(restarted.is_empty().await);
        assert!(restarted.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_clear() {
        let registry = ProductRegistry::new();
        registry.create(request("a")).await;
        registry.clear().await;
        assert_eq!(registry.len().await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let registry = ProductRegistry::new();
        let handles: Vec<_> = (0..20)
            .map(|i| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.create(request(&i.to_string())).await.id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
    }

    #[test]
    fn test_serialized_shape() {
        let product = RegisteredProduct {
            id: 1,
            producto: json!("a"),
            vendedor: json!(null),
            detalle: json!(null),
            created_at: "2025-01-01T00:00:00.000Z".into(),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["id"], json!(1));
    }
}
