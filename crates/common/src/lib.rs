//! BackendApp Common Library
//!
//! Shared code for the catalog API including:
//! - Database entities, transaction scope and repository
//! - Catalog service (transactional write, detail search)
//! - In-memory product registry
//! - Error types and handling
//! - Configuration management
//! - Metrics

pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;
pub mod registry;

// Re-export commonly used types
pub use catalog::CatalogService;
pub use config::AppConfig;
pub use db::{DbPool, Repository};
pub use errors::{AppError, Result};
pub use registry::ProductRegistry;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
