//! Catalog

pub mod models;
pub mod service;
pub mod snapshot;

pub use models::{Category, CategoryId, NewCategory, NewProduct, Product, ProductId, ProductUpdate};
pub use service::*;
pub use snapshot::CatalogSnapshot;
