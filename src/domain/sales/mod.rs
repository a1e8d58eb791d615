//! Sales

pub mod models;
pub mod payload;
pub mod service;

pub use models::{Sale, SaleId, SaleItem};
pub use payload::{PayloadLine, SalePayload, UNKNOWN_PRODUCT_NAME};
pub use service::*;
