//! Till Domain Concerns

pub mod cart;
pub mod catalog;
pub mod reports;
pub mod sales;
