//! Cart errors.

use thiserror::Error;

/// Errors raised by cart operations.
///
/// Every failing operation leaves the cart exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("no more stock available for {name}")]
    StockExceeded { name: String, stock: u32 },

    #[error("product not found in catalog")]
    UnknownProduct,

    #[error("item name must not be empty")]
    EmptyName,

    #[error("item price must be greater than zero")]
    InvalidPrice,

    #[error("item quantity must be at least one")]
    InvalidQuantity,

    #[error("cart is empty")]
    EmptyCart,
}
