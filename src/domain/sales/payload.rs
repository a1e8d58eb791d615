//! Sale payload construction.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    cart::{Cart, CartLine, errors::CartError},
    catalog::{CatalogSnapshot, ProductId},
};

/// Name used when a catalog product disappeared between cart-add and
/// finalize. The sale goes through regardless.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown product";

/// One line of a sale payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadLine {
    /// Catalog product id; `None` for manual lines.
    pub id: Option<ProductId>,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    #[serde(rename = "isManual")]
    pub is_manual: bool,
}

/// Snapshot of a cart at finalize time, in the wire shape the sales
/// endpoint expects. Built once; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalePayload {
    pub cart: Vec<PayloadLine>,
    pub total: Decimal,
}

impl SalePayload {
    /// Builds the payload for the current cart.
    ///
    /// Manual lines keep the name and price captured at add time; catalog
    /// lines keep their frozen price but re-resolve the display name from
    /// `catalog`, falling back to [`UNKNOWN_PRODUCT_NAME`] when the product
    /// is gone.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyCart`] when the cart has no lines.
    pub fn from_cart(cart: &Cart, catalog: &CatalogSnapshot) -> Result<Self, CartError> {
        if cart.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let lines = cart
            .lines()
            .iter()
            .map(|line| match line {
                CartLine::Catalog {
                    product,
                    price,
                    quantity,
                } => PayloadLine {
                    id: Some(*product),
                    name: catalog
                        .product(*product)
                        .map_or_else(|| UNKNOWN_PRODUCT_NAME.to_string(), |p| p.name.clone()),
                    quantity: *quantity,
                    price: *price,
                    is_manual: false,
                },
                CartLine::Manual {
                    name,
                    price,
                    quantity,
                    ..
                } => PayloadLine {
                    id: None,
                    name: name.clone(),
                    quantity: *quantity,
                    price: *price,
                    is_manual: true,
                },
            })
            .collect();

        Ok(Self {
            cart: lines,
            total: cart.total(),
        })
    }
}
