//! Point-of-sale register session.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    api::ApiError,
    domain::{
        cart::{Cart, CartError, LineKey},
        catalog::{CatalogService, CatalogSnapshot, ProductId},
        sales::{SalePayload, SalesService},
    },
};

/// Errors raised while operating the register.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A cart validation or business rule was violated; nothing changed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The API request failed; the cart is left untouched for retry.
    #[error("api request failed")]
    Api(#[from] ApiError),
}

/// A single point-of-sale session: one cart, one catalog snapshot, and the
/// services used to finalize sales.
///
/// All cart mutations are synchronous; the only async operations are the
/// catalog refresh and the sale submission. `&mut self` on
/// [`Register::finalize`] rules out concurrent finalize attempts.
#[derive(Clone)]
pub struct Register {
    catalog_service: Arc<dyn CatalogService>,
    sales_service: Arc<dyn SalesService>,
    snapshot: CatalogSnapshot,
    cart: Cart,
}

impl Register {
    /// Creates a register with an empty cart and an empty catalog snapshot.
    ///
    /// Call [`Register::refresh_catalog`] before selling.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>, sales: Arc<dyn SalesService>) -> Self {
        Self {
            catalog_service: catalog,
            sales_service: sales,
            snapshot: CatalogSnapshot::default(),
            cart: Cart::new(),
        }
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The latest catalog snapshot.
    #[must_use]
    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    /// Current cart total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Replaces the catalog snapshot with the latest product list.
    ///
    /// # Errors
    ///
    /// Returns an error when the product fetch fails; the previous snapshot
    /// is kept in that case.
    pub async fn refresh_catalog(&mut self) -> Result<(), ApiError> {
        let products = self.catalog_service.list_products().await?;

        info!(products = products.len(), "refreshed catalog");

        self.snapshot = CatalogSnapshot::new(products);

        Ok(())
    }

    /// Adds one unit of the product with `id` to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] when `id` is not in the
    /// snapshot, or [`CartError::StockExceeded`] when the stock ceiling is
    /// hit.
    pub fn add_product(&mut self, id: ProductId) -> Result<LineKey, CartError> {
        let product = self.snapshot.product(id).ok_or(CartError::UnknownProduct)?;

        self.cart.add_product(product)
    }

    /// Resolves a scanned barcode and adds the product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] when no product carries the
    /// barcode, or [`CartError::StockExceeded`] when the stock ceiling is
    /// hit.
    pub fn scan(&mut self, barcode: &str) -> Result<LineKey, CartError> {
        let product = self
            .snapshot
            .find_by_barcode(barcode.trim())
            .ok_or(CartError::UnknownProduct)?;

        self.cart.add_product(product)
    }

    /// Adds a free-text line to the cart.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name, non-positive price, or
    /// zero quantity.
    pub fn add_manual(
        &mut self,
        name: &str,
        price: Decimal,
        quantity: u32,
    ) -> Result<LineKey, CartError> {
        self.cart.add_manual(name, price, quantity)
    }

    /// Adjusts a line's quantity by `delta`, validating catalog-backed
    /// increments against the latest snapshot.
    ///
    /// # Errors
    ///
    /// See [`Cart::change_quantity`].
    pub fn change_quantity(&mut self, key: LineKey, delta: i32) -> Result<(), CartError> {
        self.cart.change_quantity(key, delta, &self.snapshot)
    }

    /// Removes a line; does nothing when absent.
    pub fn remove_line(&mut self, key: LineKey) {
        self.cart.remove_line(key);
    }

    /// Empties the cart. Confirmation is the caller's concern.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Finalizes the sale.
    ///
    /// Builds the payload, submits it, and on success clears the cart and
    /// refreshes the catalog snapshot, returning the submitted payload as
    /// the receipt. A failed submission leaves the cart untouched so the
    /// sale can be retried.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Cart`] for an empty cart and
    /// [`CheckoutError::Api`] when the submission fails.
    #[tracing::instrument(name = "register.finalize", skip(self), err)]
    pub async fn finalize(&mut self) -> Result<SalePayload, CheckoutError> {
        let payload = SalePayload::from_cart(&self.cart, &self.snapshot)?;

        self.sales_service.submit_sale(&payload).await?;

        info!(total = %payload.total, lines = payload.cart.len(), "sale finalized");

        self.cart.clear();

        // The sale is already recorded; a failed refresh only leaves the
        // snapshot stale until the next one.
        if let Err(error) = self.refresh_catalog().await {
            warn!(error = %error, "catalog refresh after sale failed");
        }

        Ok(payload)
    }
}
