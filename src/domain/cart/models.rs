//! Cart Models

use rust_decimal::Decimal;

use crate::domain::catalog::{CatalogSnapshot, Product, ProductId};

use super::errors::CartError;

/// Key of a manually entered line, unique within its cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManualLineKey(u64);

/// Unique key of a cart line.
///
/// Catalog-backed lines are keyed by their product id so repeated adds merge
/// into one line; manual lines get a fresh generated key on every add and
/// can therefore never collide with a catalog line or with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKey {
    Product(ProductId),
    Manual(ManualLineKey),
}

/// A single line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartLine {
    /// Line backed by a catalog product, constrained by its stock.
    Catalog {
        product: ProductId,
        /// Unit price captured when the line was first added.
        price: Decimal,
        quantity: u32,
    },

    /// Free-text line with no catalog identifier and no stock ceiling.
    Manual {
        key: ManualLineKey,
        name: String,
        price: Decimal,
        quantity: u32,
    },
}

impl CartLine {
    /// The unique key of this line within its cart.
    #[must_use]
    pub fn key(&self) -> LineKey {
        match self {
            Self::Catalog { product, .. } => LineKey::Product(*product),
            Self::Manual { key, .. } => LineKey::Manual(*key),
        }
    }

    /// Unit price captured at add time; never re-resolved afterwards.
    #[must_use]
    pub fn price(&self) -> Decimal {
        match self {
            Self::Catalog { price, .. } | Self::Manual { price, .. } => *price,
        }
    }

    /// Current quantity, always at least one.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        match self {
            Self::Catalog { quantity, .. } | Self::Manual { quantity, .. } => *quantity,
        }
    }

    /// Price × quantity for this line.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price() * Decimal::from(self.quantity())
    }

    #[must_use]
    pub fn is_manual(&self) -> bool {
        matches!(self, Self::Manual { .. })
    }

    fn set_quantity(&mut self, value: u32) {
        match self {
            Self::Catalog { quantity, .. } | Self::Manual { quantity, .. } => *quantity = value,
        }
    }
}

/// In-memory shopping cart.
///
/// An ordered collection of lines, each under a unique [`LineKey`]. Every
/// operation is all-or-nothing: on error the cart is left untouched.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_manual_key: u64,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines, not units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Looks up a line by key.
    #[must_use]
    pub fn line(&self, key: LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.key() == key)
    }

    /// Quantity currently in the cart for `key`; zero when absent.
    #[must_use]
    pub fn quantity_of(&self, key: LineKey) -> u32 {
        self.line(key).map_or(0, CartLine::quantity)
    }

    /// Adds one unit of a catalog product, merging into the existing line
    /// for the same product when present.
    ///
    /// The resulting quantity may not exceed the product's current stock.
    /// This is a hard ceiling, not a clamp: the attempt is rejected outright
    /// and the cart left unchanged. A product with stock 0 is rejected on
    /// the first add.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] when the product has no stock
    /// left for another unit.
    pub fn add_product(&mut self, product: &Product) -> Result<LineKey, CartError> {
        let key = LineKey::Product(product.id);
        let in_cart = self.quantity_of(key);

        if in_cart >= product.stock {
            return Err(CartError::StockExceeded {
                name: product.name.clone(),
                stock: product.stock,
            });
        }

        if let Some(line) = self.line_mut(key) {
            line.set_quantity(in_cart + 1);
        } else {
            self.lines.push(CartLine::Catalog {
                product: product.id,
                price: product.price,
                quantity: 1,
            });
        }

        Ok(key)
    }

    /// Adds a free-text line with no stock ceiling.
    ///
    /// Each call inserts a new line under a fresh key, even when name and
    /// price match an existing manual line.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the name is blank, the price is not
    /// positive, or the quantity is zero. Nothing is mutated on error.
    pub fn add_manual(
        &mut self,
        name: &str,
        price: Decimal,
        quantity: u32,
    ) -> Result<LineKey, CartError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CartError::EmptyName);
        }

        if price <= Decimal::ZERO {
            return Err(CartError::InvalidPrice);
        }

        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let key = ManualLineKey(self.next_manual_key);
        self.next_manual_key += 1;

        self.lines.push(CartLine::Manual {
            key,
            name: name.to_string(),
            price,
            quantity,
        });

        Ok(LineKey::Manual(key))
    }

    /// Adjusts the quantity of the line at `key` by `delta`.
    ///
    /// Unknown keys and zero deltas are no-ops. A resulting quantity of zero
    /// or less removes the line. Increments on catalog-backed lines are
    /// checked against the product's current stock in `catalog`; manual
    /// lines have no upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] when a catalog-backed line's
    /// product is no longer in the snapshot, and [`CartError::StockExceeded`]
    /// when an increment would pass the stock ceiling. The cart is unchanged
    /// in both cases.
    pub fn change_quantity(
        &mut self,
        key: LineKey,
        delta: i32,
        catalog: &CatalogSnapshot,
    ) -> Result<(), CartError> {
        if delta == 0 {
            return Ok(());
        }

        let Some(line) = self.line(key) else {
            return Ok(());
        };

        let new_quantity = i64::from(line.quantity()) + i64::from(delta);

        if let CartLine::Catalog { product, .. } = line {
            let product = catalog.product(*product).ok_or(CartError::UnknownProduct)?;

            if delta > 0 && new_quantity > i64::from(product.stock) {
                return Err(CartError::StockExceeded {
                    name: product.name.clone(),
                    stock: product.stock,
                });
            }
        }

        if new_quantity <= 0 {
            self.remove_line(key);
        } else if let Some(line) = self.line_mut(key) {
            line.set_quantity(u32::try_from(new_quantity).unwrap_or(u32::MAX));
        }

        Ok(())
    }

    /// Removes the line at `key`; does nothing when absent.
    pub fn remove_line(&mut self, key: LineKey) {
        self.lines.retain(|line| line.key() != key);
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity over all lines, recomputed from scratch.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    fn line_mut(&mut self, key: LineKey) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.key() == key)
    }
}
