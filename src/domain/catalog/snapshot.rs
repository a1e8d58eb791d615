//! Catalog snapshot.

use rustc_hash::FxHashMap;

use super::models::{CategoryId, Product, ProductId};

/// Read-only, indexed copy of the product catalog.
///
/// Replaced wholesale on refresh. Cart mutations resolve stock and names
/// against the latest snapshot at the moment they run, so a refresh racing
/// with in-flight edits is tolerated.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    products: Vec<Product>,
    by_id: FxHashMap<ProductId, usize>,
    by_barcode: FxHashMap<String, usize>,
}

impl CatalogSnapshot {
    /// Build a snapshot from a fetched product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut by_id = FxHashMap::default();
        let mut by_barcode = FxHashMap::default();

        for (index, product) in products.iter().enumerate() {
            by_id.insert(product.id, index);

            if let Some(barcode) = &product.barcode {
                by_barcode.insert(barcode.clone(), index);
            }
        }

        Self {
            products,
            by_id,
            by_barcode,
        }
    }

    /// Products in the order the backend returned them.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.by_id
            .get(&id)
            .and_then(|&index| self.products.get(index))
    }

    /// Look up a product by exact barcode match.
    #[must_use]
    pub fn find_by_barcode(&self, barcode: &str) -> Option<&Product> {
        self.by_barcode
            .get(barcode)
            .and_then(|&index| self.products.get(index))
    }

    /// Products whose name contains `term` (case-insensitive) or whose
    /// barcode contains it verbatim. A blank term matches everything.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.trim();

        if term.is_empty() {
            return self.products.iter().collect();
        }

        let needle = term.to_lowercase();

        self.products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product
                        .barcode
                        .as_deref()
                        .is_some_and(|barcode| barcode.contains(term))
            })
            .collect()
    }

    /// Products belonging to the given category.
    #[must_use]
    pub fn in_category(&self, category: CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category_id == Some(category))
            .collect()
    }
}
