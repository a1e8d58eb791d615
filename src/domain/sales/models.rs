//! Sales Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Sale identifier assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct SaleId(i64);

impl SaleId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for SaleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// A finalized sale as returned by the sales-history endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub sale_date: Timestamp,
    pub total_amount: Decimal,
    pub items: Vec<SaleItem>,
}

/// One line of a recorded sale.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleItem {
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "priceAtSale")]
    pub price_at_sale: Decimal,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserialises_a_sale_record() -> TestResult {
        let sale: Sale = serde_json::from_str(
            r#"{
                "id": 12,
                "sale_date": "2025-07-02T14:30:00Z",
                "total_amount": 130.5,
                "items": [
                    { "name": "Fernet 750ml", "quantity": 1, "priceAtSale": 85.0 },
                    { "name": "Bolsa", "quantity": 1, "priceAtSale": 45.5 }
                ]
            }"#,
        )?;

        assert_eq!(sale.id, SaleId::new(12));
        assert_eq!(sale.items.len(), 2);
        assert_eq!(sale.total_amount, Decimal::new(130_50, 2));

        Ok(())
    }
}
