//! Report Models

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Aggregate dashboard statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalSalesToday")]
    pub total_sales_today: Decimal,
    #[serde(rename = "lowStockCount")]
    pub low_stock_count: u32,
}

/// Best-selling product row.
#[derive(Debug, Clone, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub total_sold: u64,
}

/// Sales total for a single day.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySales {
    pub date: Date,
    pub total: Decimal,
}
