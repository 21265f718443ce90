use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One inventory item snapshot as supplied by the record source.
///
/// Records are immutable for the lifetime of a refresh cycle; every derived
/// value (metrics, rankings, alerts) is recomputed from a fresh batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryRecord {
    /// Unique identifier within a batch. Collisions are tolerated and not
    /// deduplicated; duplicate ids simply coexist.
    pub id: String,

    /// Human-readable product name
    pub name: String,

    /// Grouping key. Case-sensitive, no normalization; the empty string is a
    /// valid category of its own.
    pub category: String,

    /// Unit price. Non-negative by contract with the record source.
    pub price: Decimal,

    /// Units currently in stock
    pub stock: u32,

    /// Interest counter (customer queries/views)
    pub query_count: u32,

    /// Last-modified marker from the source sheet. Opaque, display-only;
    /// never parsed as a date for computation.
    #[serde(default)]
    pub last_updated: String,
}

impl InventoryRecord {
    /// New record with an empty `last_updated` marker.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
        stock: u32,
        query_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            query_count,
            last_updated: String::new(),
        }
    }

    /// Total value held in stock for this record (stock x unit price).
    pub fn total_value(&self) -> Decimal {
        Decimal::from(self.stock) * self.price
    }

    /// Stock status bucket for the given low-stock bound.
    pub fn stock_status(&self, low_stock_max: u32) -> StockStatus {
        if self.stock == 0 {
            StockStatus::OutOfStock
        } else if self.stock <= low_stock_max {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Stock level bucket derived from a record and the configured low-stock bound.
///
/// `OutOfStock` and `LowStock` are mutually exclusive: a record with zero stock
/// is never low-stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}
