//! Inventory metrics aggregation.
//!
//! Pure reductions over a record batch. Deterministic for a given input
//! sequence; input order only affects tie-breaks in the sorted category lists.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::config::AlertThresholds;
use crate::records::InventoryRecord;

/// Per-category accumulation, in first-seen category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAggregate {
    pub category: String,
    /// Records in the category
    pub total_count: usize,
    /// Records in the category with zero stock
    pub out_of_stock_count: usize,
    /// Units in stock across the category
    pub total_stock: u64,
    /// Queries across the category
    pub total_queries: u64,
}

impl CategoryAggregate {
    fn new(category: String) -> Self {
        Self {
            category,
            total_count: 0,
            out_of_stock_count: 0,
            total_stock: 0,
            total_queries: 0,
        }
    }

    /// Share of the category that is out of stock, as a percentage.
    /// 0 for an empty aggregate.
    pub fn out_of_stock_pct(&self) -> Decimal {
        if self.total_count == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.out_of_stock_count) / Decimal::from(self.total_count)
            * Decimal::from(100)
    }
}

/// Category with its record count, for the top-categories ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Category with its summed stock, for the stock breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStock {
    pub category: String,
    pub stock: u64,
}

/// Aggregate snapshot of a record batch.
///
/// Recomputed wholesale on every batch change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryMetrics {
    pub total_products: usize,
    pub total_stock: u64,
    /// Sum of stock x unit price over the batch
    pub total_value: Decimal,
    pub total_queries: u64,
    /// Records with zero stock
    pub out_of_stock_count: usize,
    /// Records with 0 < stock <= low_stock_max
    pub low_stock_count: usize,
    pub out_of_stock_pct: Decimal,
    pub low_stock_pct: Decimal,
    /// total_value / total_stock: the value of one average unit in stock,
    /// not the arithmetic mean of per-product prices
    pub average_price: Decimal,
    /// total_queries / total_products
    pub average_queries: Decimal,
    /// Top 5 categories by record count, descending; ties keep first-seen order
    pub top_categories_by_count: Vec<CategoryCount>,
    /// All categories by summed stock, descending; ties keep first-seen order
    pub stock_by_category: Vec<CategoryStock>,
}

/// Group a batch by its raw category strings, preserving first-seen order.
///
/// Shared with the alert rule engine's category pass. No key normalization:
/// "tools" and "Tools" are distinct categories, and the empty string is a
/// category like any other.
pub fn aggregate_categories(records: &[InventoryRecord]) -> Vec<CategoryAggregate> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut aggregates: Vec<CategoryAggregate> = Vec::new();

    for record in records {
        let slot = *index.entry(record.category.clone()).or_insert_with(|| {
            aggregates.push(CategoryAggregate::new(record.category.clone()));
            aggregates.len() - 1
        });

        let aggregate = &mut aggregates[slot];
        aggregate.total_count += 1;
        if record.stock == 0 {
            aggregate.out_of_stock_count += 1;
        }
        aggregate.total_stock += u64::from(record.stock);
        aggregate.total_queries += u64::from(record.query_count);
    }

    aggregates
}

/// Reduce a record batch into an aggregate snapshot.
///
/// Every division is zero-guarded: an empty batch yields all-zero scalars and
/// empty category lists rather than an error.
pub fn compute_metrics(
    records: &[InventoryRecord],
    thresholds: &AlertThresholds,
) -> InventoryMetrics {
    let total_products = records.len();
    let mut total_stock: u64 = 0;
    let mut total_value = Decimal::ZERO;
    let mut total_queries: u64 = 0;
    let mut out_of_stock_count = 0;
    let mut low_stock_count = 0;

    for record in records {
        total_stock += u64::from(record.stock);
        total_value += record.total_value();
        total_queries += u64::from(record.query_count);
        if record.stock == 0 {
            out_of_stock_count += 1;
        } else if record.stock <= thresholds.low_stock_max {
            low_stock_count += 1;
        }
    }

    let aggregates = aggregate_categories(records);

    let mut top_categories_by_count: Vec<CategoryCount> = aggregates
        .iter()
        .map(|a| CategoryCount {
            category: a.category.clone(),
            count: a.total_count,
        })
        .collect();
    // Vec::sort_by is stable: ties keep first-seen order
    top_categories_by_count.sort_by(|a, b| b.count.cmp(&a.count));
    top_categories_by_count.truncate(5);

    let mut stock_by_category: Vec<CategoryStock> = aggregates
        .iter()
        .map(|a| CategoryStock {
            category: a.category.clone(),
            stock: a.total_stock,
        })
        .collect();
    stock_by_category.sort_by(|a, b| b.stock.cmp(&a.stock));

    InventoryMetrics {
        total_products,
        total_stock,
        total_value,
        total_queries,
        out_of_stock_count,
        low_stock_count,
        out_of_stock_pct: percentage(out_of_stock_count, total_products),
        low_stock_pct: percentage(low_stock_count, total_products),
        average_price: ratio(total_value, total_stock),
        average_queries: ratio(Decimal::from(total_queries), total_products as u64),
        top_categories_by_count,
        stock_by_category,
    }
}

fn percentage(count: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(count) / Decimal::from(total) * Decimal::from(100)
}

fn ratio(numerator: Decimal, denominator: u64) -> Decimal {
    if denominator == 0 {
        return Decimal::ZERO;
    }
    numerator / Decimal::from(denominator)
}
