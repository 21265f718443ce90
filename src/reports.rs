//! Report rankings over a record batch.
//!
//! Pure reductions backing the reports and trends views: query-interest
//! breakdowns, product rankings, and an engagement summary. All sorts are
//! stable and descending; ties keep input (or first-seen) order.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::records::InventoryRecord;

/// Category with its summed query count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryQueries {
    pub category: String,
    pub queries: u64,
}

/// Product ranked by query interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductQueries {
    pub id: String,
    pub name: String,
    pub category: String,
    pub queries: u32,
}

/// Product ranked by total stock value (stock x unit price).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductValue {
    pub id: String,
    pub name: String,
    pub category: String,
    pub value: Decimal,
}

/// Interest summary for the trends view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementSummary {
    /// Products with at least one query
    pub active_products: usize,
    /// Share of the batch with at least one query, as a percentage
    pub active_pct: Decimal,
    /// Mean queries per product
    pub average_queries: Decimal,
}

/// Sum queries per category, descending; ties keep first-seen order.
pub fn queries_by_category(records: &[InventoryRecord]) -> Vec<CategoryQueries> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<CategoryQueries> = Vec::new();

    for record in records {
        let slot = *index.entry(record.category.clone()).or_insert_with(|| {
            totals.push(CategoryQueries {
                category: record.category.clone(),
                queries: 0,
            });
            totals.len() - 1
        });
        totals[slot].queries += u64::from(record.query_count);
    }

    totals.sort_by(|a, b| b.queries.cmp(&a.queries));
    totals
}

/// Rank products by query count, descending, capped at `limit`.
pub fn top_products_by_queries(records: &[InventoryRecord], limit: usize) -> Vec<ProductQueries> {
    let mut ranked: Vec<ProductQueries> = records
        .iter()
        .map(|record| ProductQueries {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            queries: record.query_count,
        })
        .collect();

    ranked.sort_by(|a, b| b.queries.cmp(&a.queries));
    ranked.truncate(limit);
    ranked
}

/// Rank products by total stock value, descending, capped at `limit`.
pub fn top_products_by_value(records: &[InventoryRecord], limit: usize) -> Vec<ProductValue> {
    let mut ranked: Vec<ProductValue> = records
        .iter()
        .map(|record| ProductValue {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            value: record.total_value(),
        })
        .collect();

    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(limit);
    ranked
}

/// Summarize query engagement across the batch. Zero-guarded for empty input.
pub fn engagement_summary(records: &[InventoryRecord]) -> EngagementSummary {
    let total = records.len();
    let active_products = records.iter().filter(|r| r.query_count > 0).count();
    let total_queries: u64 = records.iter().map(|r| u64::from(r.query_count)).sum();

    let (active_pct, average_queries) = if total == 0 {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (
            Decimal::from(active_products) / Decimal::from(total) * Decimal::from(100),
            Decimal::from(total_queries) / Decimal::from(total),
        )
    };

    EngagementSummary {
        active_products,
        active_pct,
        average_queries,
    }
}
