// records/filter.rs - Batch filtering for the inventory listing

use super::{InventoryRecord, StockStatus};

/// Filter criteria for an inventory listing.
///
/// All criteria are optional and combine with AND. The search term matches
/// case-insensitively against the product name or the category; the category
/// criterion is an exact (case-sensitive) match, mirroring the raw grouping
/// key.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<StockStatus>,
}

impl RecordFilter {
    /// Filter with no criteria (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Set the exact category criterion.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the stock-status criterion.
    pub fn with_status(mut self, status: StockStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether a single record passes every configured criterion.
    pub fn matches(&self, record: &InventoryRecord, low_stock_max: u32) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let in_name = record.name.to_lowercase().contains(&term);
            let in_category = record.category.to_lowercase().contains(&term);
            if !in_name && !in_category {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &record.category != category {
                return false;
            }
        }

        if let Some(status) = self.status {
            if record.stock_status(low_stock_max) != status {
                return false;
            }
        }

        true
    }

    /// Apply the filter to a batch, preserving input order.
    pub fn apply<'a>(
        &self,
        records: &'a [InventoryRecord],
        low_stock_max: u32,
    ) -> Vec<&'a InventoryRecord> {
        records
            .iter()
            .filter(|record| self.matches(record, low_stock_max))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn batch() -> Vec<InventoryRecord> {
        vec![
            InventoryRecord::new("p1", "Cordless Drill", "Tools", Decimal::from(120), 0, 40),
            InventoryRecord::new("p2", "Claw Hammer", "Tools", Decimal::from(25), 7, 3),
            InventoryRecord::new("p3", "LED Monitor", "Electronics", Decimal::from(300), 15, 80),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let records = batch();
        assert_eq!(RecordFilter::new().apply(&records, 10).len(), 3);
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let records = batch();
        let filtered = RecordFilter::new().with_search("drill").apply(&records, 10);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "p1");
    }

    #[test]
    fn test_search_matches_category() {
        let records = batch();
        let filtered = RecordFilter::new().with_search("TOOLS").apply(&records, 10);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let records = batch();
        assert_eq!(
            RecordFilter::new().with_category("Tools").apply(&records, 10).len(),
            2
        );
        // Raw grouping key: no case folding
        assert!(RecordFilter::new().with_category("tools").apply(&records, 10).is_empty());
    }

    #[test]
    fn test_status_filter_boundaries() {
        let records = batch();

        let out = RecordFilter::new().with_status(StockStatus::OutOfStock).apply(&records, 10);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "p1");

        let low = RecordFilter::new().with_status(StockStatus::LowStock).apply(&records, 10);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].id, "p2");

        let in_stock = RecordFilter::new().with_status(StockStatus::InStock).apply(&records, 10);
        assert_eq!(in_stock.len(), 1);
        assert_eq!(in_stock[0].id, "p3");
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let records = batch();
        let filtered = RecordFilter::new()
            .with_search("tools")
            .with_status(StockStatus::LowStock)
            .apply(&records, 10);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "p2");
    }
}
