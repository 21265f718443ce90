// alerting/engine.rs - Wholesale alert regeneration over a record batch

use std::collections::HashSet;
use tracing::debug;

use crate::config::AlertThresholds;
use crate::metrics::aggregate_categories;
use crate::records::InventoryRecord;

use super::rules;
use super::Alert;

/// Evaluates the threshold rule table against a record batch.
///
/// The engine regenerates the entire alert collection on every call; there is
/// no incremental diffing. Correctness across refreshes rests on deterministic
/// alert ids, not on object identity.
#[derive(Debug, Clone)]
pub struct AlertEngine {
    thresholds: AlertThresholds,
}

impl AlertEngine {
    /// Create an engine with the given thresholds.
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self { thresholds }
    }

    /// The thresholds this engine evaluates against.
    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Generate the full alert set for a batch.
    ///
    /// Two passes: per-record rules in input order (stock, then interest, then
    /// price — a record can contribute up to three alerts), then per-category
    /// rules over the grouped batch in first-seen category order.
    ///
    /// Alerts whose id appears in `resolved_ids` are emitted with
    /// `resolved = true`; resolved alerts are never dropped here — hiding them
    /// from active listings is the store's concern.
    pub fn generate(
        &self,
        records: &[InventoryRecord],
        resolved_ids: &HashSet<String>,
    ) -> Vec<Alert> {
        let mut alerts = Vec::new();

        for record in records {
            if let Some(alert) = rules::stock_alert(record, &self.thresholds) {
                alerts.push(alert);
            }
            if let Some(alert) = rules::interest_alert(record, &self.thresholds) {
                alerts.push(alert);
            }
            if let Some(alert) = rules::price_alert(record, &self.thresholds) {
                alerts.push(alert);
            }
        }

        for aggregate in aggregate_categories(records) {
            if let Some(alert) = rules::category_alert(&aggregate, &self.thresholds) {
                alerts.push(alert);
            }
        }

        let mut resolved_count = 0;
        for alert in &mut alerts {
            if resolved_ids.contains(&alert.id) {
                alert.resolved = true;
                resolved_count += 1;
            }
        }

        debug!(
            records = records.len(),
            alerts = alerts.len(),
            resolved = resolved_count,
            "regenerated alert batch"
        );

        alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerting::{AlertKind, AlertSeverity};
    use rust_decimal::Decimal;

    fn record(id: &str, category: &str, price: u32, stock: u32, queries: u32) -> InventoryRecord {
        InventoryRecord::new(id, format!("Product {id}"), category, Decimal::from(price), stock, queries)
    }

    fn engine() -> AlertEngine {
        AlertEngine::new(AlertThresholds::default())
    }

    #[test]
    fn test_empty_batch_yields_no_alerts() {
        assert!(engine().generate(&[], &HashSet::new()).is_empty());
    }

    #[test]
    fn test_lone_out_of_stock_record() {
        // One record, out of stock: a StockOut alert plus a CategoryAtRisk
        // alert for its category (100% > 30%), nothing else
        let records = vec![record("p1", "Tools", 50, 0, 5)];

        let alerts = engine().generate(&records, &HashSet::new());

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].kind, AlertKind::StockOut);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[1].kind, AlertKind::CategoryAtRisk);
        assert_eq!(alerts[1].subject_id, "Tools");
        assert_eq!(alerts[1].value, Decimal::from(100));
    }

    #[test]
    fn test_high_interest_and_price_without_stock_alert() {
        let records = vec![record("p1", "Elec", 1500, 100, 75)];

        let alerts = engine().generate(&records, &HashSet::new());

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].kind, AlertKind::HighInterest);
        assert_eq!(alerts[1].kind, AlertKind::HighPrice);
    }

    #[test]
    fn test_record_can_contribute_three_alerts() {
        let records = vec![record("p1", "Elec", 1500, 2, 75)];

        let alerts = engine().generate(&records, &HashSet::new());
        let kinds: Vec<_> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![AlertKind::StockLow, AlertKind::HighInterest, AlertKind::HighPrice]
        );
    }

    #[test]
    fn test_generation_order_records_then_categories() {
        let records = vec![
            record("p1", "A", 10, 0, 0),
            record("p2", "B", 10, 0, 0),
        ];

        let alerts = engine().generate(&records, &HashSet::new());
        let ids: Vec<_> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["stock-out-p1", "stock-out-p2", "category-A", "category-B"]
        );
    }

    #[test]
    fn test_generate_is_idempotent() {
        let records = vec![
            record("p1", "Tools", 1500, 0, 75),
            record("p2", "Tools", 10, 30, 0),
        ];
        let resolved: HashSet<String> = ["stock-out-p1".to_string()].into_iter().collect();

        let first = engine().generate(&records, &resolved);
        let second = engine().generate(&records, &resolved);

        let identity = |alerts: &[Alert]| -> Vec<(String, bool)> {
            alerts.iter().map(|a| (a.id.clone(), a.resolved)).collect()
        };
        assert_eq!(identity(&first), identity(&second));
    }

    #[test]
    fn test_resolved_ids_are_marked_not_dropped() {
        let records = vec![record("p1", "Tools", 50, 0, 5)];
        let resolved: HashSet<String> = ["stock-out-p1".to_string()].into_iter().collect();

        let alerts = engine().generate(&records, &resolved);

        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].resolved);
        assert!(!alerts[1].resolved);
    }

    #[test]
    fn test_stale_resolved_ids_are_ignored() {
        let records = vec![record("p1", "Tools", 50, 20, 5)];
        let resolved: HashSet<String> = ["stock-out-gone".to_string()].into_iter().collect();

        let alerts = engine().generate(&records, &resolved);
        assert!(alerts.is_empty());
    }
}
