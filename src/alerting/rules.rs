// alerting/rules.rs - Alert model and threshold rule evaluation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::config::AlertThresholds;
use crate::metrics::CategoryAggregate;
use crate::records::InventoryRecord;

/// Severity levels for alerts. Fixed per alert kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low = 0,
    Medium = 1,
    High = 2,
    Critical = 3,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertSeverity::Low => write!(f, "LOW"),
            AlertSeverity::Medium => write!(f, "MEDIUM"),
            AlertSeverity::High => write!(f, "HIGH"),
            AlertSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// The fixed set of alert rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// A product has zero stock
    StockOut,
    /// A product is within the low-stock band
    StockLow,
    /// A product draws more queries than the interest threshold
    HighInterest,
    /// A product is priced above the price threshold
    HighPrice,
    /// A category's out-of-stock share exceeds the risk threshold
    CategoryAtRisk,
}

impl AlertKind {
    /// Severity is a fixed property of the kind.
    pub fn severity(self) -> AlertSeverity {
        match self {
            AlertKind::StockOut => AlertSeverity::Critical,
            AlertKind::StockLow => AlertSeverity::High,
            AlertKind::HighInterest => AlertSeverity::Medium,
            AlertKind::HighPrice => AlertSeverity::Low,
            AlertKind::CategoryAtRisk => AlertSeverity::High,
        }
    }

    /// Stable id prefix. Combined with the subject id this makes alert
    /// identity deterministic across regenerations, which is what lets
    /// resolution state survive a data refresh.
    pub fn id_prefix(self) -> &'static str {
        match self {
            AlertKind::StockOut => "stock-out",
            AlertKind::StockLow => "stock-low",
            AlertKind::HighInterest => "interest",
            AlertKind::HighPrice => "price",
            AlertKind::CategoryAtRisk => "category",
        }
    }

    /// Deterministic alert id for this kind and subject.
    pub fn alert_id(self, subject_id: &str) -> String {
        format!("{}-{}", self.id_prefix(), subject_id)
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id_prefix())
    }
}

/// An alert produced by the rule engine.
///
/// Identity (`id`) is a pure function of kind and subject; `created_at` and
/// `resolved` are the only fields that can differ between regenerations of the
/// same firing condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub id: String,
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    /// Product id, or category name for category alerts
    pub subject_id: String,
    /// Product name, or category name for category alerts
    pub subject_label: String,
    /// Measured value that fired the rule
    pub value: Decimal,
    /// Rule threshold in effect when the rule fired
    pub threshold: Decimal,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// User-acknowledged flag. Starts false; set only by explicit action,
    /// never auto-resolved.
    pub resolved: bool,
}

impl Alert {
    pub(super) fn fire(
        kind: AlertKind,
        subject_id: impl Into<String>,
        subject_label: impl Into<String>,
        value: Decimal,
        threshold: Decimal,
        message: String,
    ) -> Self {
        let subject_id = subject_id.into();
        Self {
            id: kind.alert_id(&subject_id),
            kind,
            severity: kind.severity(),
            subject_id,
            subject_label: subject_label.into(),
            value,
            threshold,
            message,
            created_at: Utc::now(),
            resolved: false,
        }
    }
}

/// Stock rule: StockOut wins over StockLow; at most one fires per record.
pub fn stock_alert(record: &InventoryRecord, thresholds: &AlertThresholds) -> Option<Alert> {
    if record.stock == 0 {
        Some(Alert::fire(
            AlertKind::StockOut,
            &record.id,
            &record.name,
            Decimal::ZERO,
            Decimal::ZERO,
            format!("{} has no stock available", record.name),
        ))
    } else if record.stock <= thresholds.low_stock_max {
        Some(Alert::fire(
            AlertKind::StockLow,
            &record.id,
            &record.name,
            Decimal::from(record.stock),
            Decimal::from(thresholds.low_stock_max),
            format!("{} has only {} units left", record.name, record.stock),
        ))
    } else {
        None
    }
}

/// Interest rule: query count strictly above the threshold.
pub fn interest_alert(record: &InventoryRecord, thresholds: &AlertThresholds) -> Option<Alert> {
    if record.query_count <= thresholds.high_interest_min {
        return None;
    }
    Some(Alert::fire(
        AlertKind::HighInterest,
        &record.id,
        &record.name,
        Decimal::from(record.query_count),
        Decimal::from(thresholds.high_interest_min),
        format!("{} has {} queries", record.name, record.query_count),
    ))
}

/// Price rule: unit price strictly above the threshold.
pub fn price_alert(record: &InventoryRecord, thresholds: &AlertThresholds) -> Option<Alert> {
    let threshold = Decimal::from(thresholds.high_price_min);
    if record.price <= threshold {
        return None;
    }
    Some(Alert::fire(
        AlertKind::HighPrice,
        &record.id,
        &record.name,
        record.price,
        threshold,
        format!("{} is priced at ${}", record.name, record.price),
    ))
}

/// Category rule: out-of-stock share strictly above the risk threshold.
/// The subject is the category itself.
pub fn category_alert(
    aggregate: &CategoryAggregate,
    thresholds: &AlertThresholds,
) -> Option<Alert> {
    let pct = aggregate.out_of_stock_pct();
    let threshold = Decimal::from(thresholds.category_at_risk_pct);
    if pct <= threshold {
        return None;
    }
    Some(Alert::fire(
        AlertKind::CategoryAtRisk,
        &aggregate.category,
        &aggregate.category,
        pct,
        threshold,
        format!(
            "{} has {:.1}% of products out of stock",
            aggregate.category, pct
        ),
    ))
}
