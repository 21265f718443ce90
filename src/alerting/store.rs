// alerting/store.rs - In-memory alert lifecycle store

use std::collections::HashSet;
use tracing::debug;

use crate::config::AlertThresholds;
use crate::records::InventoryRecord;

use super::{Alert, AlertEngine, AlertHandler, AlertKind, AlertSeverity};

/// Holds the current alert batch and its resolution bookkeeping.
///
/// All mutation goes through `&mut self`, so a resolve can never interleave
/// with a regeneration: a resolution applied to an alert id still firing in
/// the next batch is always carried over.
pub struct AlertStore {
    engine: AlertEngine,
    alerts: Vec<Alert>,
    handler: Option<Box<dyn AlertHandler>>,
}

impl AlertStore {
    /// Create a store with an engine over the given thresholds.
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self {
            engine: AlertEngine::new(thresholds),
            alerts: Vec::new(),
            handler: None,
        }
    }

    /// Attach a handler notified of newly firing, unresolved alerts.
    pub fn with_handler<H: AlertHandler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Re-run the rule engine for a changed record batch and replace the
    /// alert collection wholesale.
    ///
    /// The resolved-id set is extracted from the alerts currently held, so
    /// resolution survives the refresh for every id the engine regenerates.
    /// An alert whose firing condition cleared is simply absent from the new
    /// batch, resolved or not.
    pub fn regenerate(&mut self, records: &[InventoryRecord]) {
        let resolved_ids: HashSet<String> = self
            .alerts
            .iter()
            .filter(|alert| alert.resolved)
            .map(|alert| alert.id.clone())
            .collect();
        let previous_ids: HashSet<String> =
            self.alerts.iter().map(|alert| alert.id.clone()).collect();

        let alerts = self.engine.generate(records, &resolved_ids);

        if let Some(handler) = &self.handler {
            for alert in &alerts {
                if !alert.resolved && !previous_ids.contains(&alert.id) {
                    handler.handle(alert);
                }
            }
        }

        self.alerts = alerts;
    }

    /// Mark the alert with this id resolved. Unknown ids are a no-op.
    pub fn resolve(&mut self, alert_id: &str) {
        let mut matched = false;
        for alert in &mut self.alerts {
            if alert.id == alert_id {
                alert.resolved = true;
                matched = true;
            }
        }

        if matched {
            debug!(alert_id, "alert resolved");
        } else {
            debug!(alert_id, "resolve ignored, no such alert");
        }
    }

    /// Unresolved alerts in generation order, optionally narrowed by exact
    /// kind and/or severity.
    pub fn active_alerts(
        &self,
        kind: Option<AlertKind>,
        severity: Option<AlertSeverity>,
    ) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|alert| !alert.resolved)
            .filter(|alert| kind.map_or(true, |k| alert.kind == k))
            .filter(|alert| severity.map_or(true, |s| alert.severity == s))
            .collect()
    }

    /// Resolved alerts, most recent first. The full set: the display cap
    /// belongs to the consuming view.
    pub fn resolved_alerts(&self) -> Vec<&Alert> {
        let mut resolved: Vec<&Alert> = self.alerts.iter().filter(|a| a.resolved).collect();
        resolved.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        resolved
    }

    /// The full current batch, resolved alerts included, in generation order.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }
}
