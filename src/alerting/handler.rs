// alerting/handler.rs - Alert notification handlers

use super::{Alert, AlertSeverity};

/// Receives newly firing alerts after a regeneration.
pub trait AlertHandler: Send + Sync {
    /// Handle one newly firing, unresolved alert.
    fn handle(&self, alert: &Alert);
}

/// Handler that logs alerts through `tracing`, one level per severity.
#[derive(Clone)]
pub struct LogAlertHandler;

impl LogAlertHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogAlertHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertHandler for LogAlertHandler {
    fn handle(&self, alert: &Alert) {
        match alert.severity {
            AlertSeverity::Critical => {
                tracing::error!(
                    alert_id = %alert.id,
                    kind = %alert.kind,
                    subject = %alert.subject_label,
                    message = %alert.message,
                    "[ALERT:CRITICAL]"
                );
            }
            AlertSeverity::High => {
                tracing::warn!(
                    alert_id = %alert.id,
                    kind = %alert.kind,
                    subject = %alert.subject_label,
                    message = %alert.message,
                    "[ALERT:HIGH]"
                );
            }
            AlertSeverity::Medium | AlertSeverity::Low => {
                tracing::info!(
                    alert_id = %alert.id,
                    kind = %alert.kind,
                    subject = %alert.subject_label,
                    message = %alert.message,
                    severity = %alert.severity,
                    "[ALERT]"
                );
            }
        }
    }
}

/// Composite handler that fans alerts out to multiple handlers.
pub struct MultiAlertHandler {
    handlers: Vec<Box<dyn AlertHandler>>,
}

impl MultiAlertHandler {
    /// Create a new multi-handler
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Add a handler to the chain
    pub fn add_handler<H: AlertHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }
}

impl Default for MultiAlertHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertHandler for MultiAlertHandler {
    fn handle(&self, alert: &Alert) {
        for handler in &self.handlers {
            handler.handle(alert);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerting::AlertKind;
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct CountingHandler {
        count: Arc<Mutex<usize>>,
    }

    impl CountingHandler {
        fn new() -> Self {
            Self {
                count: Arc::new(Mutex::new(0)),
            }
        }

        fn get_count(&self) -> usize {
            *self.count.lock().unwrap()
        }
    }

    impl AlertHandler for CountingHandler {
        fn handle(&self, _alert: &Alert) {
            *self.count.lock().unwrap() += 1;
        }
    }

    fn sample_alert(kind: AlertKind) -> Alert {
        Alert::fire(
            kind,
            "p1",
            "Drill",
            Decimal::ZERO,
            Decimal::ZERO,
            "Drill has no stock available".to_string(),
        )
    }

    #[test]
    fn test_log_handler_does_not_panic() {
        let handler = LogAlertHandler::new();
        handler.handle(&sample_alert(AlertKind::StockOut));
        handler.handle(&sample_alert(AlertKind::HighPrice));
    }

    #[test]
    fn test_multi_handler_calls_all_handlers() {
        let first = CountingHandler::new();
        let second = CountingHandler::new();
        let first_probe = first.clone();
        let second_probe = second.clone();

        let multi = MultiAlertHandler::new().add_handler(first).add_handler(second);
        multi.handle(&sample_alert(AlertKind::StockOut));

        assert_eq!(first_probe.get_count(), 1);
        assert_eq!(second_probe.get_count(), 1);
    }
}
