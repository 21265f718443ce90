// alerting/mod.rs - Threshold alerting over inventory record batches

mod engine;
mod handler;
mod rules;
mod store;

pub use engine::AlertEngine;
pub use handler::{AlertHandler, LogAlertHandler, MultiAlertHandler};
pub use rules::{Alert, AlertKind, AlertSeverity};
pub use store::AlertStore;
