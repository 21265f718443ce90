// inventory-core: metrics and alerting engine for the inventory dashboard
// The presentation layer supplies record batches and renders computed results

pub mod alerting;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod records;
pub mod reports;

// Re-export the main entry points for convenience
pub use alerting::{Alert, AlertEngine, AlertKind, AlertSeverity, AlertStore};
pub use config::{AlertThresholds, Settings};
pub use error::ConfigurationError;
pub use metrics::{compute_metrics, InventoryMetrics};
pub use records::{InventoryRecord, RecordFilter, StockStatus};
