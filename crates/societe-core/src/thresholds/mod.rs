pub mod catalog;
pub mod evaluator;

pub use catalog::{ThresholdCatalog, ThresholdCategory, ThresholdDefinition};
pub use evaluator::{evaluate_thresholds, sort_alerts, AlertSeverity, ThresholdAlert};
