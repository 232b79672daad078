pub mod advisor;
pub mod simulation;
pub mod thresholds;
