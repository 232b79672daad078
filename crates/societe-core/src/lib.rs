pub mod error;
pub mod types;

#[cfg(feature = "thresholds")]
pub mod thresholds;

#[cfg(feature = "simulation")]
pub mod simulation;

#[cfg(feature = "advisor")]
pub mod advisor;

pub use error::SocieteError;
pub use types::*;

/// Standard result type for all engine operations
pub type SocieteResult<T> = Result<T, SocieteError>;
