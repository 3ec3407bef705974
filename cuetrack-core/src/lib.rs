//! Cuetrack Core Library
//!
//! This library resolves which timestamped records of a playback timeline are
//! current, visible or active at a given playback time.

pub mod record;
pub mod resolver;
pub mod scan;
pub mod sweep;
pub mod time;
pub mod timeline;

#[cfg(feature = "serde")]
pub mod json;

pub use record::{ClearTime, Record, CLEAR_UNSET};
pub use resolver::{
    current_index, current_interval, is_active, is_enabled, is_visible, was_cleared, Interval,
};
pub use sweep::{StateChange, SweepConfig};
pub use timeline::{PlaybackState, Timeline};

/// Result type for cuetrack-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cuetrack-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a sequence of records, found {0}")]
    NotASequence(&'static str),

    #[error("Invalid time value: {0}")]
    InvalidTime(f64),

    #[error("Invalid sweep step: {0}")]
    InvalidStep(f64),

    #[error("Sweep would take {samples} samples, more than the limit of {max}")]
    TooManySamples { samples: f64, max: u64 },
}
