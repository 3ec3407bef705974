//! Playback time helpers

use crate::{Error, Result};

/// Converts a timestamp in seconds to milliseconds
pub fn seconds_to_millis(seconds: f64) -> f64 {
    seconds * 1000.0
}

/// Converts milliseconds to seconds
pub fn millis_to_seconds(millis: f64) -> f64 {
    millis / 1000.0
}

/// Rejects NaN and infinite playback times
pub fn validate(time: f64) -> Result<f64> {
    if time.is_finite() {
        Ok(time)
    } else {
        Err(Error::InvalidTime(time))
    }
}
