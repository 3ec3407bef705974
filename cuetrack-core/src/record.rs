//! Timeline record data structures

/// Numeric clear time meaning "never cleared"
pub const CLEAR_UNSET: f64 = -1.0;

/// Time at which a record stops having effect
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "f64", into = "f64")
)]
pub enum ClearTime {
    /// The record is never cleared
    #[default]
    Never,
    /// The record is cleared once playback reaches this time (seconds)
    At(f64),
}

impl ClearTime {
    /// Returns the clear time, if one is set
    pub fn at(self) -> Option<f64> {
        match self {
            ClearTime::At(time) if time != CLEAR_UNSET => Some(time),
            _ => None,
        }
    }
}

impl From<f64> for ClearTime {
    fn from(value: f64) -> Self {
        if value == CLEAR_UNSET {
            ClearTime::Never
        } else {
            ClearTime::At(value)
        }
    }
}

impl From<ClearTime> for f64 {
    fn from(clear: ClearTime) -> Self {
        clear.at().unwrap_or(CLEAR_UNSET)
    }
}

/// A single annotation record on the playback timeline.
///
/// Fields are optional because records come from loosely shaped input; the
/// resolver decides per operation what a missing field means. Deserializing
/// never fails on field contents: a field that is not a number is missing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "serde_json::Value")
)]
pub struct Record {
    /// Time in seconds at which the record becomes visible
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub timestamp: Option<f64>,
    /// Time at which the record is cleared
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub clear: Option<ClearTime>,
}

impl Record {
    /// Creates a record with a timestamp and a clear time
    pub fn new(timestamp: f64, clear: ClearTime) -> Self {
        Self {
            timestamp: Some(timestamp),
            clear: Some(clear),
        }
    }

    /// Creates a record carrying only a timestamp
    pub fn at(timestamp: f64) -> Self {
        Self {
            timestamp: Some(timestamp),
            clear: None,
        }
    }

    /// Creates a record with neither field set
    pub fn malformed() -> Self {
        Self::default()
    }

    /// Checks if both fields are present
    pub fn is_complete(&self) -> bool {
        self.timestamp.is_some() && self.clear.is_some()
    }
}
