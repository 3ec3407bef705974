//! Timeline container holding an ordered record sequence

use crate::resolver::{self, Interval};
use crate::Record;

/// Everything the resolver reports for one playback time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    /// Index of the current record
    pub index: Option<usize>,
    /// Visible window of records
    pub interval: Interval,
    /// Whether any record is active
    pub enabled: bool,
}

/// Ordered sequence of timeline records
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    records: Vec<Record>,
}

impl Timeline {
    /// Creates a timeline from records sorted by ascending timestamp
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Gets the underlying records
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records, malformed ones included
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the timeline has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Gets the index of the current record at `time`
    pub fn current_index(&self, time: f64) -> Option<usize> {
        resolver::current_index(&self.records, time)
    }

    /// Gets the current record at `time`
    pub fn current_record(&self, time: f64) -> Option<&Record> {
        self.current_index(time).map(|index| &self.records[index])
    }

    /// Gets the visible window at `time`
    pub fn current_interval(&self, time: f64) -> Interval {
        resolver::current_interval(&self.records, time)
    }

    /// Checks if any record is active at `time`
    pub fn is_enabled(&self, time: f64) -> bool {
        resolver::is_enabled(&self.records, time)
    }

    /// Resolves every query at `time`
    pub fn state_at(&self, time: f64) -> PlaybackState {
        PlaybackState {
            index: self.current_index(time),
            interval: self.current_interval(time),
            enabled: self.is_enabled(time),
        }
    }

    /// Checks that timestamps never decrease, ignoring records without one
    pub fn is_sorted(&self) -> bool {
        let mut timestamps = self.records.iter().filter_map(|r| r.timestamp);
        let Some(mut previous) = timestamps.next() else {
            return true;
        };

        timestamps.all(|timestamp| {
            let ordered = previous <= timestamp;
            previous = timestamp;
            ordered
        })
    }

    /// Counts records missing a timestamp or a clear time
    pub fn malformed_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_complete()).count()
    }

    /// Returns the latest timestamp or clear time on the timeline (0 if none)
    pub fn duration(&self) -> f64 {
        self.records
            .iter()
            .flat_map(|r| [r.timestamp, r.clear.and_then(|c| c.at())])
            .flatten()
            .fold(0.0, f64::max)
    }
}

impl From<Vec<Record>> for Timeline {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
