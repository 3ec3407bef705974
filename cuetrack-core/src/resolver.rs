//! Temporal visibility resolution
//!
//! Answers which record is current, which contiguous window of records is
//! visible, and whether any record is active at a playback time. Records must
//! be sorted by ascending timestamp.

use crate::scan::{scan, FieldRequirement, InvalidRecordPolicy, Step};
use crate::{ClearTime, Record};

/// Checks if a record with this timestamp has appeared at `time`
pub fn is_visible(time: f64, timestamp: f64) -> bool {
    timestamp <= time
}

/// Checks if a clear time has been reached at `time`.
///
/// The `-1` sentinel never counts as cleared, even when wrapped in `At`.
pub fn was_cleared(time: f64, clear: ClearTime) -> bool {
    clear.at().is_some_and(|clear_time| clear_time <= time)
}

/// Checks if a record is visible and not yet cleared at `time`.
///
/// Pass `ClearTime::default()` for a record without a clear time.
pub fn is_active(time: f64, timestamp: f64, clear: ClearTime) -> bool {
    is_visible(time, timestamp) && !was_cleared(time, clear)
}

/// Returns the index of the last visible record.
///
/// Stops at the first record still in the future. A record without a
/// timestamp met before that point invalidates the whole sequence and yields
/// `None`, even if a visible record was already found.
pub fn current_index(records: &[Record], time: f64) -> Option<usize> {
    let mut current = None;
    let outcome = scan(
        records,
        FieldRequirement::Timestamp,
        InvalidRecordPolicy::StrictScan,
        |index, cue| {
            if is_visible(time, cue.timestamp) {
                current = Some(index);
                Step::Continue
            } else {
                Step::Stop
            }
        },
    );

    if outcome.is_aborted() {
        None
    } else {
        current
    }
}

/// Contiguous run of visible records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Interval {
    /// Indices within the run whose clear time has been reached
    pub cleared: Vec<usize>,
    /// First visible index
    pub first: Option<usize>,
    /// Last visible index
    pub last: Option<usize>,
}

impl Interval {
    /// Checks if no record is visible
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Number of records in the run, counting skipped malformed ones
    pub fn span(&self) -> usize {
        match (self.first, self.last) {
            (Some(first), Some(last)) => last - first + 1,
            _ => 0,
        }
    }

    /// Checks if the record at `index` is in the run and cleared
    pub fn is_cleared(&self, index: usize) -> bool {
        self.cleared.contains(&index)
    }
}

/// Returns the run of visible records and which of them are cleared.
///
/// Future records ahead of the first visible one are skipped; once the run
/// has started, the next future record ends it. A cleared record stays part
/// of the run. Records lacking a timestamp or clear field are ignored.
pub fn current_interval(records: &[Record], time: f64) -> Interval {
    let mut interval = Interval::default();
    scan(
        records,
        FieldRequirement::TimestampAndClear,
        InvalidRecordPolicy::PermissiveScan,
        |index, cue| {
            if !is_visible(time, cue.timestamp) {
                return if interval.last.is_some() {
                    Step::Stop
                } else {
                    Step::Continue
                };
            }

            interval.first.get_or_insert(index);
            interval.last = Some(index);

            if was_cleared(time, cue.clear) {
                interval.cleared.push(index);
            }

            Step::Continue
        },
    );

    interval
}

/// Checks if any record is active at `time`.
///
/// Returns `false` at the first future record, since nothing after it can be
/// visible. A record lacking a timestamp or clear field met before an answer
/// is reached yields `false`.
pub fn is_enabled(records: &[Record], time: f64) -> bool {
    let mut enabled = false;
    let outcome = scan(
        records,
        FieldRequirement::TimestampAndClear,
        InvalidRecordPolicy::StrictScan,
        |_, cue| {
            if is_active(time, cue.timestamp, cue.clear) {
                enabled = true;
                Step::Stop
            } else if !is_visible(time, cue.timestamp) {
                Step::Stop
            } else {
                Step::Continue
            }
        },
    );

    enabled && !outcome.is_aborted()
}

/// Maps an optional index to the `-1` convention used in serialized output
pub fn index_or_sentinel(index: Option<usize>) -> i64 {
    index.map_or(-1, |index| index as i64)
}
