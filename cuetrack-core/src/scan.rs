//! Forward scan over an ordered record sequence
//!
//! Every resolver query walks the records from the start and stops as soon as
//! the sort order guarantees nothing further can change its answer. The
//! queries differ only in which fields they need, what they do with a record
//! that lacks them, and when they stop; those three choices are the
//! parameters of [`scan`].

use crate::{ClearTime, Record};
use tracing::{debug, trace};

/// A record that carries every field the scan asked for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub timestamp: f64,
    /// `ClearTime::Never` when the scan did not require a clear field
    pub clear: ClearTime,
}

/// Fields a record must carry to be visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRequirement {
    Timestamp,
    TimestampAndClear,
}

impl FieldRequirement {
    /// Extracts the required fields, or `None` if any is missing
    pub fn admit(self, record: &Record) -> Option<Cue> {
        let timestamp = record.timestamp?;
        let clear = match self {
            FieldRequirement::Timestamp => record.clear.unwrap_or_default(),
            FieldRequirement::TimestampAndClear => record.clear?,
        };

        Some(Cue { timestamp, clear })
    }
}

/// What happens when a record lacks a required field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRecordPolicy {
    /// One malformed record invalidates the whole scan
    StrictScan,
    /// Malformed records are passed over
    PermissiveScan,
}

/// Returned by the visitor after each record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop,
}

/// How a scan ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Every record was considered
    Exhausted,
    /// The visitor asked to stop at this index
    Stopped { index: usize },
    /// A strict scan met a malformed record at this index
    Aborted { index: usize },
}

impl ScanOutcome {
    /// Checks if a strict scan gave up on a malformed record
    pub fn is_aborted(self) -> bool {
        matches!(self, ScanOutcome::Aborted { .. })
    }
}

/// Visits records in order until the visitor stops, the records run out, or a
/// strict scan meets a malformed record.
pub fn scan<F>(
    records: &[Record],
    requirement: FieldRequirement,
    policy: InvalidRecordPolicy,
    mut visit: F,
) -> ScanOutcome
where
    F: FnMut(usize, Cue) -> Step,
{
    for (index, record) in records.iter().enumerate() {
        let Some(cue) = requirement.admit(record) else {
            match policy {
                InvalidRecordPolicy::StrictScan => {
                    debug!(index, ?requirement, "malformed record aborts scan");
                    return ScanOutcome::Aborted { index };
                }
                InvalidRecordPolicy::PermissiveScan => {
                    trace!(index, ?requirement, "skipping malformed record");
                    continue;
                }
            }
        };

        if visit(index, cue) == Step::Stop {
            trace!(index, "scan stopped early");
            return ScanOutcome::Stopped { index };
        }
    }

    ScanOutcome::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new(1.0, ClearTime::Never),
            Record::at(2.0),
            Record::new(3.0, ClearTime::At(4.0)),
        ]
    }

    #[test]
    fn test_admit_fills_missing_clear_when_not_required() {
        let cue = FieldRequirement::Timestamp.admit(&Record::at(2.0)).unwrap();
        assert_eq!(cue.clear, ClearTime::Never);
        assert!(FieldRequirement::TimestampAndClear
            .admit(&Record::at(2.0))
            .is_none());
        assert!(FieldRequirement::Timestamp
            .admit(&Record::malformed())
            .is_none());
    }

    #[test]
    fn test_strict_scan_aborts_on_missing_field() {
        let mut visited = Vec::new();
        let outcome = scan(
            &sample(),
            FieldRequirement::TimestampAndClear,
            InvalidRecordPolicy::StrictScan,
            |index, _| {
                visited.push(index);
                Step::Continue
            },
        );

        assert_eq!(outcome, ScanOutcome::Aborted { index: 1 });
        assert_eq!(visited, vec![0]);
    }

    #[test]
    fn test_permissive_scan_skips_missing_field() {
        let mut visited = Vec::new();
        let outcome = scan(
            &sample(),
            FieldRequirement::TimestampAndClear,
            InvalidRecordPolicy::PermissiveScan,
            |index, _| {
                visited.push(index);
                Step::Continue
            },
        );

        assert_eq!(outcome, ScanOutcome::Exhausted);
        assert_eq!(visited, vec![0, 2]);
    }

    #[test]
    fn test_stop_ends_scan_before_later_malformed_record() {
        let outcome = scan(
            &sample(),
            FieldRequirement::TimestampAndClear,
            InvalidRecordPolicy::StrictScan,
            |_, _| Step::Stop,
        );

        assert_eq!(outcome, ScanOutcome::Stopped { index: 0 });
        assert!(!outcome.is_aborted());
    }

    #[test]
    fn test_empty_sequence_is_exhausted() {
        let outcome = scan(
            &[],
            FieldRequirement::Timestamp,
            InvalidRecordPolicy::StrictScan,
            |_, _| Step::Continue,
        );
        assert_eq!(outcome, ScanOutcome::Exhausted);
    }
}
