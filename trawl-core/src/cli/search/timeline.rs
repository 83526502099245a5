use crate::cli::search::constants::{LARGE_GAP_MS, MEDIUM_GAP_MS};
use crate::record::LogRecord;
use chrono::{NaiveDateTime, TimeDelta};

/// Spacing between the end of one accepted request and the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapReport {
    /// More than five seconds idle.
    Large { secs: u64 },
    Medium { ms: u64 },
    Small { ms: u64 },
    /// The request started before the previous one ended (or exactly as it did).
    Overlap { ms: u64 },
}

impl GapReport {
    pub fn from_gap_ms(gap: i64) -> Self {
        if gap > LARGE_GAP_MS {
            GapReport::Large {
                secs: gap as u64 / 1000,
            }
        } else if gap > MEDIUM_GAP_MS {
            GapReport::Medium { ms: gap as u64 }
        } else if gap > 0 {
            GapReport::Small { ms: gap as u64 }
        } else {
            GapReport::Overlap {
                ms: gap.unsigned_abs(),
            }
        }
    }
}

/// Tracks the end of the last accepted request across one run.
///
/// Records must be observed in non-decreasing timestamp order (oldest file,
/// oldest line first). Out-of-order input yields meaningless overlaps.
#[derive(Debug, Default)]
pub struct TimelineTracker {
    previous_end: Option<NaiveDateTime>,
}

impl TimelineTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, record: &LogRecord) -> Option<GapReport> {
        self.observe_at(record.timestamp, record.duration_ms)
    }

    /// `end` is when the request finished; it started `duration_ms` earlier.
    ///
    /// A duration reaching past the representable calendar yields no report.
    pub fn observe_at(&mut self, end: NaiveDateTime, duration_ms: u64) -> Option<GapReport> {
        let start = i64::try_from(duration_ms)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .and_then(|duration| end.checked_sub_signed(duration));
        let previous = self.previous_end.replace(end);

        let (start, previous) = (start?, previous?);
        Some(GapReport::from_gap_ms((start - previous).num_milliseconds()))
    }
}
