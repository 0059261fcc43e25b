//! # Transition Audit Log
//!
//! Fixed-capacity ring of [`TransitionRecord`]s. Once full, each new record
//! evicts the oldest. Two lifetime counters survive eviction.
//!
//! ```text
//!   capacity = 4, after 6 transitions:
//!
//!   ┌─────┬─────┬─────┬─────┐
//!   │ #4  │ #5  │ #2  │ #3  │     iter()      → #2 #3 #4 #5
//!   └─────┴─────┴──▲──┴─────┘     recent(2)   → #4 #5
//!                  └ oldest       total = 6
//! ```
//!
//! Storage is a `heapless::HistoryBuffer`; no allocation happens after
//! construction.

use core::fmt;

use heapless::HistoryBuffer;
use static_assertions::const_assert;
use warden_health::WarningFlags;

use crate::input::Timestamp;
use crate::mode::SystemMode;
use crate::trigger::TriggerMask;

/// Records retained by a manager's audit log
pub const HISTORY_CAPACITY: usize = 16;

const_assert!(HISTORY_CAPACITY > 0);

/// One mode transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRecord {
    /// When the transition occurred
    pub timestamp: Timestamp,

    /// Mode before
    pub from: SystemMode,

    /// Mode after
    pub to: SystemMode,

    /// What caused it
    pub trigger: TriggerMask,

    /// Warning flags at the time
    pub flags: WarningFlags,
}

/// Bounded transition history with lifetime counters
pub struct AuditLog<const N: usize = HISTORY_CAPACITY> {
    ring: HistoryBuffer<TransitionRecord, N>,
    total_transitions: u64,
    emergency_entries: u64,
}

impl<const N: usize> AuditLog<N> {
    pub fn new() -> Self {
        Self {
            ring: HistoryBuffer::new(),
            total_transitions: 0,
            emergency_entries: 0,
        }
    }

    /// Append a record, evicting the oldest when full
    pub fn record(&mut self, record: TransitionRecord) {
        if record.to == SystemMode::Emergency {
            self.emergency_entries = self.emergency_entries.saturating_add(1);
        }
        self.total_transitions = self.total_transitions.saturating_add(1);
        self.ring.write(record);
    }

    /// Records currently retained
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Most recent record
    #[inline]
    pub fn latest(&self) -> Option<&TransitionRecord> {
        self.ring.recent()
    }

    /// Retained records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TransitionRecord> + '_ {
        self.ring.oldest_ordered()
    }

    /// The `max` most recent records, oldest first
    pub fn recent(&self, max: usize) -> impl Iterator<Item = &TransitionRecord> + '_ {
        let skip = self.len().saturating_sub(max);
        self.iter().skip(skip)
    }

    /// Transitions ever recorded, including evicted ones
    #[inline]
    pub fn total_transitions(&self) -> u64 {
        self.total_transitions
    }

    /// Entries into EMERGENCY ever recorded
    #[inline]
    pub fn emergency_entries(&self) -> u64 {
        self.emergency_entries
    }
}

impl<const N: usize> Default for AuditLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for AuditLog<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditLog")
            .field("len", &self.len())
            .field("capacity", &N)
            .field("total_transitions", &self.total_transitions)
            .field("emergency_entries", &self.emergency_entries)
            .field("latest", &self.latest())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(ts: u64, to: SystemMode) -> TransitionRecord {
        TransitionRecord {
            timestamp: Timestamp(ts),
            from: SystemMode::Init,
            to,
            trigger: TriggerMask::empty(),
            flags: WarningFlags::empty(),
        }
    }

    #[test]
    fn test_empty() {
        let log: AuditLog<4> = AuditLog::new();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), 4);
        assert!(log.latest().is_none());
        assert_eq!(log.iter().count(), 0);
        assert_eq!(log.recent(10).count(), 0);
    }

    #[test]
    fn test_chronological_before_wrap() {
        let mut log: AuditLog<4> = AuditLog::new();
        for ts in 1..=3 {
            log.record(rec(ts, SystemMode::Startup));
        }

        let stamps: [u64; 3] = {
            let mut out = [0; 3];
            for (slot, r) in out.iter_mut().zip(log.iter()) {
                *slot = r.timestamp.0;
            }
            out
        };
        assert_eq!(stamps, [1, 2, 3]);
        assert_eq!(log.latest().map(|r| r.timestamp), Some(Timestamp(3)));
    }

    #[test]
    fn test_wraparound_evicts_oldest() {
        let mut log: AuditLog<4> = AuditLog::new();
        for ts in 1..=6 {
            log.record(rec(ts, SystemMode::Startup));
        }

        assert_eq!(log.len(), 4);
        assert_eq!(log.total_transitions(), 6);

        let mut it = log.iter();
        for expected in 3..=6 {
            assert_eq!(it.next().map(|r| r.timestamp.0), Some(expected));
        }
        assert!(it.next().is_none());
    }

    #[test]
    fn test_recent_window_is_newest_oldest_first() {
        let mut log: AuditLog<4> = AuditLog::new();
        for ts in 1..=6 {
            log.record(rec(ts, SystemMode::Startup));
        }

        let mut it = log.recent(2);
        assert_eq!(it.next().map(|r| r.timestamp.0), Some(5));
        assert_eq!(it.next().map(|r| r.timestamp.0), Some(6));
        assert!(it.next().is_none());

        assert_eq!(log.recent(100).count(), 4);
        assert_eq!(log.recent(0).count(), 0);
    }

    #[test]
    fn test_emergency_counter_survives_eviction() {
        let mut log: AuditLog<2> = AuditLog::new();
        log.record(rec(1, SystemMode::Emergency));
        log.record(rec(2, SystemMode::Init));
        log.record(rec(3, SystemMode::Startup));
        log.record(rec(4, SystemMode::Emergency));

        assert_eq!(log.emergency_entries(), 2);
        assert_eq!(log.total_transitions(), 4);
        assert_eq!(log.len(), 2);
    }
}
