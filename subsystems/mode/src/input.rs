//! # Mode Input
//!
//! One evaluation cycle's worth of monitor reports. Built fresh by the caller
//! every cycle and never retained by the manager.

use warden_health::{HealthArray, HealthState, Monitor, WarningFlags, MONITOR_COUNT};

use crate::error::{ModeError, ModeResult};

/// Timestamp in milliseconds, caller-defined epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    #[inline]
    pub const fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Monitor reports for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeInput {
    /// Health per monitor, indexed by [`Monitor::index`]
    pub states: HealthArray,

    /// Proactive warning flags
    pub flags: WarningFlags,

    /// Time of the cycle
    pub timestamp: Timestamp,
}

impl ModeInput {
    pub const fn new(states: HealthArray, flags: WarningFlags, timestamp: Timestamp) -> Self {
        Self { states, flags, timestamp }
    }

    /// Every monitor reporting the same state, no flags
    pub const fn uniform(state: HealthState, timestamp: Timestamp) -> Self {
        Self::new([state; MONITOR_COUNT], WarningFlags::empty(), timestamp)
    }

    /// Build from a producer-supplied slice, which must cover every monitor
    pub fn from_slice(
        states: &[HealthState],
        flags: WarningFlags,
        timestamp: Timestamp,
    ) -> ModeResult<Self> {
        let states: HealthArray = states.try_into().map_err(|_| ModeError::MissingInput {
            expected: MONITOR_COUNT,
            actual: states.len(),
        })?;

        Ok(Self::new(states, flags, timestamp))
    }

    /// Replace one monitor's report
    pub fn with_state(mut self, monitor: Monitor, state: HealthState) -> Self {
        self.states[monitor.index()] = state;
        self
    }

    pub fn with_flags(mut self, flags: WarningFlags) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    pub const fn state(&self, monitor: Monitor) -> HealthState {
        self.states[monitor.index()]
    }
}
