//! # Monitor Sets and Warning Flags
//!
//! Two small bitsets with named bits:
//!
//! - [`MonitorSet`] names *which* monitors satisfy some condition (faulty,
//!   degraded). Its bits double as the component half of an audit trigger.
//! - [`WarningFlags`] carries the proactive signals a monitor raises from
//!   domain knowledge before anything is actually faulty.
//!
//! | Flag                | Raised by | Meaning                               |
//! |---------------------|-----------|---------------------------------------|
//! | `APPROACHING_UPPER` | Drift     | Value trending toward its upper limit |
//! | `APPROACHING_LOWER` | Drift     | Value trending toward its lower limit |
//! | `LOW_CONFIDENCE`    | Consensus | Voting confidence below threshold     |
//! | `QUEUE_CRITICAL`    | Pressure  | Queue nearly full                     |
//! | `TIMING_UNSTABLE`   | Timing    | Recent jitter violations              |
//! | `BASELINE_VOLATILE` | Baseline  | High recent deviation                 |

use bitflags::bitflags;

use crate::state::Monitor;

bitflags! {
    /// Set of monitored components
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MonitorSet: u8 {
        const PULSE     = 1 << 0;
        const BASELINE  = 1 << 1;
        const TIMING    = 1 << 2;
        const DRIFT     = 1 << 3;
        const CONSENSUS = 1 << 4;
        const PRESSURE  = 1 << 5;
    }
}

impl MonitorSet {
    /// Singleton set for one monitor
    #[inline]
    pub const fn from_monitor(monitor: Monitor) -> Self {
        Self::from_bits_retain(1 << monitor.index())
    }

    /// Whether `monitor` is a member
    #[inline]
    pub const fn has(self, monitor: Monitor) -> bool {
        self.contains(Self::from_monitor(monitor))
    }

    /// Members in health-array order
    pub fn monitors(self) -> impl Iterator<Item = Monitor> {
        Monitor::ALL.into_iter().filter(move |m| self.has(*m))
    }
}

bitflags! {
    /// Proactive warning signals, orthogonal to health state
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WarningFlags: u8 {
        /// Drift: value approaching upper limit
        const APPROACHING_UPPER = 1 << 0;
        /// Drift: value approaching lower limit
        const APPROACHING_LOWER = 1 << 1;
        /// Consensus: confidence below threshold
        const LOW_CONFIDENCE    = 1 << 2;
        /// Pressure: queue nearly full
        const QUEUE_CRITICAL    = 1 << 3;
        /// Timing: recent jitter violations
        const TIMING_UNSTABLE   = 1 << 4;
        /// Baseline: high recent deviation
        const BASELINE_VOLATILE = 1 << 5;
    }
}

impl WarningFlags {
    /// At least one warning is raised
    #[inline]
    pub const fn any(self) -> bool {
        !self.is_empty()
    }

    /// Decode a snapshot byte, dropping the two reserved bits
    #[inline]
    pub const fn from_snapshot(raw: u8) -> Self {
        Self::from_bits_truncate(raw)
    }

    /// Byte form stored in audit records
    #[inline]
    pub const fn snapshot(self) -> u8 {
        self.bits()
    }
}
