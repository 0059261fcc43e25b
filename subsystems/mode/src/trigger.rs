//! # Transition Triggers
//!
//! Audit causality for a transition, one byte wide:
//!
//! ```text
//!   bit:    7        6       5        4         3      2       1        0
//!        ┌────────┬───────┬────────┬─────────┬───────┬───────┬────────┬───────┐
//!        │ MANUAL │ FLAGS │PRESSURE│CONSENSUS│ DRIFT │TIMING │BASELINE│ PULSE │
//!        └────────┴───────┴────────┴─────────┴───────┴───────┴────────┴───────┘
//!          operator  warning   └──────────── monitors (MonitorSet) ───────────┘
//! ```

use bitflags::bitflags;
use static_assertions::const_assert;
use warden_health::MonitorSet;

bitflags! {
    /// Which monitors, flags or operator actions caused a transition
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TriggerMask: u8 {
        const PULSE     = MonitorSet::PULSE.bits();
        const BASELINE  = MonitorSet::BASELINE.bits();
        const TIMING    = MonitorSet::TIMING.bits();
        const DRIFT     = MonitorSet::DRIFT.bits();
        const CONSENSUS = MonitorSet::CONSENSUS.bits();
        const PRESSURE  = MonitorSet::PRESSURE.bits();

        /// Warning flags caused the transition
        const FLAGS     = 1 << 6;
        /// Operator reset or test-mode entry/exit
        const MANUAL    = 1 << 7;
    }
}

const_assert!(MonitorSet::all().bits() & TriggerMask::FLAGS.bits() == 0);
const_assert!(MonitorSet::all().bits() & TriggerMask::MANUAL.bits() == 0);

impl TriggerMask {
    /// Trigger naming the given monitors
    #[inline]
    pub const fn from_monitors(monitors: MonitorSet) -> Self {
        Self::from_bits_retain(monitors.bits())
    }

    /// The monitor half of the mask
    #[inline]
    pub const fn monitors(self) -> MonitorSet {
        MonitorSet::from_bits_truncate(self.bits())
    }

    #[inline]
    pub const fn is_manual(self) -> bool {
        self.contains(Self::MANUAL)
    }
}
