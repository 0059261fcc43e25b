//! # Health Aggregation
//!
//! Answers the per-cycle questions the transition engine asks about a set of
//! monitor reports. Everything here is a pure function of its arguments.
//!
//! | Question       | True when                                           |
//! |----------------|-----------------------------------------------------|
//! | `all_ok`       | no monitor is Degraded or Faulty                    |
//! | `all_healthy`  | every monitor is exactly Healthy (Learning is not)  |
//! | `faulty`       | set of monitors reporting Faulty                    |
//! | `degraded`     | set of monitors reporting Degraded                  |
//! | `unhealthy`    | set of monitors reporting anything but Healthy      |
//! | `warning`      | any warning flag is raised                          |

use crate::flags::{MonitorSet, WarningFlags};
use crate::state::{HealthState, Monitor};
use crate::HealthArray;

/// No monitor is degraded or faulty
pub fn all_ok(states: &HealthArray) -> bool {
    states.iter().all(|s| s.is_ok())
}

/// Every monitor reports exactly [`HealthState::Healthy`]
pub fn all_healthy(states: &HealthArray) -> bool {
    states.iter().all(|s| *s == HealthState::Healthy)
}

/// Monitors reporting [`HealthState::Faulty`]
pub fn faulty_monitors(states: &HealthArray) -> MonitorSet {
    monitors_in(states, HealthState::Faulty)
}

/// Monitors reporting [`HealthState::Degraded`]
pub fn degraded_monitors(states: &HealthArray) -> MonitorSet {
    monitors_in(states, HealthState::Degraded)
}

/// Monitors reporting anything other than [`HealthState::Healthy`]
pub fn unhealthy_monitors(states: &HealthArray) -> MonitorSet {
    Monitor::ALL
        .iter()
        .filter(|m| states[m.index()] != HealthState::Healthy)
        .fold(MonitorSet::empty(), |set, m| set | MonitorSet::from_monitor(*m))
}

/// Any proactive warning flag raised
#[inline]
pub fn any_warning(flags: WarningFlags) -> bool {
    flags.any()
}

fn monitors_in(states: &HealthArray, wanted: HealthState) -> MonitorSet {
    Monitor::ALL
        .iter()
        .filter(|m| states[m.index()] == wanted)
        .fold(MonitorSet::empty(), |set, m| set | MonitorSet::from_monitor(*m))
}

// =============================================================================
// SUMMARY
// =============================================================================

/// All aggregate answers for one evaluation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthSummary {
    /// No monitor degraded or faulty
    pub all_ok: bool,

    /// Every monitor exactly healthy
    pub all_healthy: bool,

    /// Monitors reporting faulty
    pub faulty: MonitorSet,

    /// Monitors reporting degraded
    pub degraded: MonitorSet,

    /// Monitors not exactly healthy
    pub unhealthy: MonitorSet,

    /// Any warning flag raised
    pub warning: bool,
}

impl HealthSummary {
    /// Classify one cycle's reports
    pub fn evaluate(states: &HealthArray, flags: WarningFlags) -> Self {
        Self {
            all_ok: all_ok(states),
            all_healthy: all_healthy(states),
            faulty: faulty_monitors(states),
            degraded: degraded_monitors(states),
            unhealthy: unhealthy_monitors(states),
            warning: any_warning(flags),
        }
    }

    #[inline]
    pub fn any_faulty(&self) -> bool {
        !self.faulty.is_empty()
    }

    #[inline]
    pub fn any_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}
