//! # Transition Engine
//!
//! A total, pure function from (mode, health summary, dwell, config) to the
//! next mode. Every [`SystemMode`] variant is matched explicitly, so adding a
//! mode without deciding its rules fails to compile.
//!
//! ## Evaluation Order
//!
//! ```text
//!   ┌──────────────────────────────────────────────┐
//!   │ 1. FAULT CHECK (all modes but EMERGENCY/TEST)│── any faulty ──▶ EMERGENCY
//!   └──────────────────────┬───────────────────────┘   trigger = faulty monitors
//!                          │ no fault
//!                          ▼
//!   ┌──────────────────────────────────────────────┐
//!   │ 2. MODE RULES                                │── fired ──▶ new mode
//!   └──────────────────────┬───────────────────────┘
//!                          │ nothing fired
//!                          ▼
//!                    stay (dwell + 1)
//! ```
//!
//! The fault check runs before every other rule, so fault-to-EMERGENCY
//! latency is one cycle regardless of dwell minimums.
//!
//! ## Mode Rules
//!
//! | From        | To          | Guard                                                  | Trigger        |
//! |-------------|-------------|--------------------------------------------------------|----------------|
//! | INIT        | STARTUP     | no monitor degraded or faulty                          | none           |
//! | STARTUP     | OPERATIONAL | dwell ≥ startup min ∧ ready ∧ ¬(flags ∧ warning)       | none           |
//! | STARTUP     | DEGRADED    | any monitor degraded (dwell not required)              | degraded set   |
//! | OPERATIONAL | DEGRADED    | any monitor degraded                                   | degraded set   |
//! | OPERATIONAL | DEGRADED    | all healthy required ∧ any monitor not HEALTHY         | unhealthy set  |
//! | OPERATIONAL | DEGRADED    | flags participate ∧ any warning                        | FLAGS          |
//! | DEGRADED    | OPERATIONAL | dwell ≥ degraded min ∧ ready ∧ ¬(flags ∧ warning)      | none           |
//! | EMERGENCY   | —           | never (explicit reset only)                            |                |
//! | TEST        | —           | never (explicit exit only)                             |                |
//!
//! "ready" is every monitor HEALTHY, or merely no monitor degraded/faulty
//! when `require_all_healthy` is off. The same setting decides what holds
//! OPERATIONAL: a monitor falling back to LEARNING or UNKNOWN leaves it
//! unless the requirement is relaxed.
//!
//! A warning raised partway through a dwell window blocks the recovery check
//! on that cycle only. The dwell counter itself resets solely on a mode
//! change.

use warden_health::HealthSummary;

use crate::config::ModeConfig;
use crate::dwell::DwellCounter;
use crate::mode::SystemMode;
use crate::trigger::TriggerMask;

/// Outcome of one engine evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Mode after this cycle
    pub mode: SystemMode,

    /// Whether `mode` differs from the mode before this cycle
    pub transitioned: bool,

    /// Cause of the transition (empty when none, or when the rule has no
    /// attributable cause)
    pub trigger: TriggerMask,
}

impl Decision {
    #[inline]
    const fn stay(mode: SystemMode) -> Self {
        Self { mode, transitioned: false, trigger: TriggerMask::empty() }
    }

    #[inline]
    const fn go(mode: SystemMode, trigger: TriggerMask) -> Self {
        Self { mode, transitioned: true, trigger }
    }
}

/// Compute the successor of `mode` for one cycle
pub fn next_mode(
    mode: SystemMode,
    health: &HealthSummary,
    dwell: &DwellCounter,
    config: &ModeConfig,
) -> Decision {
    if !mode.bypasses_fault_check() && health.any_faulty() {
        return Decision::go(SystemMode::Emergency, TriggerMask::from_monitors(health.faulty));
    }

    match mode {
        SystemMode::Init => {
            if health.all_ok {
                Decision::go(SystemMode::Startup, TriggerMask::empty())
            } else {
                Decision::stay(mode)
            }
        },

        SystemMode::Startup => {
            if dwell.has_reached(config.min_dwell_startup)
                && ready_for_operational(health, config)
            {
                Decision::go(SystemMode::Operational, TriggerMask::empty())
            } else if health.any_degraded() {
                Decision::go(SystemMode::Degraded, TriggerMask::from_monitors(health.degraded))
            } else {
                Decision::stay(mode)
            }
        },

        SystemMode::Operational => {
            if health.any_degraded() {
                Decision::go(SystemMode::Degraded, TriggerMask::from_monitors(health.degraded))
            } else if config.require_all_healthy && !health.all_healthy {
                Decision::go(SystemMode::Degraded, TriggerMask::from_monitors(health.unhealthy))
            } else if warnings_block(health, config) {
                Decision::go(SystemMode::Degraded, TriggerMask::FLAGS)
            } else {
                Decision::stay(mode)
            }
        },

        SystemMode::Degraded => {
            if dwell.has_reached(config.min_dwell_degraded)
                && ready_for_operational(health, config)
            {
                Decision::go(SystemMode::Operational, TriggerMask::empty())
            } else {
                Decision::stay(mode)
            }
        },

        SystemMode::Emergency => Decision::stay(mode),

        SystemMode::Test => Decision::stay(mode),
    }
}

/// Monitor and flag conditions for entering OPERATIONAL, dwell aside
fn ready_for_operational(health: &HealthSummary, config: &ModeConfig) -> bool {
    let monitors_ready = if config.require_all_healthy {
        health.all_healthy
    } else {
        health.all_ok
    };

    monitors_ready && !warnings_block(health, config)
}

#[inline]
fn warnings_block(health: &HealthSummary, config: &ModeConfig) -> bool {
    config.use_warning_flags && health.warning
}

// =============================================================================
// TESTS
// =============================================================================
