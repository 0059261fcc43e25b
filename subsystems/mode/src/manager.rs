//! # Mode Manager
//!
//! The persistent half of the supervisor: current mode, dwell counter, sticky
//! fault flag and audit log. One instance per supervised system, owned by the
//! control loop that drives it.
//!
//! ## Per-cycle Flow
//!
//! ```text
//!   ModeInput ──▶ HealthSummary ──▶ engine::next_mode ──┬─ transition ──▶ audit + dwell = 0
//!                                                       └─ stay ────────▶ dwell + 1
//!                                                                  │
//!                                                                  ▼
//!                                               CycleResult { mode, permissions, ... }
//! ```
//!
//! ## Invariants
//!
//! 1. **Unambiguous**: exactly one [`SystemMode`] at any time.
//! 2. **Safe operation**: in OPERATIONAL every monitor is HEALTHY and (with
//!    flags participating) no warning is raised. Relaxing
//!    `require_all_healthy` relaxes the first half to "none degraded".
//! 3. **Sticky fault**: in EMERGENCY the fault flag is set, and only
//!    [`ModeManager::reset`] clears it.
//! 4. **Dwell**: zero right after a transition, +1 per quiet cycle.
//! 5. **Bounded history**: the audit log never exceeds its capacity.
//!
//! The manager has no internal locking. Callers evaluating from more than
//! one context wrap it in [`SharedModeManager`](crate::SharedModeManager).

use heapless::Vec;
use warden_health::{HealthSummary, MonitorSet, WarningFlags};

use crate::audit::{AuditLog, TransitionRecord, HISTORY_CAPACITY};
use crate::config::ModeConfig;
use crate::dwell::DwellCounter;
use crate::engine;
use crate::error::{ModeError, ModeResult};
use crate::input::{ModeInput, Timestamp};
use crate::mode::SystemMode;
use crate::permissions::Permissions;
use crate::trigger::TriggerMask;

// =============================================================================
// RESULTS
// =============================================================================

/// Outcome of one evaluation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleResult {
    /// Mode after the cycle
    pub mode: SystemMode,

    /// Actions permitted in `mode`
    pub permissions: Permissions,

    /// Cycles spent in `mode`
    pub dwell: u32,

    /// Mode changed this cycle
    pub transitioned: bool,

    /// Sticky fault flag
    pub fault_active: bool,
}

/// Manager statistics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeStats {
    pub mode: SystemMode,
    pub dwell: u32,
    pub total_transitions: u64,
    pub emergency_entries: u64,
}

// =============================================================================
// MODE MANAGER
// =============================================================================

/// Hierarchical supervisory mode manager
#[derive(Debug)]
pub struct ModeManager {
    /// Configuration (immutable after construction)
    config: ModeConfig,

    /// Current mode
    mode: SystemMode,

    /// Cycles in current mode
    dwell: DwellCounter,

    /// Set on entering EMERGENCY, cleared only by reset
    fault_active: bool,

    /// Transition history
    audit: AuditLog,

    /// Timestamp of the last evaluated cycle
    last_timestamp: Timestamp,

    /// Warning flags of the last evaluated cycle
    last_flags: WarningFlags,
}

impl ModeManager {
    /// Create a manager in INIT, validating `config`
    pub fn new(config: ModeConfig) -> ModeResult<Self> {
        if let Err(err) = config.validate() {
            log::error!("mode manager: {}", err);
            return Err(err);
        }

        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: ModeConfig) -> Self {
        Self {
            config,
            mode: SystemMode::Init,
            dwell: DwellCounter::new(),
            fault_active: false,
            audit: AuditLog::new(),
            last_timestamp: Timestamp::ZERO,
            last_flags: WarningFlags::empty(),
        }
    }

    /// Run one control cycle. Total: every input yields a valid result.
    pub fn evaluate(&mut self, input: &ModeInput) -> CycleResult {
        self.last_timestamp = input.timestamp;
        self.last_flags = input.flags;

        let health = HealthSummary::evaluate(&input.states, input.flags);
        let decision = engine::next_mode(self.mode, &health, &self.dwell, &self.config);

        if decision.transitioned {
            self.transition(decision.mode, decision.trigger, input.flags, input.timestamp);
        } else {
            self.dwell.tick();
            log::trace!("mode: {} dwell {}", self.mode, self.dwell.ticks());
        }

        self.debug_check_invariants(&health, decision.transitioned);

        CycleResult {
            mode: self.mode,
            permissions: self.mode.permissions(),
            dwell: self.dwell.ticks(),
            transitioned: decision.transitioned,
            fault_active: self.fault_active,
        }
    }

    /// Force INIT and clear the sticky fault. The only way out of EMERGENCY.
    pub fn reset(&mut self) {
        log::warn!("mode: operator reset from {}", self.mode);

        self.fault_active = false;
        self.manual_transition(SystemMode::Init);
    }

    /// Enter TEST for maintenance. Refused in EMERGENCY.
    pub fn enter_test(&mut self) -> ModeResult<()> {
        match self.mode {
            SystemMode::Emergency => {
                log::warn!("mode: test entry refused, {} is locked", self.mode);
                Err(ModeError::Locked { mode: self.mode })
            },
            SystemMode::Test => Ok(()),
            _ => {
                log::warn!("mode: entering test from {}", self.mode);
                self.manual_transition(SystemMode::Test);
                Ok(())
            },
        }
    }

    /// Leave TEST for INIT. No-op outside TEST.
    pub fn exit_test(&mut self) {
        if self.mode != SystemMode::Test {
            return;
        }

        log::warn!("mode: leaving test");
        self.manual_transition(SystemMode::Init);
    }

    /// Up to `max_count` most recent transitions, oldest first
    pub fn history(&self, max_count: usize) -> Vec<TransitionRecord, HISTORY_CAPACITY> {
        self.audit.recent(max_count).copied().collect()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[inline]
    pub fn mode(&self) -> SystemMode {
        self.mode
    }

    #[inline]
    pub fn permissions(&self) -> Permissions {
        self.mode.permissions()
    }

    #[inline]
    pub fn can_actuate(&self) -> bool {
        self.permissions().can_actuate()
    }

    /// Sticky fault flag
    #[inline]
    pub fn is_fault(&self) -> bool {
        self.fault_active
    }

    /// Cycles in the current mode
    #[inline]
    pub fn dwell_time(&self) -> u32 {
        self.dwell.ticks()
    }

    #[inline]
    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    #[inline]
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    pub fn stats(&self) -> ModeStats {
        ModeStats {
            mode: self.mode,
            dwell: self.dwell.ticks(),
            total_transitions: self.audit.total_transitions(),
            emergency_entries: self.audit.emergency_entries(),
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn transition(
        &mut self,
        to: SystemMode,
        trigger: TriggerMask,
        flags: WarningFlags,
        timestamp: Timestamp,
    ) {
        let from = self.mode;

        self.audit.record(TransitionRecord { timestamp, from, to, trigger, flags });
        self.mode = to;
        self.dwell.reset();

        if to == SystemMode::Emergency {
            self.fault_active = true;
            log::error!(
                "mode: {} -> {} at {}ms, faulty monitors: {}",
                from,
                to,
                timestamp.as_millis(),
                MonitorNames(trigger.monitors())
            );
        } else {
            log::info!(
                "mode: {} -> {} at {}ms (trigger {:#04x})",
                from,
                to,
                timestamp.as_millis(),
                trigger.bits()
            );
        }
    }

    /// Operator transitions carry the last cycle's timestamp and flags
    fn manual_transition(&mut self, to: SystemMode) {
        self.transition(to, TriggerMask::MANUAL, self.last_flags, self.last_timestamp);
    }

    fn debug_check_invariants(&self, health: &HealthSummary, transitioned: bool) {
        debug_assert!(!self.mode.is_sticky() || self.fault_active);
        debug_assert!(!transitioned || self.dwell.ticks() == 0);
        debug_assert!(self.audit.len() <= self.audit.capacity());
        if self.mode == SystemMode::Operational {
            debug_assert!(health.all_ok);
            debug_assert!(!self.config.require_all_healthy || health.all_healthy);
            debug_assert!(!self.config.use_warning_flags || !health.warning);
        }
    }
}

impl Default for ModeManager {
    fn default() -> Self {
        Self::with_valid_config(ModeConfig::DEFAULT)
    }
}

/// Comma-separated monitor names for log lines
struct MonitorNames(MonitorSet);

impl core::fmt::Display for MonitorNames {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, monitor) in self.0.monitors().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(monitor.name())?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
