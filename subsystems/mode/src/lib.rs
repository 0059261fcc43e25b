//! # Warden Mode Manager
//!
//! Hierarchical supervisory state machine for a safety-relevant system. It
//! fuses the per-cycle health of independent monitors into one operating
//! mode, and that mode alone decides whether the system may act.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           ModeManager                               │
//! │                                                                     │
//! │  ModeInput ──▶ HealthSummary ──▶ engine::next_mode ──▶ CycleResult  │
//! │                                        │                            │
//! │         ┌────────────────┬─────────────┴──┬────────────────┐        │
//! │         ▼                ▼                ▼                ▼        │
//! │   ┌────────────┐  ┌──────────────┐  ┌────────────┐  ┌─────────────┐ │
//! │   │ ModeConfig │  │ DwellCounter │  │  AuditLog  │  │ Permissions │ │
//! │   │  (frozen)  │  │ (hysteresis) │  │ (ring, 16) │  │  (per mode) │ │
//! │   └────────────┘  └──────────────┘  └────────────┘  └─────────────┘ │
//! │                                                                     │
//! │   operator: reset() · enter_test() · exit_test()                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modes
//!
//! | Mode        | Actuate | Calibrate | Log | Communicate |
//! |-------------|---------|-----------|-----|-------------|
//! | INIT        |         |           | ✓   | ✓           |
//! | STARTUP     |         | ✓         | ✓   | ✓           |
//! | OPERATIONAL | ✓       | ✓         | ✓   | ✓           |
//! | DEGRADED    |         |           | ✓   | ✓           |
//! | EMERGENCY   |         |           | ✓   | ✓           |
//! | TEST        | ✓       | ✓         | ✓   | ✓           |
//!
//! Any FAULTY monitor forces EMERGENCY within one cycle from every automatic
//! mode. EMERGENCY is left only through an operator [`ModeManager::reset`].
//!
//! ## Example
//!
//! ```
//! use warden_mode::{HealthState, ModeInput, ModeManager, SystemMode, Timestamp};
//!
//! let mut manager = ModeManager::default();
//! let result = manager.evaluate(&ModeInput::uniform(HealthState::Learning, Timestamp(0)));
//!
//! assert_eq!(result.mode, SystemMode::Startup);
//! assert!(!result.permissions.can_actuate());
//! ```
//!
//! The crate is `no_std` and never allocates.

#![no_std]

pub mod audit;
pub mod config;
pub mod dwell;
pub mod engine;
pub mod error;
pub mod input;
pub mod manager;
pub mod mode;
pub mod permissions;
pub mod shared;
pub mod trigger;

pub use audit::{AuditLog, TransitionRecord, HISTORY_CAPACITY};
pub use config::ModeConfig;
pub use dwell::DwellCounter;
pub use engine::{next_mode, Decision};
pub use error::{ModeError, ModeResult};
pub use input::{ModeInput, Timestamp};
pub use manager::{CycleResult, ModeManager, ModeStats};
pub use mode::SystemMode;
pub use permissions::{Action, Permissions};
pub use shared::SharedModeManager;
pub use trigger::TriggerMask;

pub use warden_health::{
    HealthArray, HealthState, HealthSummary, Monitor, MonitorSet, WarningFlags, MONITOR_COUNT,
};
