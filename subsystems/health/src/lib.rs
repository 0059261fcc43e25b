//! # Warden Health Vocabulary
//!
//! The normalized language spoken between the independent monitors and the
//! supervisory mode manager.
//!
//! Every monitor (heartbeat, statistical baseline, timing jitter, trend
//! drift, multi-source consensus, queue pressure) owns its own detection
//! logic. Whatever that logic concludes, it reports here as exactly one
//! [`HealthState`] plus an optional set of [`WarningFlags`].
//!
//! ```text
//! ┌────────┐ ┌──────────┐ ┌────────┐ ┌───────┐ ┌───────────┐ ┌──────────┐
//! │ PULSE  │ │ BASELINE │ │ TIMING │ │ DRIFT │ │ CONSENSUS │ │ PRESSURE │
//! └───┬────┘ └────┬─────┘ └───┬────┘ └───┬───┘ └─────┬─────┘ └────┬─────┘
//!     │           │           │          │           │            │
//!     ▼           ▼           ▼          ▼           ▼            ▼
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │      [HealthState; MONITOR_COUNT]          +        WarningFlags     │
//! └──────────────────────────────────┬───────────────────────────────────┘
//!                                    ▼
//!                        ┌────────────────────────┐
//!                        │     HealthSummary      │
//!                        │ all_ok / all_healthy   │
//!                        │ faulty / degraded /    │
//!                        │ unhealthy sets         │
//!                        │ warning                │
//!                        └────────────────────────┘
//! ```
//!
//! The aggregation functions are pure. Nothing is cached between cycles.

#![no_std]

pub mod aggregate;
pub mod flags;
pub mod state;

pub use aggregate::{
    all_healthy, all_ok, any_warning, degraded_monitors, faulty_monitors, unhealthy_monitors,
    HealthSummary,
};
pub use flags::{MonitorSet, WarningFlags};
pub use state::{HealthState, Monitor, MONITOR_COUNT};

/// One health report per monitored component, indexed by [`Monitor::index`].
pub type HealthArray = [HealthState; MONITOR_COUNT];
