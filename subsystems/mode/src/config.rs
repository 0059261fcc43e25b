//! # Mode Manager Configuration
//!
//! Immutable after the manager is constructed. Validated exactly once, in
//! [`ModeManager::new`](crate::ModeManager::new).
//!
//! ## Constraints
//!
//! - `min_dwell_startup >= 1`
//! - `min_dwell_degraded >= 1`

use crate::error::{ModeError, ModeResult};

/// Mode manager configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConfig {
    /// Minimum cycles in STARTUP before OPERATIONAL
    pub min_dwell_startup: u32,

    /// Minimum cycles in DEGRADED before recovering to OPERATIONAL
    pub min_dwell_degraded: u32,

    /// Warning flags participate in transitions
    pub use_warning_flags: bool,

    /// Every monitor must be exactly HEALTHY to enter OPERATIONAL.
    /// When false, any non-degraded, non-faulty report is accepted.
    pub require_all_healthy: bool,
}

impl ModeConfig {
    /// Default configuration
    pub const DEFAULT: Self = Self {
        min_dwell_startup: 10,
        min_dwell_degraded: 5,
        use_warning_flags: true,
        require_all_healthy: true,
    };

    /// Check the dwell constraints
    pub fn validate(&self) -> ModeResult<()> {
        if self.min_dwell_startup < 1 {
            return Err(ModeError::InvalidConfig {
                field: "min_dwell_startup",
                value: self.min_dwell_startup,
            });
        }

        if self.min_dwell_degraded < 1 {
            return Err(ModeError::InvalidConfig {
                field: "min_dwell_degraded",
                value: self.min_dwell_degraded,
            });
        }

        Ok(())
    }
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
