//! # System Modes
//!
//! ```text
//!                 all ok            dwell ≥ startup min, all healthy
//!     ┌──────┐ ──────────▶ ┌─────────┐ ──────────────────────▶ ┌─────────────┐
//!     │ INIT │             │ STARTUP │                          │ OPERATIONAL │
//!     └──────┘             └────┬────┘                          └──┬───────▲──┘
//!        ▲                      │ any degraded         unhealthy / │       │ dwell ≥ degraded min,
//!        │                      ▼                       warnings   ▼       │ all healthy, no warnings
//!        │                 ┌──────────┐ ◀──────────────────────────┘       │
//!        │                 │ DEGRADED │ ───────────────────────────────────┘
//!        │                 └──────────┘
//!        │
//!        │  reset            ┌───────────┐
//!        ├────────────────── │ EMERGENCY │ ◀── any faulty (from INIT, STARTUP,
//!        │                   └───────────┘     OPERATIONAL, DEGRADED)
//!        │  exit             ┌──────┐
//!        └────────────────── │ TEST │ ◀── enter (from anything but EMERGENCY)
//!                            └──────┘
//! ```

use core::fmt;

use static_assertions::const_assert_eq;

use crate::permissions::Permissions;

/// Operational mode of the supervised system
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SystemMode {
    /// Power-on, safety validation
    #[default]
    Init        = 0,

    /// Learning period for the statistical monitors
    Startup     = 1,

    /// Full functionality
    Operational = 2,

    /// Reduced functionality, approaching limits
    Degraded    = 3,

    /// Critical fault, safe state (sticky)
    Emergency   = 4,

    /// Maintenance / diagnostic override
    Test        = 5,
}

impl SystemMode {
    /// Number of modes
    pub const COUNT: usize = 6;

    /// Every mode, in discriminant order
    pub const ALL: [SystemMode; Self::COUNT] = [
        SystemMode::Init,
        SystemMode::Startup,
        SystemMode::Operational,
        SystemMode::Degraded,
        SystemMode::Emergency,
        SystemMode::Test,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "INIT",
            Self::Startup => "STARTUP",
            Self::Operational => "OPERATIONAL",
            Self::Degraded => "DEGRADED",
            Self::Emergency => "EMERGENCY",
            Self::Test => "TEST",
        }
    }

    /// Actions permitted while in this mode
    #[inline]
    pub const fn permissions(self) -> Permissions {
        Permissions::for_mode(self)
    }

    /// Only an explicit operator reset leaves a sticky mode
    #[inline]
    pub const fn is_sticky(self) -> bool {
        matches!(self, Self::Emergency)
    }

    /// Modes the automatic fault check does not apply to
    #[inline]
    pub(crate) const fn bypasses_fault_check(self) -> bool {
        matches!(self, Self::Emergency | Self::Test)
    }
}

const_assert_eq!(SystemMode::COUNT, SystemMode::ALL.len());

impl fmt::Display for SystemMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants_follow_all() {
        for (i, mode) in SystemMode::ALL.iter().enumerate() {
            assert_eq!(*mode as usize, i);
        }
    }

    #[test]
    fn test_only_emergency_is_sticky() {
        for mode in SystemMode::ALL {
            assert_eq!(mode.is_sticky(), mode == SystemMode::Emergency);
        }
    }

    #[test]
    fn test_default_is_init() {
        assert_eq!(SystemMode::default(), SystemMode::Init);
    }
}
