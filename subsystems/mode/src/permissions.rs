//! # Mode Permissions
//!
//! The permission table is the mechanism by which the mode constrains the
//! rest of the system. Callers consult it before any gated action; enforcing
//! that they do so is outside this crate.
//!
//! | Mode        | Actuate | Calibrate | Log | Communicate |
//! |-------------|:-------:|:---------:|:---:|:-----------:|
//! | INIT        |         |           |  ✓  |      ✓      |
//! | STARTUP     |         |     ✓     |  ✓  |      ✓      |
//! | OPERATIONAL |    ✓    |     ✓     |  ✓  |      ✓      |
//! | DEGRADED    |         |           |  ✓  |      ✓      |
//! | EMERGENCY   |         |           |  ✓  |      ✓      |
//! | TEST        |    ✓    |     ✓     |  ✓  |      ✓      |

use bitflags::bitflags;

use crate::mode::SystemMode;

bitflags! {
    /// Actions authorized in a mode
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u8 {
        /// Drive actuators (thrusters, motors)
        const ACTUATE     = 1 << 0;
        /// Run calibration routines
        const CALIBRATE   = 1 << 1;
        /// Write to storage
        const LOG         = 1 << 2;
        /// Send telemetry
        const COMMUNICATE = 1 << 3;

        /// Observe and report, nothing else
        const MONITOR_ONLY = Self::LOG.bits() | Self::COMMUNICATE.bits();
    }
}

/// A gated action category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Actuate,
    Calibrate,
    Log,
    Communicate,
}

impl Action {
    /// Permission bit guarding this action
    pub const fn permission(self) -> Permissions {
        match self {
            Self::Actuate => Permissions::ACTUATE,
            Self::Calibrate => Permissions::CALIBRATE,
            Self::Log => Permissions::LOG,
            Self::Communicate => Permissions::COMMUNICATE,
        }
    }
}

impl Permissions {
    /// Static permission table, keyed by mode
    pub const fn for_mode(mode: SystemMode) -> Self {
        match mode {
            SystemMode::Init => Self::MONITOR_ONLY,
            SystemMode::Startup => Self::MONITOR_ONLY.union(Self::CALIBRATE),
            SystemMode::Operational => Self::all(),
            SystemMode::Degraded => Self::MONITOR_ONLY,
            SystemMode::Emergency => Self::MONITOR_ONLY,
            SystemMode::Test => Self::all(),
        }
    }

    /// Whether `action` is authorized
    #[inline]
    pub const fn allows(self, action: Action) -> bool {
        self.contains(action.permission())
    }

    #[inline]
    pub const fn can_actuate(self) -> bool {
        self.contains(Self::ACTUATE)
    }

    #[inline]
    pub const fn can_calibrate(self) -> bool {
        self.contains(Self::CALIBRATE)
    }

    #[inline]
    pub const fn can_log(self) -> bool {
        self.contains(Self::LOG)
    }

    #[inline]
    pub const fn can_communicate(self) -> bool {
        self.contains(Self::COMMUNICATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        let expect = [
            (SystemMode::Init, false, false),
            (SystemMode::Startup, false, true),
            (SystemMode::Operational, true, true),
            (SystemMode::Degraded, false, false),
            (SystemMode::Emergency, false, false),
            (SystemMode::Test, true, true),
        ];

        for (mode, actuate, calibrate) in expect {
            let p = Permissions::for_mode(mode);
            assert_eq!(p.can_actuate(), actuate, "{}", mode);
            assert_eq!(p.can_calibrate(), calibrate, "{}", mode);
            assert!(p.can_log(), "{}", mode);
            assert!(p.can_communicate(), "{}", mode);
        }
    }

    #[test]
    fn test_allows() {
        let degraded = SystemMode::Degraded.permissions();
        assert!(!degraded.allows(Action::Actuate));
        assert!(!degraded.allows(Action::Calibrate));
        assert!(degraded.allows(Action::Log));
        assert!(degraded.allows(Action::Communicate));

        assert!(SystemMode::Test.permissions().allows(Action::Actuate));
    }

    #[test]
    fn test_all_is_four_bits() {
        assert_eq!(Permissions::all().bits(), 0x0F);
    }
}
