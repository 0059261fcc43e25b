//! # Health States and Monitors
//!
//! Each monitor maps its internal condition onto one of five normalized
//! health states. The mode manager never looks past this enumeration.

use core::fmt;

use static_assertions::const_assert;

// =============================================================================
// MONITORS
// =============================================================================

/// Number of monitored components feeding the supervisor
pub const MONITOR_COUNT: usize = 6;

// One trigger bit per monitor, plus two reserved bits, must fit in a byte.
const_assert!(MONITOR_COUNT <= 6);

/// A monitored component, in health-array order
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Monitor {
    /// Liveness / heartbeat detection
    Pulse     = 0,

    /// Statistical deviation from a learned baseline
    Baseline  = 1,

    /// Timing jitter
    Timing    = 2,

    /// Trend / slope toward an operational limit
    Drift     = 3,

    /// Multi-source voting
    Consensus = 4,

    /// Bounded-queue backpressure
    Pressure  = 5,
}

impl Monitor {
    /// All monitors in index order
    pub const ALL: [Monitor; MONITOR_COUNT] = [
        Monitor::Pulse,
        Monitor::Baseline,
        Monitor::Timing,
        Monitor::Drift,
        Monitor::Consensus,
        Monitor::Pressure,
    ];

    /// Position in the health array
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a monitor by its health-array position
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < MONITOR_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Short upper-case name used in logs and audit dumps
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pulse => "PULSE",
            Self::Baseline => "BASELINE",
            Self::Timing => "TIMING",
            Self::Drift => "DRIFT",
            Self::Consensus => "CONSENSUS",
            Self::Pressure => "PRESSURE",
        }
    }
}

impl fmt::Display for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// HEALTH STATE
// =============================================================================

/// Normalized health reported by a single monitor
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HealthState {
    /// Not yet initialized
    #[default]
    Unknown  = 0,

    /// Gathering evidence (baseline not yet established)
    Learning = 1,

    /// Normal operation
    Healthy  = 2,

    /// Functional, but warning
    Degraded = 3,

    /// Critical failure
    Faulty   = 4,
}

impl HealthState {
    /// Decode a numeric health code as reported by a producer
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Unknown),
            1 => Some(Self::Learning),
            2 => Some(Self::Healthy),
            3 => Some(Self::Degraded),
            4 => Some(Self::Faulty),
            _ => None,
        }
    }

    /// Neither degraded nor faulty
    #[inline]
    pub const fn is_ok(self) -> bool {
        !matches!(self, Self::Degraded | Self::Faulty)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Learning => "LEARNING",
            Self::Healthy => "HEALTHY",
            Self::Degraded => "DEGRADED",
            Self::Faulty => "FAULTY",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_index_roundtrip() {
        for (i, monitor) in Monitor::ALL.iter().enumerate() {
            assert_eq!(monitor.index(), i);
            assert_eq!(Monitor::from_index(i), Some(*monitor));
        }
        assert_eq!(Monitor::from_index(MONITOR_COUNT), None);
    }

    #[test]
    fn test_health_from_raw() {
        assert_eq!(HealthState::from_raw(2), Some(HealthState::Healthy));
        assert_eq!(HealthState::from_raw(4), Some(HealthState::Faulty));
        assert_eq!(HealthState::from_raw(5), None);
        assert_eq!(HealthState::from_raw(255), None);
    }

    #[test]
    fn test_is_ok() {
        assert!(HealthState::Unknown.is_ok());
        assert!(HealthState::Learning.is_ok());
        assert!(HealthState::Healthy.is_ok());
        assert!(!HealthState::Degraded.is_ok());
        assert!(!HealthState::Faulty.is_ok());
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(HealthState::default(), HealthState::Unknown);
    }
}
