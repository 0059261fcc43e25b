//! # Dwell Counter
//!
//! Consecutive cycles spent in the current mode. Reset on every transition,
//! incremented by one on every cycle without one. Guards the two recovery
//! transitions only; fault entry never waits on it.

/// Cycles in the current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DwellCounter {
    ticks: u32,
}

impl DwellCounter {
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    /// Called on a transition
    #[inline]
    pub fn reset(&mut self) {
        self.ticks = 0;
    }

    /// Called on a cycle without a transition. Saturates rather than wrapping
    /// back to zero, which would look like a transition.
    #[inline]
    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    #[inline]
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Hysteresis guard
    #[inline]
    pub const fn has_reached(&self, minimum: u32) -> bool {
        self.ticks >= minimum
    }
}
