//! # Shared Mode Manager
//!
//! A [`ModeManager`] behind a `spin::Mutex`, for systems where the control
//! loop and an operator console run in different contexts. Every operation
//! takes the lock for its full duration, so an operator reset can never
//! interleave with a half-finished evaluation.

use spin::Mutex;

use crate::config::ModeConfig;
use crate::error::ModeResult;
use crate::input::ModeInput;
use crate::manager::{CycleResult, ModeManager};
use crate::mode::SystemMode;

/// Lock-wrapped mode manager
#[derive(Debug)]
pub struct SharedModeManager {
    inner: Mutex<ModeManager>,
}

impl SharedModeManager {
    pub fn new(config: ModeConfig) -> ModeResult<Self> {
        Ok(Self::from_manager(ModeManager::new(config)?))
    }

    pub const fn from_manager(manager: ModeManager) -> Self {
        Self { inner: Mutex::new(manager) }
    }

    pub fn evaluate(&self, input: &ModeInput) -> CycleResult {
        self.inner.lock().evaluate(input)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn enter_test(&self) -> ModeResult<()> {
        self.inner.lock().enter_test()
    }

    pub fn exit_test(&self) {
        self.inner.lock().exit_test();
    }

    pub fn mode(&self) -> SystemMode {
        self.inner.lock().mode()
    }

    pub fn is_fault(&self) -> bool {
        self.inner.lock().is_fault()
    }

    /// Run `f` with the manager locked
    pub fn with<R>(&self, f: impl FnOnce(&ModeManager) -> R) -> R {
        f(&self.inner.lock())
    }

    pub fn into_inner(self) -> ModeManager {
        self.inner.into_inner()
    }
}

impl Default for SharedModeManager {
    fn default() -> Self {
        Self::from_manager(ModeManager::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModeError;
    use crate::input::Timestamp;
    use warden_health::HealthState;

    #[test]
    fn test_shared_operations() {
        let shared = SharedModeManager::default();

        let r = shared.evaluate(&ModeInput::uniform(HealthState::Faulty, Timestamp(5)));
        assert_eq!(r.mode, SystemMode::Emergency);
        assert!(shared.is_fault());
        assert_eq!(shared.enter_test(), Err(ModeError::Locked { mode: SystemMode::Emergency }));

        shared.reset();
        assert_eq!(shared.mode(), SystemMode::Init);
        assert!(!shared.is_fault());

        shared.enter_test().unwrap();
        assert_eq!(shared.mode(), SystemMode::Test);
        shared.exit_test();

        let total = shared.with(|m| m.audit().total_transitions());
        assert_eq!(total, 4);

        let manager = shared.into_inner();
        assert_eq!(manager.mode(), SystemMode::Init);
    }

    #[test]
    fn test_new_validates() {
        let cfg = ModeConfig { min_dwell_startup: 0, ..Default::default() };
        assert!(SharedModeManager::new(cfg).is_err());
    }
}
