//! # Mode Manager Errors
//!
//! | Condition          | Raised by                     | Meaning                           |
//! |--------------------|-------------------------------|-----------------------------------|
//! | `MissingInput`     | `ModeInput::from_slice`       | producer did not report every monitor |
//! | `InvalidConfig`    | `ModeManager::new`            | dwell minimum below one           |
//! | `Locked`           | `ModeManager::enter_test`     | operator action refused in a sticky mode |
//!
//! Monitor faults are *not* errors. A Faulty report is ordinary input that
//! drives the manager into EMERGENCY.

use core::fmt;

use crate::mode::SystemMode;

/// Mode manager error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    /// Wrong number of monitor reports for one cycle
    MissingInput {
        /// Reports required per cycle
        expected: usize,
        /// Reports supplied
        actual: usize,
    },

    /// Configuration rejected at construction
    InvalidConfig {
        /// Offending field
        field: &'static str,
        /// Rejected value
        value: u32,
    },

    /// Transition refused because the current mode is locked
    Locked {
        /// Mode that refused the request
        mode: SystemMode,
    },
}

/// Result alias for mode manager operations
pub type ModeResult<T> = Result<T, ModeError>;

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { expected, actual } => {
                write!(f, "missing input: expected {} monitor reports, got {}", expected, actual)
            },
            Self::InvalidConfig { field, value } => {
                write!(f, "invalid configuration: {} = {} (must be >= 1)", field, value)
            },
            Self::Locked { mode } => write!(f, "transition locked in {} mode", mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    /// Fixed-capacity sink so Display can be checked without an allocator
    struct Buf {
        data: [u8; 96],
        len: usize,
    }

    impl Write for Buf {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            let bytes = s.as_bytes();
            let end = self.len + bytes.len();
            if end > self.data.len() {
                return Err(fmt::Error);
            }
            self.data[self.len..end].copy_from_slice(bytes);
            self.len = end;
            Ok(())
        }
    }

    fn render(err: &ModeError) -> Buf {
        let mut buf = Buf { data: [0; 96], len: 0 };
        write!(buf, "{}", err).unwrap();
        buf
    }

    #[test]
    fn test_display_locked() {
        let buf = render(&ModeError::Locked { mode: SystemMode::Emergency });
        assert_eq!(&buf.data[..buf.len], b"transition locked in EMERGENCY mode");
    }

    #[test]
    fn test_display_config() {
        let buf = render(&ModeError::InvalidConfig { field: "min_dwell_startup", value: 0 });
        assert_eq!(
            &buf.data[..buf.len],
            b"invalid configuration: min_dwell_startup = 0 (must be >= 1)"
        );
    }
}
