//! Timeout value object

use std::fmt;

use crate::domain::error::ValidationError;

/// Shortest accepted display timeout
pub const MIN_TIMEOUT_SECS: i64 = 1;

/// Longest accepted display timeout
pub const MAX_TIMEOUT_SECS: i64 = 300;

/// Default display timeout
pub const DEFAULT_TIMEOUT_SECS: u32 = 10;

/// Display timeout in whole seconds.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timeout {
    seconds: u32,
}

impl Timeout {
    /// Create a timeout, rejecting values outside `[1, 300]`
    pub fn new(secs: i64) -> Result<Self, ValidationError> {
        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&secs) {
            return Err(ValidationError::TimeoutOutOfRange { value: secs });
        }

        // In range, so the cast cannot truncate
        Ok(Self {
            seconds: secs as u32,
        })
    }

    /// Default display timeout (10 seconds)
    pub const fn default_timeout() -> Self {
        Self {
            seconds: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Get timeout in seconds
    pub const fn as_secs(&self) -> u32 {
        self.seconds
    }

    /// Get timeout in milliseconds
    pub const fn as_millis(&self) -> u32 {
        self.seconds * 1000
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self::default_timeout()
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_bounds() {
        assert_eq!(Timeout::new(1).unwrap().as_secs(), 1);
        assert_eq!(Timeout::new(300).unwrap().as_secs(), 300);
    }

    #[test]
    fn rejects_out_of_range() {
        for value in [0, -5, 301, 1000] {
            assert_eq!(
                Timeout::new(value),
                Err(ValidationError::TimeoutOutOfRange { value })
            );
        }
    }

    #[test]
    fn conversions() {
        let t = Timeout::new(5).unwrap();
        assert_eq!(t.as_millis(), 5000);
        assert_eq!(t.to_string(), "5s");
    }

    #[test]
    fn default_is_ten_seconds() {
        assert_eq!(Timeout::default().as_secs(), 10);
    }
}
