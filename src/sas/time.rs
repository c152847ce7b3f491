//! Time sources for computing absolute expiry.

use crate::error::Result;
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the current Unix time in whole seconds.
pub trait TimeSource {
    fn now_unix(&self) -> Result<i64>;
}

/// Wall clock backed by [`SystemTime`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_unix(&self) -> Result<i64> {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
        // Saturate instead of wrapping for clocks past year 292 billion.
        Ok(i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
    }
}

/// A clock frozen at a given Unix timestamp.
///
/// Used to produce reproducible signatures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedTimeSource(pub i64);

impl TimeSource for FixedTimeSource {
    fn now_unix(&self) -> Result<i64> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_time_is_after_2020() {
        let now = SystemTimeSource.now_unix().unwrap();
        assert!(now > 1_577_836_800);
    }

    #[test]
    fn fixed_time_returns_its_value() {
        assert_eq!(FixedTimeSource(42).now_unix().unwrap(), 42);
    }
}
