//! Injectable time source for timed tokens.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds a timestamp may sit in the future before the verifier treats
/// the token as expired. Absorbs clock drift between issuer and verifier.
pub const SKEW_TOLERANCE: u64 = 5;

/// Source of "now", in whole seconds since the Unix epoch.
///
/// Capturing the timestamp is the only environmental read the crate
/// performs, so substituting the clock makes both building and expiry
/// checks fully deterministic.
pub trait Clock {
    /// Current time in seconds since the Unix epoch.
    fn now(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock predates the unix epoch")
            .as_secs()
    }
}

/// A clock pinned to a fixed instant, for tests and reproducible fixtures.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}
