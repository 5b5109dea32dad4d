//! Injectable time source.
//!
//! Effect instances record when they were applied. Production code uses
//! [`SystemClock`]; tests use [`FixedClock`] so timestamps are deterministic.

/// Source of the current time as unix seconds.
pub trait Clock {
    fn now(&self) -> i64;
}

/// Wall-clock time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Always returns the same instant. For deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}
