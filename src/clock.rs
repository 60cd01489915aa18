//! Wall-clock abstraction for platform-agnostic timekeeping.
//!
//! The `Clock` trait provides second-resolution wall-clock time that can be
//! implemented for any platform (SNTP-synced RTC, monotonic uptime counter,
//! mock clock in tests). The cache only ever subtracts timestamps, so the
//! epoch is irrelevant; the clock is assumed monotonic once set.

/// Wall-clock time in whole seconds.
///
/// Newtype over `u64` so raw second counts and cache ages cannot be mixed up.
/// Ordering and equality follow the underlying count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a timestamp from a second count.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Raw second count.
    pub const fn as_secs(self) -> u64 {
        self.0
    }

    /// Seconds elapsed since `earlier`, saturating at zero.
    ///
    /// Saturation covers clocks that step backwards after a time re-sync; a
    /// cached value can then appear fresher than it is for one cycle, but
    /// never trigger a spurious u64 wraparound expiry.
    pub const fn seconds_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Platform-agnostic clock trait.
///
/// Implementations return the current wall-clock time. Called once per poll
/// cycle and once per request; must not block.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Timestamp;
}
