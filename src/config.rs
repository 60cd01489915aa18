//! Configuration traits and implementations for cache timing and buffer sizing.
//!
//! The `StationConfig` trait allows compile-time configuration of the cache
//! freshness thresholds without runtime overhead.

/// Station configuration trait defining cache thresholds and buffer limits.
///
/// All values are const (zero runtime cost). The two thresholds implement the
/// two-tier freshness policy:
///
/// - below `REFRESH_INTERVAL_SECS` since the last good sample, cached values
///   are reused and the sensor is not touched;
/// - between the two thresholds, cached values keep being served but a
///   refresh attempt is made every poll cycle;
/// - past `RETENTION_WINDOW_SECS`, the slot is invalidated regardless of what
///   is cached.
pub trait StationConfig {
    /// Reuse cached values younger than this (default: 15 s)
    const REFRESH_INTERVAL_SECS: u64;

    /// Invalidate slots with no good sample within this window (default: 300 s)
    const RETENTION_WINDOW_SECS: u64;

    /// Suggested cadence for the embedding control loop (default: 1 s)
    const POLL_PERIOD_SECS: u64;

    /// Maximum JSON response body length (default: 128)
    const MAX_RESPONSE: usize;
}

/// Default configuration matching DHT21-class sensors.
///
/// The DHT21 needs roughly 2 s between conversions; a 15 s refresh interval
/// keeps well clear of that while a 5 minute retention window tolerates
/// transient read failures without blanking consumers:
/// - REFRESH_INTERVAL_SECS: 15
/// - RETENTION_WINDOW_SECS: 300
/// - POLL_PERIOD_SECS: 1
/// - MAX_RESPONSE: 128 bytes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl StationConfig for DefaultConfig {
    const REFRESH_INTERVAL_SECS: u64 = 15;
    const RETENTION_WINDOW_SECS: u64 = 5 * 60;
    const POLL_PERIOD_SECS: u64 = 1;
    const MAX_RESPONSE: usize = 128;
}

/// Relaxed configuration for slow-moving environments.
///
/// Longer intervals for battery-powered or thermally inert installations:
/// - REFRESH_INTERVAL_SECS: 60
/// - RETENTION_WINDOW_SECS: 900
/// - POLL_PERIOD_SECS: 5
/// - MAX_RESPONSE: 128 bytes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SlowSensorConfig;

impl StationConfig for SlowSensorConfig {
    const REFRESH_INTERVAL_SECS: u64 = 60;
    const RETENTION_WINDOW_SECS: u64 = 15 * 60;
    const POLL_PERIOD_SECS: u64 = 5;
    const MAX_RESPONSE: usize = 128;
}
