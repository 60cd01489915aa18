//! Error types for request processing.
//!
//! The `StationError` enum represents every error condition a request can hit.
//! Each variant carries the exact message served on the wire, so consumers can
//! tell a caller mistake (bad token, bad id) from a sensor condition.

use core::fmt;

/// Request processing error.
///
/// Nothing here is fatal: every variant degrades to an error response body
/// and the control loop keeps running. The distinction between a single
/// failed sample and an expired slot is intentionally not visible to
/// consumers; both surface as `SensorUnavailable`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StationError {
    /// Token query parameter missing or wrong (intentionally one message for both)
    AuthFailure,

    /// No sensor id in the request
    MissingId,

    /// Sensor id not a number or outside the configured 1..=N set
    InvalidId,

    /// Slot has no servable snapshot (never sampled, or retention window elapsed)
    SensorUnavailable,
}

impl StationError {
    /// Wire message for this error, as embedded in the JSON response body.
    pub const fn message(&self) -> &'static str {
        match self {
            StationError::AuthFailure => "You forget some params",
            StationError::MissingId => "You forget set id",
            StationError::InvalidId => "Incorrect id",
            StationError::SensorUnavailable => "Failed to read from DHT sensor!",
        }
    }
}

impl fmt::Display for StationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
