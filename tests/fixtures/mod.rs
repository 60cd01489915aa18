//! Test fixtures and utilities for dht-station testing.
//!
//! Provides:
//! - `MockSensor`: scripted implementation of the SensorSource trait
//! - `MockClock`: settable implementation of the Clock trait
//! - `TestConfig`: the default thresholds (15 s refresh, 300 s retention)
//! - Reading constants for common scenarios

#![allow(dead_code)]

use dht_station::{Clock, Reading, SensorId, SensorSource, StationConfig, Timestamp};
use std::cell::Cell;
use std::collections::VecDeque;

/// Number of sensors in all integration tests.
pub const SENSORS: usize = 3;

/// The reading used by most scenarios.
pub const ROOM: Reading = Reading::new(21.5, 40.0);

// ============================================================================
// TestConfig - Cache Thresholds
// ============================================================================

/// Cache thresholds used across the integration tests:
/// 15 s refresh interval, 300 s retention window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestConfig;

impl StationConfig for TestConfig {
    const REFRESH_INTERVAL_SECS: u64 = 15;
    const RETENTION_WINDOW_SECS: u64 = 300;
    const POLL_PERIOD_SECS: u64 = 1;
    const MAX_RESPONSE: usize = 128;
}

// ============================================================================
// MockClock - Settable Clock
// ============================================================================

/// Settable clock for driving the staleness engine through time.
///
/// Interior mutability lets a test advance time while a `Station` holds a
/// shared reference (`Clock` is also implemented for `&MockClock`).
#[derive(Debug, Default)]
pub struct MockClock {
    secs: Cell<u64>,
}

impl MockClock {
    /// Create a clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock at an absolute second count.
    pub fn at(secs: u64) -> Self {
        Self {
            secs: Cell::new(secs),
        }
    }

    /// Jump to an absolute second count.
    pub fn set(&self, secs: u64) {
        self.secs.set(secs);
    }

    /// Advance by a number of seconds.
    pub fn advance(&self, secs: u64) {
        self.secs.set(self.secs.get() + secs);
    }
}

impl Clock for MockClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.secs.get())
    }
}

impl Clock for &MockClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.secs.get())
    }
}

// ============================================================================
// MockSensor - Scripted Sensor Source
// ============================================================================

/// Error type of the mock sensor (the cache never looks inside).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockSensorError;

/// Scripted sensor source.
///
/// Each sensor has a queue of scripted outcomes consumed one per sample,
/// then falls back to a fixed outcome. Samples are counted so tests can
/// assert how often the engine actually touched the hardware.
#[derive(Debug)]
pub struct MockSensor {
    scripted: [VecDeque<Result<Reading, MockSensorError>>; SENSORS],
    fallback: [Result<Reading, MockSensorError>; SENSORS],
    samples_taken: [usize; SENSORS],
}

impl MockSensor {
    /// Every sample fails until scripted otherwise.
    pub fn failing() -> Self {
        Self {
            scripted: Default::default(),
            fallback: [Err(MockSensorError); SENSORS],
            samples_taken: [0; SENSORS],
        }
    }

    /// Every sample returns `reading` until scripted otherwise.
    pub fn steady(reading: Reading) -> Self {
        Self {
            scripted: Default::default(),
            fallback: [Ok(reading); SENSORS],
            samples_taken: [0; SENSORS],
        }
    }

    /// Queue one outcome for a sensor (consumed before the fallback).
    pub fn script(&mut self, index: usize, outcome: Result<Reading, MockSensorError>) {
        self.scripted[index].push_back(outcome);
    }

    /// Replace the fallback outcome for a sensor.
    pub fn set_fallback(&mut self, index: usize, outcome: Result<Reading, MockSensorError>) {
        self.fallback[index] = outcome;
    }

    /// How many samples the engine has requested from a sensor.
    pub fn samples_taken(&self, index: usize) -> usize {
        self.samples_taken[index]
    }
}

impl SensorSource<SENSORS> for MockSensor {
    type Error = MockSensorError;

    fn sample(&mut self, id: SensorId<SENSORS>) -> Result<Reading, MockSensorError> {
        let i = id.index();
        self.samples_taken[i] += 1;
        self.scripted[i]
            .pop_front()
            .unwrap_or(self.fallback[i])
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Sensor id from a 0-based index, panicking on test-author mistakes.
pub fn id(index: usize) -> SensorId<SENSORS> {
    SensorId::new(index).expect("index within SENSORS")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_clock() {
        let clock = MockClock::new();
        assert_eq!(clock.now(), Timestamp::from_secs(0));
        clock.advance(5);
        assert_eq!(clock.now(), Timestamp::from_secs(5));
        clock.set(300);
        assert_eq!(clock.now(), Timestamp::from_secs(300));
    }

    #[test]
    fn test_mock_sensor_script_then_fallback() {
        let mut sensor = MockSensor::failing();
        sensor.script(0, Ok(ROOM));

        assert_eq!(sensor.sample(id(0)), Ok(ROOM));
        assert_eq!(sensor.sample(id(0)), Err(MockSensorError));
        assert_eq!(sensor.samples_taken(0), 2);
        assert_eq!(sensor.samples_taken(1), 0);
    }
}
