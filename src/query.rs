//! Read-only query facade over the cache table.
//!
//! Consumers (the request layer, the display) go through [`snapshot`] and get
//! either a fully valid value set or nothing — never a partially valid
//! reading. Pure read; the facade cannot mutate a slot.

use crate::cache::SensorTable;
use crate::config::StationConfig;
use crate::sensor::SensorId;

/// A servable value set for one sensor. All fields valid, same generation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Snapshot {
    /// Temperature in degrees Celsius
    pub temperature: f32,

    /// Relative humidity in percent
    pub humidity: f32,

    /// Heat index derived from the two fields above
    pub heat_index: f32,
}

/// Current snapshot for one sensor, or `None` when any field is invalid.
///
/// Takes a validated [`SensorId`], so an out-of-range identifier cannot get
/// here — that is a request-layer error, distinct from a sensor condition.
pub fn snapshot<C: StationConfig, const N: usize>(
    table: &SensorTable<C, N>,
    id: SensorId<N>,
) -> Option<Snapshot> {
    let slot = table.slot(id);
    Some(Snapshot {
        temperature: slot.temperature?,
        humidity: slot.humidity?,
        heat_index: slot.heat_index?,
    })
}
