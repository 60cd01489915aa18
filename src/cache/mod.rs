//! Per-sensor cache table.
//!
//! This module owns the fixed array of [`SensorSlot`] records — one slot per
//! configured sensor, preallocated for the lifetime of the process. Slots are
//! written only by the staleness engine ([`staleness`]); every other component
//! reads them through [`SensorTable::slot`] or the query facade.

use core::marker::PhantomData;

use crate::clock::Timestamp;
use crate::config::StationConfig;
use crate::sensor::{Reading, SensorId};

pub mod heat_index;
pub mod staleness;

/// Last-known values for one sensor.
///
/// `None` is the explicit invalid marker (replacing the classic NaN trick).
/// Invariant: `heat_index` is `None` whenever either input field is `None`,
/// and is recomputed together with them on every commit — it can never be
/// stale relative to the temperature/humidity pair it was derived from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SensorSlot {
    /// Last accepted temperature in degrees Celsius
    pub temperature: Option<f32>,

    /// Last accepted relative humidity in percent
    pub humidity: Option<f32>,

    /// Heat index derived from the two fields above, same generation
    pub heat_index: Option<f32>,

    /// Time of the last successful sample; `None` means "never"
    pub last_good: Option<Timestamp>,
}

impl SensorSlot {
    /// The initial (and post-expiry) state: everything invalid.
    pub const EMPTY: SensorSlot = SensorSlot {
        temperature: None,
        humidity: None,
        heat_index: None,
        last_good: None,
    };
}

/// Logical freshness state of a slot, derived from elapsed time.
///
/// Never stored: `Fresh` decays into `Stale` purely by the clock advancing,
/// without any field mutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SlotState {
    /// Never sampled successfully, or past the retention window
    Invalid,

    /// Age below the refresh interval; served as-is, no new sample taken
    Fresh,

    /// Age between the two thresholds; still served, refresh attempted
    Stale,
}

/// Fixed-size cache table, one slot per configured sensor.
///
/// `C` supplies the two freshness thresholds at compile time; `N` is the
/// sensor count. All slots are preallocated, so the hot loop has no
/// allocation-failure paths.
pub struct SensorTable<C: StationConfig, const N: usize> {
    slots: [SensorSlot; N],
    _config: PhantomData<C>,
}

impl<C: StationConfig, const N: usize> SensorTable<C, N> {
    /// Create a table with every slot in the invalid state.
    pub const fn new() -> Self {
        Self {
            slots: [SensorSlot::EMPTY; N],
            _config: PhantomData,
        }
    }

    /// Read access to one slot.
    pub fn slot(&self, id: SensorId<N>) -> &SensorSlot {
        &self.slots[id.index()]
    }

    /// Derived freshness state of one slot at time `now`.
    pub fn state(&self, id: SensorId<N>, now: Timestamp) -> SlotState {
        match self.slots[id.index()].last_good {
            None => SlotState::Invalid,
            Some(last_good) => {
                let age = now.seconds_since(last_good);
                if age > C::RETENTION_WINDOW_SECS {
                    SlotState::Invalid
                } else if age >= C::REFRESH_INTERVAL_SECS {
                    SlotState::Stale
                } else {
                    SlotState::Fresh
                }
            }
        }
    }

    /// Whether the retention window has elapsed (or the slot never had a
    /// good sample). Used by the staleness engine's expiry check.
    pub fn is_expired(&self, id: SensorId<N>, now: Timestamp) -> bool {
        match self.slots[id.index()].last_good {
            None => true,
            Some(last_good) => now.seconds_since(last_good) > C::RETENTION_WINDOW_SECS,
        }
    }

    /// Whether the refresh interval has elapsed and a new sample is due.
    pub fn needs_refresh(&self, id: SensorId<N>, now: Timestamp) -> bool {
        match self.slots[id.index()].last_good {
            None => true,
            Some(last_good) => now.seconds_since(last_good) >= C::REFRESH_INTERVAL_SECS,
        }
    }

    /// Commit a successful sample: store both fields, recompute the heat
    /// index from the same pair, mark `now` as the last good time.
    ///
    /// A failed sample is *not* committed at all — the slot keeps its cached
    /// values and keeps aging toward the retention window, so one transient
    /// glitch never blanks the display or the API.
    pub fn commit(&mut self, id: SensorId<N>, reading: &Reading, now: Timestamp) {
        let slot = &mut self.slots[id.index()];
        slot.temperature = Some(reading.temperature);
        slot.humidity = Some(reading.humidity);
        slot.heat_index = Some(heat_index::heat_index(reading.temperature, reading.humidity));
        slot.last_good = Some(now);
    }

    /// Reset a slot to the invalid state. Idempotent.
    pub fn invalidate(&mut self, id: SensorId<N>) {
        self.slots[id.index()] = SensorSlot::EMPTY;
    }
}

impl<C: StationConfig, const N: usize> Default for SensorTable<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: StationConfig, const N: usize> core::fmt::Debug for SensorTable<C, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SensorTable")
            .field("slots", &self.slots)
            .finish()
    }
}
