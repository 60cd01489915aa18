//! The staleness engine: per-slot refresh/reuse/expire decisions.
//!
//! Runs once per sensor per poll cycle. Both checks are re-evaluated every
//! cycle (level-triggered, not edge-triggered): a failing sensor keeps
//! getting one refresh attempt per cycle once stale, and only goes invalid
//! after a full retention window of continuous failure.

use crate::cache::SensorTable;
use crate::clock::Timestamp;
use crate::config::StationConfig;
use crate::sensor::{SensorId, SensorSource};

/// Run one decision cycle for a single slot.
///
/// 1. Expiry: a slot whose last good sample is older than the retention
///    window (or that never had one) is blanked. This runs before the
///    refresh attempt, so a long-failing sensor is invalidated even when
///    this cycle's sample also fails — consumers never observe data older
///    than the retention window without being told it is invalid.
/// 2. Refresh: once the refresh interval has elapsed, take exactly one
///    sample. A plausible reading is committed (which also clears any
///    invalid state and recomputes the heat index); a failure or implausible
///    reading changes nothing and the slot keeps aging.
/// 3. Below the refresh interval the sensor is not touched at all, so a slow
///    sensor is never polled faster than its conversion time.
pub fn service_slot<C, S, const N: usize>(
    table: &mut SensorTable<C, N>,
    source: &mut S,
    id: SensorId<N>,
    now: Timestamp,
) where
    C: StationConfig,
    S: SensorSource<N>,
{
    if table.is_expired(id, now) {
        table.invalidate(id);
    }

    if table.needs_refresh(id, now) {
        match source.sample(id) {
            Ok(reading) if reading.is_plausible() => table.commit(id, &reading, now),
            Ok(_) | Err(_) => {}
        }
    }
}

/// Run one decision cycle for every configured sensor, in slot order.
pub fn service_all<C, S, const N: usize>(
    table: &mut SensorTable<C, N>,
    source: &mut S,
    now: Timestamp,
) where
    C: StationConfig,
    S: SensorSource<N>,
{
    for id in SensorId::all() {
        service_slot(table, source, id, now);
    }
}
