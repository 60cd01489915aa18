//! Station orchestration.
//!
//! `Station` composes the cache table with the platform seams (sensor source,
//! clock) and the token guard, giving the embedding firmware one object to
//! drive from its cooperative loop. Single-threaded by construction: the only
//! mutating call is [`Station::tick`] (`&mut self`), reads take `&self`, and
//! the loop interleaves them so a read never observes a half-applied commit.

use crate::api::{self, JsonResponse};
use crate::cache::staleness;
use crate::cache::{SensorTable, SlotState};
use crate::clock::Clock;
use crate::config::StationConfig;
use crate::display::{self, LineText};
use crate::query::{Snapshot, snapshot};
use crate::sensor::{SensorId, SensorSource};
use crate::token::TokenGuard;

/// Multi-sensor station core.
///
/// Generic over:
/// - `S`: SensorSource implementation (the hardware driver)
/// - `K`: Clock implementation
/// - `C`: StationConfig implementation
/// - `N`: number of configured sensors
pub struct Station<S, K, C, const N: usize>
where
    S: SensorSource<N>,
    K: Clock,
    C: StationConfig,
{
    table: SensorTable<C, N>,
    source: S,
    clock: K,
    token: TokenGuard,
}

impl<S, K, C, const N: usize> Station<S, K, C, N>
where
    S: SensorSource<N>,
    K: Clock,
    C: StationConfig,
{
    /// Create a station with every slot in the invalid state.
    pub fn new(source: S, clock: K, token: TokenGuard) -> Self {
        Self {
            table: SensorTable::new(),
            source,
            clock,
            token,
        }
    }

    /// Run one poll cycle: the staleness engine services every sensor in
    /// slot order. Call once per iteration of the control loop.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        staleness::service_all(&mut self.table, &mut self.source, now);
    }

    /// Servable snapshot for one sensor, if any.
    pub fn snapshot(&self, id: SensorId<N>) -> Option<Snapshot> {
        snapshot(&self.table, id)
    }

    /// Derived freshness state for one sensor at the current time.
    pub fn state(&self, id: SensorId<N>) -> SlotState {
        self.table.state(id, self.clock.now())
    }

    /// Answer one read request with a JSON body (always servable; errors are
    /// in-body).
    pub fn handle_request(&self, token: Option<&str>, id: Option<&str>) -> JsonResponse {
        api::handle_request(&self.table, &self.token, token, id)
    }

    /// Display line for one sensor.
    pub fn display_line(&self, id: SensorId<N>) -> LineText {
        display::format_line(id, self.table.slot(id))
    }

    /// Read access to the cache table.
    pub fn table(&self) -> &SensorTable<C, N> {
        &self.table
    }
}

impl<S, K, C, const N: usize> core::fmt::Debug for Station<S, K, C, N>
where
    S: SensorSource<N>,
    K: Clock,
    C: StationConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Station")
            .field("table", &self.table)
            .field("source", &"<dyn SensorSource>")
            .field("clock", &"<dyn Clock>")
            .finish_non_exhaustive()
    }
}
