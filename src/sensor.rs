//! Sensor abstraction: raw readings, validated sensor indices, and the
//! platform trait for taking a sample.
//!
//! The `SensorSource` trait is the only boundary to physical hardware. The
//! cache never interprets the driver's error type; any `Err` simply counts as
//! one failed cycle and the slot keeps aging toward its retention window.

/// One raw temperature/humidity sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius
    pub temperature: f32,

    /// Relative humidity in percent
    pub humidity: f32,
}

/// DHT21 measurable temperature range (datasheet)
const TEMPERATURE_RANGE_C: core::ops::RangeInclusive<f32> = -40.0..=80.0;

/// Relative humidity range
const HUMIDITY_RANGE_PCT: core::ops::RangeInclusive<f32> = 0.0..=100.0;

impl Reading {
    /// Create a reading.
    pub const fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    /// Whether both fields are physically plausible.
    ///
    /// NaN or out-of-range values mean a garbled bus transfer; the whole
    /// reading is then treated as a failed sample and nothing is committed.
    /// (NaN fails the range checks by comparison semantics.)
    pub fn is_plausible(&self) -> bool {
        TEMPERATURE_RANGE_C.contains(&self.temperature)
            && HUMIDITY_RANGE_PCT.contains(&self.humidity)
    }
}

/// Validated sensor index for a station with `N` configured sensors.
///
/// Internally 0-based; the wire protocol and display labels use the 1-based
/// form (`external`). Both constructors are bounds-checked, so an
/// out-of-range id cannot reach the cache or the query facade at all —
/// "incorrect id" is a request-layer error, not a cache state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SensorId<const N: usize>(usize);

impl<const N: usize> SensorId<N> {
    /// Create from a 0-based slot index. Returns `None` when `index >= N`.
    pub const fn new(index: usize) -> Option<Self> {
        if index < N { Some(Self(index)) } else { None }
    }

    /// Create from the 1-based id used on the wire. Returns `None` outside `1..=N`.
    pub const fn from_external(id: u32) -> Option<Self> {
        if id >= 1 && (id as usize) <= N {
            Some(Self(id as usize - 1))
        } else {
            None
        }
    }

    /// 0-based slot index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// 1-based id as used in requests and display labels.
    pub const fn external(self) -> u32 {
        self.0 as u32 + 1
    }

    /// All configured sensor ids in slot order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N).map(Self)
    }
}

/// Platform-agnostic sensor trait.
///
/// Implementations read one sensor and either return a sample or fail. A
/// slow conversion must be bounded by the driver (return `Err` on timeout);
/// the cache retries naturally on the next refresh cycle, never within one.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct DhtBank {
///     pins: [DhtPin; 3],
/// }
///
/// impl SensorSource<3> for DhtBank {
///     type Error = DhtError;
///
///     fn sample(&mut self, id: SensorId<3>) -> Result<Reading, DhtError> {
///         let raw = self.pins[id.index()].read_blocking()?;
///         Ok(Reading::new(raw.temperature_c, raw.humidity_pct))
///     }
/// }
/// ```
pub trait SensorSource<const N: usize> {
    /// Platform-specific error type (never interpreted by the cache)
    type Error;

    /// Take one sample from the given sensor.
    fn sample(&mut self, id: SensorId<N>) -> Result<Reading, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_reading() {
        assert!(Reading::new(21.5, 40.0).is_plausible());
        assert!(Reading::new(-40.0, 0.0).is_plausible());
        assert!(Reading::new(80.0, 100.0).is_plausible());
    }

    #[test]
    fn test_nan_is_implausible() {
        assert!(!Reading::new(f32::NAN, 40.0).is_plausible());
        assert!(!Reading::new(21.5, f32::NAN).is_plausible());
    }

    #[test]
    fn test_out_of_range_is_implausible() {
        assert!(!Reading::new(150.0, 40.0).is_plausible());
        assert!(!Reading::new(-60.0, 40.0).is_plausible());
        assert!(!Reading::new(21.5, 120.0).is_plausible());
        assert!(!Reading::new(21.5, -1.0).is_plausible());
    }

    #[test]
    fn test_sensor_id_bounds() {
        assert_eq!(SensorId::<3>::new(0).map(SensorId::index), Some(0));
        assert_eq!(SensorId::<3>::new(2).map(SensorId::index), Some(2));
        assert!(SensorId::<3>::new(3).is_none());
    }

    #[test]
    fn test_external_mapping() {
        let id = SensorId::<3>::from_external(1).unwrap();
        assert_eq!(id.index(), 0);
        assert_eq!(id.external(), 1);

        let id = SensorId::<3>::from_external(3).unwrap();
        assert_eq!(id.index(), 2);
        assert_eq!(id.external(), 3);

        assert!(SensorId::<3>::from_external(0).is_none());
        assert!(SensorId::<3>::from_external(4).is_none());
    }

    #[test]
    fn test_all_iterates_in_slot_order() {
        let ids: heapless::Vec<usize, 3> = SensorId::<3>::all().map(SensorId::index).collect();
        assert_eq!(ids.as_slice(), &[0, 1, 2]);
    }
}
