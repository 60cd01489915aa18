//! Heat index ("feels like" temperature) derived from one reading.
//!
//! Rothfusz/Steadman regression as published by the US NWS, computed in
//! Fahrenheit and converted back. This matches what DHT sensor libraries
//! ship, so values agree with the usual hobbyist firmware output.

use libm::{fabsf, sqrtf};

/// Compute the heat index in degrees Celsius.
///
/// Below the regression's validity threshold the simple Steadman formula is
/// used; above it, the full Rothfusz regression with the NWS low-humidity and
/// high-humidity adjustments.
///
/// Inputs must already be validated ([`crate::Reading::is_plausible`]); this
/// function is pure arithmetic and does not re-check them.
pub fn heat_index(temperature_c: f32, humidity_pct: f32) -> f32 {
    let t = temperature_c * 1.8 + 32.0;
    let rh = humidity_pct;

    let mut hi = 0.5 * (t + 61.0 + ((t - 68.0) * 1.2) + (rh * 0.094));

    if hi > 79.0 {
        hi = -42.379 + 2.04901523 * t + 10.14333127 * rh
            + -0.22475541 * t * rh
            + -0.00683783 * t * t
            + -0.05481717 * rh * rh
            + 0.00122874 * t * t * rh
            + 0.00085282 * t * rh * rh
            + -0.00000199 * t * t * rh * rh;

        if rh < 13.0 && (80.0..=112.0).contains(&t) {
            hi -= ((13.0 - rh) * 0.25) * sqrtf((17.0 - fabsf(t - 95.0)) * 0.05882);
        } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
            hi += ((rh - 85.0) * 0.1) * ((87.0 - t) * 0.2);
        }
    }

    (hi - 32.0) * 0.55555
}
