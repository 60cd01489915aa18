//! Fixed-width display formatting.
//!
//! Produces the per-sensor status line mirrored on the always-on display.
//! Column widths are fixed so successive redraws never shift: values are
//! clamped to the printable range, sub-10 magnitudes get two leading spaces,
//! and an invalid field renders as the literal `err`.

use core::fmt::Write;

use crate::cache::SensorSlot;
use crate::sensor::SensorId;

/// One formatted field (`"+21.5*C"`, `"40.0 %"`, `"err"`).
pub type FieldText = heapless::String<8>;

/// One full display line (`"d1: +21.5*C 40.0 %"`).
pub type LineText = heapless::String<24>;

/// Format a temperature field: explicit sign, clamp to +/-99.9, two leading
/// spaces below 10 units, one decimal, `*C` suffix.
pub fn format_temperature(value: Option<f32>) -> FieldText {
    let mut out = FieldText::new();
    let Some(t) = value else {
        let _ = out.push_str("err");
        return out;
    };

    let t = t.clamp(-99.9, 99.9);
    let sign = if t < 0.0 { '-' } else { '+' };
    // Round to display precision before the padding decision: 9.95..10.0
    // renders as 10.0, and padding that must match the rendered digits or
    // the field overflows its buffer
    let magnitude = libm::roundf(libm::fabsf(t) * 10.0) / 10.0;
    let pad = if magnitude < 10.0 { "  " } else { "" };
    let _ = write!(out, "{}{}{:.1}*C", sign, pad, magnitude);
    out
}

/// Format a humidity field: no sign, clamp to 0..=99.9, two leading spaces
/// below 10 units, one decimal, `" %"` suffix.
pub fn format_humidity(value: Option<f32>) -> FieldText {
    let mut out = FieldText::new();
    let Some(h) = value else {
        let _ = out.push_str("err");
        return out;
    };

    let h = libm::roundf(h.clamp(0.0, 99.9) * 10.0) / 10.0;
    let pad = if h < 10.0 { "  " } else { "" };
    let _ = write!(out, "{}{:.1} %", pad, h);
    out
}

/// Format the whole line for one sensor: `d<1-based>: <temp> <humidity>`.
///
/// Reads slot fields directly (not a snapshot), so each column degrades to
/// `err` independently should the invariants ever allow it.
pub fn format_line<const N: usize>(id: SensorId<N>, slot: &SensorSlot) -> LineText {
    let mut out = LineText::new();
    let _ = write!(
        out,
        "d{}: {} {}",
        id.external(),
        format_temperature(slot.temperature),
        format_humidity(slot.humidity)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_formatting() {
        assert_eq!(format_temperature(Some(21.5)).as_str(), "+21.5*C");
        assert_eq!(format_temperature(Some(9.9)).as_str(), "+  9.9*C");
        assert_eq!(format_temperature(Some(0.0)).as_str(), "+  0.0*C");
        assert_eq!(format_temperature(Some(-5.0)).as_str(), "-  5.0*C");
        assert_eq!(format_temperature(Some(-42.0)).as_str(), "-42.0*C");
        assert_eq!(format_temperature(None).as_str(), "err");
    }

    #[test]
    fn test_padding_follows_rounded_magnitude() {
        // 9.95..10.0 rounds up to 10.0; no padding, suffix intact
        assert_eq!(format_temperature(Some(9.99)).as_str(), "+10.0*C");
        assert_eq!(format_temperature(Some(-9.99)).as_str(), "-10.0*C");
        assert_eq!(format_humidity(Some(9.99)).as_str(), "10.0 %");
        // 10.0..10.05 rounds down to 10.0 and keeps the two-digit form
        assert_eq!(format_temperature(Some(10.01)).as_str(), "+10.0*C");
    }

    #[test]
    fn test_temperature_clamping() {
        assert_eq!(format_temperature(Some(150.0)).as_str(), "+99.9*C");
        assert_eq!(format_temperature(Some(-150.0)).as_str(), "-99.9*C");
    }

    #[test]
    fn test_humidity_formatting() {
        assert_eq!(format_humidity(Some(40.0)).as_str(), "40.0 %");
        assert_eq!(format_humidity(Some(9.9)).as_str(), "  9.9 %");
        assert_eq!(format_humidity(None).as_str(), "err");
    }

    #[test]
    fn test_humidity_clamping() {
        assert_eq!(format_humidity(Some(120.0)).as_str(), "99.9 %");
        assert_eq!(format_humidity(Some(-5.0)).as_str(), "  0.0 %");
    }

    #[test]
    fn test_line_formatting() {
        let id = SensorId::<3>::from_external(1).unwrap();
        let slot = SensorSlot {
            temperature: Some(21.5),
            humidity: Some(40.0),
            heat_index: Some(20.75),
            last_good: None,
        };
        assert_eq!(format_line(id, &slot).as_str(), "d1: +21.5*C 40.0 %");
    }

    #[test]
    fn test_line_for_invalid_slot() {
        let id = SensorId::<3>::from_external(2).unwrap();
        assert_eq!(format_line(id, &SensorSlot::EMPTY).as_str(), "d2: err err");
    }
}
