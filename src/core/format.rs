//! Text rendering for measurements: `5.20m`, `10'3"`

use crate::core::quantity::CompoundQuantity;
use crate::core::units::{Measurement, UnitSystem};
use std::fmt;

pub const DEFAULT_PRECISION: usize = 2;

/// Render with `precision` decimal places.
///
/// Metric prints total meters with a fixed number of decimals. Imperial splits
/// the total length into whole feet and inches, with trailing zeros trimmed from
/// the inches; a negative length is a sign in front of its magnitude (`-0'6"`).
pub fn render(measurement: &Measurement, precision: usize) -> String {
    match *measurement {
        Measurement::Metric { meters, centimeters } => {
            let total = meters + centimeters / UnitSystem::Metric.ratio();
            format!("{}m", fixed(total, precision))
        }
        Measurement::Imperial { .. } => {
            let ratio = UnitSystem::Imperial.ratio();
            let total = measurement.to_minor_units();
            let split = CompoundQuantity::with_known_ratio(0.0, total.abs(), ratio).normalized();
            let (feet, inches) = carry(split.major(), round_to(split.minor(), precision), ratio);

            let sign = if total < 0.0 && (feet > 0.0 || inches > 0.0) { "-" } else { "" };
            format!("{}{}'{}\"", sign, trimmed(feet, 0), trimmed(inches, precision))
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        f.write_str(&render(self, precision))
    }
}

fn round_to(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(precision.min(15) as i32);
    (value * scale).round() / scale
}

// Rounding 11.999 inches must not print as 12 inches.
fn carry(major: f64, minor: f64, ratio: f64) -> (f64, f64) {
    if minor >= ratio {
        (major + 1.0, minor - ratio)
    } else {
        (major, minor)
    }
}

fn fixed(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    strip_negative_zero(s)
}

fn trimmed(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    strip_negative_zero(s)
}

fn strip_negative_zero(s: String) -> String {
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}
