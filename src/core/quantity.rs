//! Compound quantities - a value split across a major and a minor unit
//!
//! Design: every operation round-trips through the flattened minor-unit total:
//! - `to_minor_units` flattens `major * ratio + minor`
//! - `from_minor_units` renormalizes with floor division, so the minor part
//!   always lands in `[0, ratio)`, negative totals included
//! - `scale` and `convert` are multiplications on the flattened total

use crate::errors::{DomainError, Result};
use serde::Serialize;
use tracing::{trace, warn};

/// Immutable major/minor quantity, e.g. 3 feet 5 inches with ratio 12.
///
/// The ratio is validated on construction. The amounts are not normalized on
/// construction, but every value returned by an operation is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompoundQuantity {
    major: f64,
    minor: f64,
    ratio: f64,
}

impl CompoundQuantity {
    pub fn new(major: f64, minor: f64, ratio: f64) -> Result<Self> {
        check_ratio(ratio, "CompoundQuantity::new")?;
        Ok(Self { major, minor, ratio })
    }

    /// Caller guarantees `ratio > 0`; used for the built-in unit constants.
    pub(crate) const fn with_known_ratio(major: f64, minor: f64, ratio: f64) -> Self {
        Self { major, minor, ratio }
    }

    pub fn major(&self) -> f64 {
        self.major
    }

    pub fn minor(&self) -> f64 {
        self.minor
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn is_normalized(&self) -> bool {
        self.minor >= 0.0 && self.minor < self.ratio
    }

    pub fn to_minor_units(&self) -> f64 {
        to_minor_units(self)
    }

    pub fn normalized(&self) -> Self {
        normalize(to_minor_units(self), self.ratio)
    }

    pub fn scale(&self, multiplier: f64) -> Self {
        scale(self, multiplier)
    }

    pub fn convert(&self, target_ratio: f64, unit_conversion_factor: f64) -> Result<Self> {
        convert(self, target_ratio, unit_conversion_factor)
    }
}

/// Flatten a quantity into minor units: `major * ratio + minor`.
pub fn to_minor_units(quantity: &CompoundQuantity) -> f64 {
    quantity.major * quantity.ratio + quantity.minor
}

/// Split a minor-unit total into a normalized quantity.
///
/// `from_minor_units(-1.0, 12.0)` is `-1` major and `11` minor: the modulo
/// follows floor division, not truncation.
pub fn from_minor_units(total_minor_units: f64, ratio: f64) -> Result<CompoundQuantity> {
    check_ratio(ratio, "from_minor_units")?;
    Ok(normalize(total_minor_units, ratio))
}

/// Multiply a quantity by a scalar, keeping its ratio.
pub fn scale(quantity: &CompoundQuantity, multiplier: f64) -> CompoundQuantity {
    normalize(to_minor_units(quantity) * multiplier, quantity.ratio)
}

/// Re-express a quantity in another major/minor system.
///
/// `unit_conversion_factor` converts one source minor unit into target minor
/// units (centimeters per inch going imperial to metric).
pub fn convert(
    quantity: &CompoundQuantity,
    target_ratio: f64,
    unit_conversion_factor: f64,
) -> Result<CompoundQuantity> {
    check_ratio(target_ratio, "convert")?;
    let total = to_minor_units(quantity) * unit_conversion_factor;
    trace!(total, target_ratio, unit_conversion_factor, "converting compound quantity");
    Ok(normalize(total, target_ratio))
}

fn check_ratio(ratio: f64, operation: &'static str) -> Result<()> {
    // NaN fails this comparison too
    if ratio > 0.0 {
        Ok(())
    } else {
        warn!(ratio, operation, "rejected non-positive ratio");
        Err(DomainError::non_positive_ratio(ratio, operation))
    }
}

/// Requires `ratio > 0`.
fn normalize(total: f64, ratio: f64) -> CompoundQuantity {
    let mut minor = total.rem_euclid(ratio);

    // rem_euclid rounds up to `ratio` for tiny negative totals
    if minor >= ratio {
        minor = 0.0;
    }

    // `total - minor` is a whole number of ratios, so this equals
    // floor(total / ratio) without rounding across an integer boundary
    let major = ((total - minor) / ratio).round();

    trace!(total, ratio, major, minor, "normalized");
    CompoundQuantity { major, minor, ratio }
}
