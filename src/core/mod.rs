//! Compound unit arithmetic
//!
//! `quantity` holds the unit-agnostic arithmetic, `units` the closed set of
//! unit systems with their dynamic dispatch, `height` the statically typed
//! variant, and `format` the text rendering.

pub mod quantity;
pub mod units;
pub mod height;
pub mod format;

pub use quantity::{CompoundQuantity, to_minor_units, from_minor_units, scale, convert};
pub use units::{
    UnitSystem, Measurement, FeetInches, MetersCentimeters, imperial_only, metric_only,
    INCHES_PER_FOOT, CENTIMETERS_PER_METER, CENTIMETERS_PER_INCH, INCHES_PER_CENTIMETER,
};
pub use height::{Height, System, Imperial, Metric};
pub use format::{render, DEFAULT_PRECISION};
