//! Unit systems and tagged measurements
//!
//! Every dispatch over `UnitSystem` or `Measurement` is an exhaustive match
//! without a wildcard arm, so adding a system is a compile error at each site
//! that has to learn about it.

use crate::core::quantity::CompoundQuantity;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const INCHES_PER_FOOT: f64 = 12.0;
pub const CENTIMETERS_PER_METER: f64 = 100.0;
pub const CENTIMETERS_PER_INCH: f64 = 2.54;
pub const INCHES_PER_CENTIMETER: f64 = 1.0 / CENTIMETERS_PER_INCH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Imperial,
    Metric,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Imperial, UnitSystem::Metric];

    /// Minor units per major unit.
    pub const fn ratio(self) -> f64 {
        match self {
            Self::Imperial => INCHES_PER_FOOT,
            Self::Metric => CENTIMETERS_PER_METER,
        }
    }

    pub const fn major_name(self) -> &'static str {
        match self {
            Self::Imperial => "feet",
            Self::Metric => "meters",
        }
    }

    pub const fn minor_name(self) -> &'static str {
        match self {
            Self::Imperial => "inches",
            Self::Metric => "centimeters",
        }
    }

    /// The system `Measurement::convert` moves into.
    pub const fn converted(self) -> UnitSystem {
        match self {
            Self::Imperial => Self::Metric,
            Self::Metric => Self::Imperial,
        }
    }

    /// Target minor units per source minor unit.
    pub const fn minor_conversion_factor(self, to: UnitSystem) -> f64 {
        match (self, to) {
            (Self::Imperial, Self::Imperial) | (Self::Metric, Self::Metric) => 1.0,
            (Self::Imperial, Self::Metric) => CENTIMETERS_PER_INCH,
            (Self::Metric, Self::Imperial) => INCHES_PER_CENTIMETER,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => write!(f, "imperial"),
            Self::Metric => write!(f, "metric"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "imperial" | "ft" | "feet" => Ok(Self::Imperial),
            "metric" | "m" | "meters" => Ok(Self::Metric),
            other => Err(format!("Unknown unit system: {} (expected imperial or metric)", other)),
        }
    }
}

/// A length tagged with the unit system its fields are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum Measurement {
    Imperial { feet: f64, inches: f64 },
    Metric { meters: f64, centimeters: f64 },
}

/// Imperial view returned by `Measurement::as_imperial`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeetInches {
    pub feet: f64,
    pub inches: f64,
}

/// Metric view returned by `Measurement::as_metric`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetersCentimeters {
    pub meters: f64,
    pub centimeters: f64,
}

impl Measurement {
    pub const fn new(system: UnitSystem, major: f64, minor: f64) -> Self {
        match system {
            UnitSystem::Imperial => Self::Imperial { feet: major, inches: minor },
            UnitSystem::Metric => Self::Metric { meters: major, centimeters: minor },
        }
    }

    pub const fn imperial(feet: f64, inches: f64) -> Self {
        Self::Imperial { feet, inches }
    }

    pub const fn metric(meters: f64, centimeters: f64) -> Self {
        Self::Metric { meters, centimeters }
    }

    pub const fn system(&self) -> UnitSystem {
        match self {
            Self::Imperial { .. } => UnitSystem::Imperial,
            Self::Metric { .. } => UnitSystem::Metric,
        }
    }

    /// (major, minor) in this measurement's own system.
    pub const fn parts(&self) -> (f64, f64) {
        match *self {
            Self::Imperial { feet, inches } => (feet, inches),
            Self::Metric { meters, centimeters } => (meters, centimeters),
        }
    }

    pub fn to_compound(&self) -> CompoundQuantity {
        let (major, minor) = self.parts();
        CompoundQuantity::with_known_ratio(major, minor, self.system().ratio())
    }

    /// Rebuild a measurement from a quantity whose ratio belongs to `system`.
    pub fn from_compound(system: UnitSystem, quantity: &CompoundQuantity) -> Self {
        Self::new(system, quantity.major(), quantity.minor())
    }

    pub fn as_imperial(&self) -> Option<FeetInches> {
        match *self {
            Self::Imperial { feet, inches } => Some(FeetInches { feet, inches }),
            Self::Metric { .. } => None,
        }
    }

    pub fn as_metric(&self) -> Option<MetersCentimeters> {
        match *self {
            Self::Imperial { .. } => None,
            Self::Metric { meters, centimeters } => Some(MetersCentimeters { meters, centimeters }),
        }
    }

    /// Multiply by a scalar; the result stays in the same system and is normalized.
    pub fn scale(&self, multiplier: f64) -> Self {
        let system = self.system();
        Self::from_compound(system, &self.to_compound().scale(multiplier))
    }

    /// Move into the other unit system.
    pub fn convert(&self) -> Result<Self> {
        self.convert_to(self.system().converted())
    }

    pub fn convert_to(&self, target: UnitSystem) -> Result<Self> {
        let source = self.system();
        if source == target {
            return Ok(*self);
        }

        let converted = self
            .to_compound()
            .convert(target.ratio(), source.minor_conversion_factor(target))?;
        Ok(Self::from_compound(target, &converted))
    }

    pub fn is_normalized(&self) -> bool {
        self.to_compound().is_normalized()
    }

    /// Total length in this system's minor unit.
    pub fn to_minor_units(&self) -> f64 {
        self.to_compound().to_minor_units()
    }
}

/// Keep only the imperial measurements, already narrowed to their fields.
pub fn imperial_only<'a, I>(measurements: I) -> impl Iterator<Item = FeetInches> + 'a
where
    I: IntoIterator<Item = &'a Measurement>,
    I::IntoIter: 'a,
{
    measurements.into_iter().filter_map(Measurement::as_imperial)
}

/// Keep only the metric measurements, already narrowed to their fields.
pub fn metric_only<'a, I>(measurements: I) -> impl Iterator<Item = MetersCentimeters> + 'a
where
    I: IntoIterator<Item = &'a Measurement>,
    I::IntoIter: 'a,
{
    measurements.into_iter().filter_map(Measurement::as_metric)
}
