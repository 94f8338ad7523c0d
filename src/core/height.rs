//! Heights whose unit system is fixed at the type level
//!
//! `Height<Metric>` can only hold meters and centimeters; `scale` keeps the
//! type and `convert` produces the paired system's type. The dynamic
//! `Measurement` is the escape hatch when the system is only known at runtime.

use crate::core::quantity::CompoundQuantity;
use crate::core::units::{Measurement, UnitSystem};
use crate::errors::{DomainError, Result};
use std::fmt;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Marker for a unit system usable as a `Height` parameter.
pub trait System: sealed::Sealed + Copy + fmt::Debug {
    const TAG: UnitSystem;

    /// The system `Height::convert` moves into.
    type Target: System;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imperial {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {}

impl sealed::Sealed for Imperial {}
impl sealed::Sealed for Metric {}

impl System for Imperial {
    const TAG: UnitSystem = UnitSystem::Imperial;
    type Target = Metric;
}

impl System for Metric {
    const TAG: UnitSystem = UnitSystem::Metric;
    type Target = Imperial;
}

pub struct Height<S: System> {
    quantity: CompoundQuantity,
    _system: PhantomData<S>,
}

// Manual impls: deriving would put the bounds on `S`, which is uninhabited.
impl<S: System> Clone for Height<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: System> Copy for Height<S> {}

impl<S: System> PartialEq for Height<S> {
    fn eq(&self, other: &Self) -> bool {
        self.quantity == other.quantity
    }
}

impl<S: System> fmt::Debug for Height<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Height")
            .field("system", &S::TAG)
            .field("major", &self.quantity.major())
            .field("minor", &self.quantity.minor())
            .finish()
    }
}

impl<S: System> Height<S> {
    pub fn new(major: f64, minor: f64) -> Self {
        Self::from_quantity(CompoundQuantity::with_known_ratio(major, minor, S::TAG.ratio()))
    }

    fn from_quantity(quantity: CompoundQuantity) -> Self {
        Self {
            quantity,
            _system: PhantomData,
        }
    }

    pub fn system(&self) -> UnitSystem {
        S::TAG
    }

    pub fn major(&self) -> f64 {
        self.quantity.major()
    }

    pub fn minor(&self) -> f64 {
        self.quantity.minor()
    }

    pub fn quantity(&self) -> CompoundQuantity {
        self.quantity
    }

    pub fn scale(&self, multiplier: f64) -> Height<S> {
        Height::from_quantity(self.quantity.scale(multiplier))
    }

    pub fn convert(&self) -> Result<Height<S::Target>> {
        let target = <S::Target as System>::TAG;
        let converted = self
            .quantity
            .convert(target.ratio(), S::TAG.minor_conversion_factor(target))?;
        Ok(Height::from_quantity(converted))
    }

    pub fn into_measurement(self) -> Measurement {
        Measurement::from_compound(S::TAG, &self.quantity)
    }
}

impl<S: System> From<Height<S>> for Measurement {
    fn from(height: Height<S>) -> Self {
        height.into_measurement()
    }
}

impl<S: System> TryFrom<Measurement> for Height<S> {
    type Error = DomainError;

    fn try_from(measurement: Measurement) -> Result<Self> {
        if measurement.system() != S::TAG {
            return Err(DomainError::system_mismatch(
                S::TAG,
                measurement.system(),
                "Height::try_from",
            ));
        }
        Ok(Self::from_quantity(measurement.to_compound()))
    }
}

impl<S: System> fmt::Display for Height<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.into_measurement(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_keeps_type() {
        let doubled: Height<Metric> = Height::<Metric>::new(2.0, 60.0).scale(2.0);
        assert_eq!(doubled.major(), 5.0);
        assert_eq!(doubled.minor(), 20.0);
        assert_eq!(doubled.system(), UnitSystem::Metric);
    }

    #[test]
    fn test_convert_flips_type() {
        let imperial: Height<Imperial> = Height::<Imperial>::new(5.0, 10.0);
        let metric: Height<Metric> = imperial.convert().unwrap();
        assert_eq!(metric.major(), 1.0);

        let back: Height<Imperial> = metric.convert().unwrap();
        assert!((back.quantity().to_minor_units() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_try_from_measurement() {
        let ok = Height::<Imperial>::try_from(Measurement::imperial(3.0, 5.0)).unwrap();
        assert_eq!(ok, Height::new(3.0, 5.0));

        let err = Height::<Imperial>::try_from(Measurement::metric(1.0, 0.0)).unwrap_err();
        assert_eq!(err.operation, "Height::try_from");
    }

    #[test]
    fn test_into_measurement() {
        let m: Measurement = Height::<Metric>::new(1.0, 5.0).into();
        assert_eq!(m, Measurement::metric(1.0, 5.0));
    }
}
