use crate::error::{Error, Result};
use crate::unit::{round_to, Unit, DISPLAY_PRECISION};
use std::fmt;
use std::ops::{Div, Mul, Neg};

/// A magnitude carrying an SI dimension.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Unit::DIMENSIONLESS)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    /// Add; bare scalars count as dimensionless.
    pub fn try_add(self, rhs: impl Into<Quantity>) -> Result<Quantity> {
        let rhs = rhs.into();
        let unit = self.unit.add(&rhs.unit)?;
        Ok(Quantity::new(self.value + rhs.value, unit))
    }

    pub fn try_sub(self, rhs: impl Into<Quantity>) -> Result<Quantity> {
        let rhs = rhs.into();
        let unit = self.unit.subtract(&rhs.unit)?;
        Ok(Quantity::new(self.value - rhs.value, unit))
    }

    /// Raise to a quantity, which must itself be dimensionless.
    pub fn pow(self, exponent: Quantity) -> Result<Quantity> {
        if !exponent.is_dimensionless() {
            return Err(Error::NonDimensionlessExponent(
                exponent.unit.to_display_string(),
            ));
        }
        Ok(self.powf(exponent.value))
    }

    pub fn powf(self, exponent: f64) -> Quantity {
        Quantity::new(self.value.powf(exponent), self.unit.power(exponent))
    }

    pub fn abs(self) -> Quantity {
        Quantity::new(self.value.abs(), self.unit)
    }

    /// Magnitude rounded for display.
    pub fn rounded_value(&self) -> f64 {
        round_to(self.value, DISPLAY_PRECISION)
    }

    pub fn to_latex_string(&self) -> String {
        join_magnitude(self.rounded_value(), &self.unit.to_latex_string())
    }
}

/// Dimensionless values keep the separator, so `52.5` prints as `"52.5 "`.
fn join_magnitude(value: f64, unit: &str) -> String {
    format!("{value:?} {unit}")
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_magnitude(
            self.rounded_value(),
            &self.unit.to_display_string(),
        ))
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::dimensionless(value)
    }
}

impl From<Unit> for Quantity {
    fn from(unit: Unit) -> Self {
        Quantity::new(1.0, unit)
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.value * rhs.value, self.unit.multiply(&rhs.unit))
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Mul<Unit> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Unit) -> Quantity {
        Quantity::new(self.value, self.unit.multiply(&rhs))
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::new(self.value / rhs.value, self.unit.divide(&rhs.unit))
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.value / rhs, self.unit)
    }
}

impl Div<Unit> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Unit) -> Quantity {
        Quantity::new(self.value, self.unit.divide(&rhs))
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.value, self.unit.negate())
    }
}
