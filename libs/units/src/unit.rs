use crate::alias;
use crate::ast::UnitFactor;
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Div, Mul, Neg};
use std::str::FromStr;

/// Decimal places kept when printing magnitudes and fractional exponents.
pub const DISPLAY_PRECISION: i32 = 2;

/// The seven SI base dimensions, in the order exponents are stored and printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Time,
    Mass,
    Length,
    Current,
    Amount,
    Luminosity,
    Temperature,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Time,
        Dimension::Mass,
        Dimension::Length,
        Dimension::Current,
        Dimension::Amount,
        Dimension::Luminosity,
        Dimension::Temperature,
    ];

    /// Symbol of the SI base unit measuring this dimension.
    pub fn symbol(self) -> &'static str {
        match self {
            Dimension::Time => "s",
            Dimension::Mass => "kg",
            Dimension::Length => "m",
            Dimension::Current => "A",
            Dimension::Amount => "mol",
            Dimension::Luminosity => "cd",
            Dimension::Temperature => "K",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Exponent vector over the SI base dimensions.
///
/// Equality is exact, component-wise. Every operation returns a new value.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit([f64; 7]);

impl Unit {
    pub const DIMENSIONLESS: Unit = Unit([0.0; 7]);

    pub fn from_exponents(exponents: [f64; 7]) -> Self {
        Self(exponents)
    }

    /// The base unit of a single dimension (e.g. `m` for [`Dimension::Length`]).
    pub fn base(dimension: Dimension) -> Self {
        Self::DIMENSIONLESS.with(dimension, 1.0)
    }

    /// Copy of `self` with the exponent of `dimension` replaced.
    pub fn with(mut self, dimension: Dimension, exponent: f64) -> Self {
        self.0[dimension.index()] = exponent;
        self
    }

    pub fn exponent(&self, dimension: Dimension) -> f64 {
        self.0[dimension.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }

    pub fn multiply(&self, other: &Unit) -> Unit {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn divide(&self, other: &Unit) -> Unit {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn power(&self, power: f64) -> Unit {
        let mut out = self.0;
        for exponent in &mut out {
            *exponent *= power;
        }
        Unit(out)
    }

    /// Addition never changes dimension, but both sides must agree.
    pub fn add(&self, other: &Unit) -> Result<Unit> {
        self.require_same(other)
    }

    pub fn subtract(&self, other: &Unit) -> Result<Unit> {
        self.require_same(other)
    }

    pub fn negate(&self) -> Unit {
        *self
    }

    fn require_same(&self, other: &Unit) -> Result<Unit> {
        if self == other {
            Ok(*self)
        } else {
            Err(Error::DimensionMismatch {
                left: self.to_display_string(),
                right: other.to_display_string(),
            })
        }
    }

    fn zip_with(&self, other: &Unit, f: impl Fn(f64, f64) -> f64) -> Unit {
        let mut out = [0.0; 7];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = f(self.0[i], other.0[i]);
        }
        Unit(out)
    }

    /// Parse a compound unit literal such as `m2kg-1s-3`, `N` or `Ω`.
    pub fn from_string(input: &str) -> Result<Unit> {
        if let Some(unit) = alias::lookup_symbol(input) {
            return Ok(unit);
        }
        let expr = crate::parser::parse(input)?;
        Unit::from_factors(&expr.factors)
    }

    /// Fold already-split `(symbol, exponent)` pairs left to right.
    pub fn from_factors<'a, I>(factors: I) -> Result<Unit>
    where
        I: IntoIterator<Item = &'a UnitFactor>,
    {
        factors
            .into_iter()
            .try_fold(Unit::DIMENSIONLESS, |acc, factor| {
                let base = alias::lookup_symbol(&factor.symbol)
                    .ok_or_else(|| Error::UnknownUnitSymbol(factor.symbol.clone()))?;
                Ok(acc.multiply(&base.power(factor.exponent)))
            })
    }

    /// Alias if one matches exactly, else `s kg² m⁻¹`-style expansion.
    pub fn to_display_string(&self) -> String {
        if let Some(alias) = alias::alias_for(self) {
            return alias.symbol.to_string();
        }
        self.nonzero()
            .map(|(symbol, exponent)| {
                if exponent == 1.0 {
                    symbol.to_string()
                } else {
                    format!("{symbol}{}", superscript(&format_exponent(exponent)))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_latex_string(&self) -> String {
        if let Some(alias) = alias::alias_for(self) {
            return alias.latex.to_string();
        }
        let render = |symbol: &str, exponent: f64| {
            if exponent == 1.0 {
                symbol.to_string()
            } else {
                format!("{{{symbol}}}^{{{}}}", format_exponent(exponent))
            }
        };
        let top = self
            .nonzero()
            .filter(|(_, exponent)| *exponent > 0.0)
            .map(|(symbol, exponent)| render(symbol, exponent))
            .collect::<Vec<_>>()
            .join(" ");
        let bottom = self
            .nonzero()
            .filter(|(_, exponent)| *exponent < 0.0)
            .map(|(symbol, exponent)| render(symbol, exponent.abs()))
            .collect::<Vec<_>>()
            .join(" ");

        if bottom.is_empty() {
            return top;
        }
        let top = if top.is_empty() { "1".to_string() } else { top };
        format!("\\frac{{{top}}}{{{bottom}}}")
    }

    /// ASCII form that [`Unit::from_string`] parses back to an equal unit.
    ///
    /// Every factor carries its exponent so adjacent symbols never merge
    /// into one letters segment (`s-2kg1m1`, not `s-2kgm`).
    pub fn to_compound_string(&self) -> String {
        self.nonzero()
            .map(|(symbol, exponent)| format!("{symbol}{exponent}"))
            .collect()
    }

    fn nonzero(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Dimension::ALL
            .iter()
            .map(|d| (d.symbol(), self.exponent(*d)))
            .filter(|(_, exponent)| *exponent != 0.0)
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        self.multiply(&rhs)
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        self.divide(&rhs)
    }
}

impl Neg for Unit {
    type Output = Unit;

    fn neg(self) -> Unit {
        self.negate()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Unit::from_string(s)
    }
}

pub(crate) fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let rounded = (value * scale).round() / scale;
    // Normalise -0.0 so it never prints with a sign.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn format_exponent(exponent: f64) -> String {
    let rounded = round_to(exponent, DISPLAY_PRECISION);
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

fn superscript(plain: &str) -> String {
    plain
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            '.' => 'ˑ',
            other => other,
        })
        .collect()
}
