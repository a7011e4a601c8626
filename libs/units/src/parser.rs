//! Splitter for compound unit literals: `(letters numeral?)*`.
//!
//! `m2kg-1s-3` becomes `[(m, 2), (kg, -1), (s, -3)]`. An omitted numeral
//! means an exponent of one. Symbols are not resolved here; see
//! [`crate::Unit::from_factors`].

use crate::ast::{UnitExpr, UnitFactor};
use crate::error::{Error, Result};

pub fn parse(input: &str) -> Result<UnitExpr> {
    let chars: Vec<char> = input.chars().collect();
    let mut pos = 0;
    let mut factors = Vec::new();

    while pos < chars.len() {
        let symbol_start = pos;
        while pos < chars.len() && chars[pos].is_alphabetic() {
            pos += 1;
        }
        let symbol: String = chars[symbol_start..pos].iter().collect();

        let numeral_start = pos;
        while pos < chars.len() && !chars[pos].is_alphabetic() {
            pos += 1;
        }
        let numeral: String = chars[numeral_start..pos].iter().collect();

        if symbol.is_empty() {
            // A bare numeral has nothing to raise.
            return Err(Error::UnknownUnitSymbol(numeral));
        }

        factors.push(UnitFactor::new(symbol, parse_exponent(&numeral)?));
    }

    Ok(UnitExpr { factors })
}

/// `[+-]?digits(.digits)?`, empty meaning one.
pub fn parse_exponent(numeral: &str) -> Result<f64> {
    if numeral.is_empty() {
        return Ok(1.0);
    }
    let unsigned = numeral
        .strip_prefix('-')
        .or_else(|| numeral.strip_prefix('+'))
        .unwrap_or(numeral);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let is_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !is_digits(whole) || !fraction.map_or(true, is_digits) {
        return Err(Error::InvalidExponent(numeral.to_string()));
    }
    numeral
        .parse::<f64>()
        .map_err(|_| Error::InvalidExponent(numeral.to_string()))
}
