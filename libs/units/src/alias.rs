//! Named units (`N`, `J`, `Ω`, ...) and their dimension vectors.

use crate::unit::{Dimension, Unit};
use once_cell::sync::Lazy;

#[derive(Clone, Debug, PartialEq)]
pub struct Alias {
    pub unit: Unit,
    pub symbol: &'static str,
    pub latex: &'static str,
}

static ALIASES: Lazy<Vec<Alias>> = Lazy::new(build_alias_table);

/// Every alias, dimensionless first, then base units, then derived units.
pub fn aliases() -> &'static [Alias] {
    &ALIASES
}

/// Resolve a symbol to its unit. The dimensionless alias has no symbol and
/// never matches.
pub fn lookup_symbol(symbol: &str) -> Option<Unit> {
    if symbol.is_empty() {
        return None;
    }
    ALIASES
        .iter()
        .find(|alias| alias.symbol == symbol)
        .map(|alias| alias.unit)
}

/// The alias whose unit equals `unit` exactly, if any.
pub fn alias_for(unit: &Unit) -> Option<&'static Alias> {
    ALIASES.iter().find(|alias| alias.unit == *unit)
}

fn build_alias_table() -> Vec<Alias> {
    use Dimension::*;

    let mut table = vec![Alias {
        unit: Unit::DIMENSIONLESS,
        symbol: "",
        latex: "",
    }];

    for dimension in Dimension::ALL {
        table.push(Alias {
            unit: Unit::base(dimension),
            symbol: dimension.symbol(),
            latex: dimension.symbol(),
        });
    }

    let derived: [(&'static str, &[(Dimension, f64)]); 16] = [
        ("Hz", &[(Time, -1.0)]),
        ("N", &[(Mass, 1.0), (Length, 1.0), (Time, -2.0)]),
        ("Pa", &[(Length, -1.0), (Mass, 1.0), (Time, -2.0)]),
        ("J", &[(Mass, 1.0), (Length, 2.0), (Time, -2.0)]),
        ("W", &[(Mass, 1.0), (Length, 2.0), (Time, -3.0)]),
        ("C", &[(Time, 1.0), (Current, 1.0)]),
        ("V", &[(Length, 2.0), (Mass, 1.0), (Time, -3.0), (Current, -1.0)]),
        ("F", &[(Length, -2.0), (Mass, -1.0), (Time, 4.0), (Current, 2.0)]),
        ("Ω", &[(Length, 2.0), (Mass, 1.0), (Time, -3.0), (Current, -2.0)]),
        ("S", &[(Length, -2.0), (Mass, -1.0), (Time, 3.0), (Current, 2.0)]),
        ("Wb", &[(Length, 2.0), (Mass, 1.0), (Time, -2.0), (Current, -1.0)]),
        ("T", &[(Mass, 1.0), (Time, -2.0), (Current, -1.0)]),
        ("H", &[(Length, 2.0), (Mass, 1.0), (Time, -2.0), (Current, -2.0)]),
        ("lx", &[(Length, -2.0), (Luminosity, 1.0)]),
        ("Sv", &[(Length, 2.0), (Time, -2.0)]),
        ("kat", &[(Time, -1.0), (Amount, 1.0)]),
    ];

    for (symbol, exponents) in derived {
        let unit = exponents
            .iter()
            .fold(Unit::DIMENSIONLESS, |unit, (dimension, exponent)| {
                unit.with(*dimension, *exponent)
            });
        table.push(Alias {
            unit,
            symbol,
            latex: symbol,
        });
    }

    table
}
