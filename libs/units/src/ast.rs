/// One `letters numeral?` segment of a compound unit such as `m2kg-1s-3`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitFactor {
    /// Alias-table symbol (e.g. `kg`, `N`, `Ω`).
    pub symbol: String,
    /// Exponent applied to the symbol; `1.0` when the numeral was omitted.
    pub exponent: f64,
}

impl UnitFactor {
    pub fn new(symbol: impl Into<String>, exponent: f64) -> Self {
        Self {
            symbol: symbol.into(),
            exponent,
        }
    }
}

/// A compound unit as written, before folding into a [`crate::Unit`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct UnitExpr {
    pub factors: Vec<UnitFactor>,
}

impl UnitExpr {
    pub fn one() -> Self {
        Self { factors: vec![] }
    }
}
