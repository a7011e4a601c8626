use dimcalc_units::{Dimension, Error, Quantity, Unit};
use quickcheck::{Arbitrary, Gen, QuickCheck};

/// Units with half-integer exponents in [-4, 4], so exponent arithmetic is exact.
#[derive(Clone, Debug)]
struct ArbUnit(Unit);

impl Arbitrary for ArbUnit {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut exponents = [0.0; 7];
        for slot in &mut exponents {
            *slot = f64::from(i8::arbitrary(g) % 9) / 2.0;
        }
        ArbUnit(Unit::from_exponents(exponents))
    }
}

fn joule() -> Unit {
    Unit::DIMENSIONLESS
        .with(Dimension::Mass, 1.0)
        .with(Dimension::Length, 2.0)
        .with(Dimension::Time, -2.0)
}

#[test]
fn divide_undoes_multiply() {
    fn prop(a: ArbUnit, b: ArbUnit) -> bool {
        a.0.multiply(&b.0).divide(&b.0) == a.0
    }
    QuickCheck::new().quickcheck(prop as fn(ArbUnit, ArbUnit) -> bool);
}

#[test]
fn power_identities() {
    fn prop(a: ArbUnit) -> bool {
        a.0.power(1.0) == a.0 && a.0.power(0.0) == Unit::DIMENSIONLESS
    }
    QuickCheck::new().quickcheck(prop as fn(ArbUnit) -> bool);
}

#[test]
fn add_and_subtract_check_dimension() {
    fn prop(a: ArbUnit, b: ArbUnit) -> bool {
        let add = a.0.add(&b.0);
        let sub = a.0.subtract(&b.0);
        if a.0 == b.0 {
            add == Ok(a.0) && sub == Ok(a.0)
        } else {
            matches!(add, Err(Error::DimensionMismatch { .. }))
                && matches!(sub, Err(Error::DimensionMismatch { .. }))
        }
    }
    QuickCheck::new().quickcheck(prop as fn(ArbUnit, ArbUnit) -> bool);
    // Random pairs rarely collide; pin the equal case explicitly.
    assert_eq!(joule().add(&joule()), Ok(joule()));
}

#[test]
fn compound_string_round_trips() {
    fn prop(a: ArbUnit) -> bool {
        Unit::from_string(&a.0.to_compound_string()) == Ok(a.0)
    }
    QuickCheck::new().quickcheck(prop as fn(ArbUnit) -> bool);
}

#[test]
fn parses_compound_literal() {
    let unit = Unit::from_string("m2kg-1s-3").unwrap();
    assert_eq!(unit.exponent(Dimension::Length), 2.0);
    assert_eq!(unit.exponent(Dimension::Mass), -1.0);
    assert_eq!(unit.exponent(Dimension::Time), -3.0);
    for dimension in [
        Dimension::Current,
        Dimension::Amount,
        Dimension::Luminosity,
        Dimension::Temperature,
    ] {
        assert_eq!(unit.exponent(dimension), 0.0);
    }
}

#[test]
fn newton_alias_matches_literal_vector() {
    let literal = Unit::DIMENSIONLESS
        .with(Dimension::Mass, 1.0)
        .with(Dimension::Length, 1.0)
        .with(Dimension::Time, -2.0);
    assert_eq!(Unit::from_string("N").unwrap(), literal);
    assert_eq!("N".parse::<Unit>().unwrap(), literal);
}

#[test]
fn aliased_units_render_as_their_symbol() {
    for alias in dimcalc_units::aliases().iter().filter(|a| !a.symbol.is_empty()) {
        assert_eq!(alias.unit.to_display_string(), alias.symbol);
        assert_eq!(alias.unit.to_latex_string(), alias.symbol);
    }
}

#[test]
fn whole_string_alias_short_circuits() {
    let ohm = Unit::from_string("Ω").unwrap();
    assert_eq!(ohm.to_string(), "Ω");
}

#[test]
fn derived_symbols_compose() {
    let unit = Unit::from_string("N1m1").unwrap();
    assert_eq!(unit, joule());
    assert_eq!(Unit::from_string("Hz-1").unwrap(), Unit::base(Dimension::Time));
}

#[test]
fn unknown_symbols_are_rejected() {
    assert_eq!(
        Unit::from_string("kgm2"),
        Err(Error::UnknownUnitSymbol("kgm".into()))
    );
    assert!(matches!(
        Unit::from_string("3"),
        Err(Error::UnknownUnitSymbol(_))
    ));
}

#[test]
fn newton_metre_is_joule() {
    let newton = Quantity::from(Unit::from_string("N").unwrap());
    let metre = Quantity::from(Unit::from_string("m").unwrap());
    let work = newton * metre;
    assert_eq!(work, Quantity::new(1.0, joule()));
    assert_eq!(work.to_string(), "1.0 J");
}

#[test]
fn mismatched_quantities_do_not_add() {
    let metre = Quantity::from(Unit::base(Dimension::Length));
    let second = Quantity::from(Unit::base(Dimension::Time));
    assert!(matches!(
        metre.try_add(second),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn fractional_exponents_display_rounded() {
    let root = Unit::base(Dimension::Length).power(1.0 / 3.0);
    assert_eq!(root.to_display_string(), "m⁰ˑ³³");
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let q = Quantity::new(2.5, joule());
    let json = serde_json::to_string(&q).unwrap();
    let back: Quantity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}
