#![allow(dead_code)]

use dimcalc_engine::{Error, Outcome, Quantity, Session, SessionOptions, Unit};

pub fn session() -> Session {
    Session::new()
}

/// Session without the seeded constants.
pub fn bare_session() -> Session {
    Session::with_options(SessionOptions { constants: false })
}

pub fn unit(text: &str) -> Unit {
    Unit::from_string(text).unwrap_or_else(|e| panic!("bad unit '{}': {}", text, e))
}

pub fn quantity(value: f64, text: &str) -> Quantity {
    Quantity::new(value, unit(text))
}

/// Run a line that must produce a quantity.
pub fn eval(session: &mut Session, line: &str) -> Quantity {
    match session.run_line(line) {
        Ok(Outcome::Value(quantity)) => quantity,
        Ok(other) => panic!("'{}' produced {:?}, expected a value", line, other),
        Err(e) => panic!("'{}' failed: {}", line, e),
    }
}

/// Run a line that must fail.
pub fn eval_err(session: &mut Session, line: &str) -> Error {
    match session.run_line(line) {
        Ok(outcome) => panic!("'{}' produced {:?}, expected an error", line, outcome),
        Err(e) => e,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "expected {}, got {}",
        expected,
        actual
    );
}
