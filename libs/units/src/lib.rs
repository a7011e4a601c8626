#![forbid(unsafe_code)]

mod alias;
mod ast;
mod error;
mod parser;
mod quantity;
mod unit;

pub use alias::{alias_for, aliases, lookup_symbol, Alias};
pub use ast::{UnitExpr, UnitFactor};
pub use error::{Error, Result};
pub use parser::{parse, parse_exponent};
pub use quantity::Quantity;
pub use unit::{Dimension, Unit, DISPLAY_PRECISION};
