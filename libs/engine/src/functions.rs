//! Function registry
//!
//! Builtins live in a compile-time perfect hash map; user functions are
//! created by definitions and stored in the [`crate::Environment`].

use crate::ast::AstNode;
use crate::error::{Error, Result};
use dimcalc_units::Quantity;
use phf::phf_map;

/// Native computation over already evaluated arguments
pub type NativeFn = fn(&[Quantity]) -> Result<Quantity>;

/// A builtin function
#[derive(Debug, Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub call: NativeFn,
}

impl NativeFunction {
    /// Check arity, then run the computation.
    pub fn call(&self, arguments: &[Quantity]) -> Result<Quantity> {
        let found = arguments.len();
        if found < self.min_args || found > self.max_args {
            let expected = if self.min_args == self.max_args {
                self.min_args.to_string()
            } else {
                format!("{} to {}", self.min_args, self.max_args)
            };
            return Err(Error::ArityMismatch {
                function: self.name.to_string(),
                expected,
                found,
            });
        }
        (self.call)(arguments)
    }
}

/// A function defined on the command line: `f(x, y) = ...`
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: AstNode,
}

/// Anything callable by name
#[derive(Debug, Clone)]
pub enum Function {
    Native(NativeFunction),
    User(UserFunction),
}

impl Function {
    pub fn name(&self) -> &str {
        match self {
            Function::Native(native) => native.name,
            Function::User(user) => &user.name,
        }
    }
}

static BUILTINS: phf::Map<&'static str, NativeFunction> = phf_map! {
    "sqrt" => NativeFunction { name: "sqrt", min_args: 1, max_args: 1, call: sqrt },
    "sin" => NativeFunction { name: "sin", min_args: 1, max_args: 1, call: sin },
    "cos" => NativeFunction { name: "cos", min_args: 1, max_args: 1, call: cos },
    "tan" => NativeFunction { name: "tan", min_args: 1, max_args: 1, call: tan },
    "ln" => NativeFunction { name: "ln", min_args: 1, max_args: 1, call: ln },
    "log" => NativeFunction { name: "log", min_args: 1, max_args: 2, call: log },
    "exp" => NativeFunction { name: "exp", min_args: 1, max_args: 1, call: exp },
};

/// Look up a builtin by name
pub fn get_builtin(name: &str) -> Option<&'static NativeFunction> {
    BUILTINS.get(name)
}

/// All builtins, in no particular order
pub fn builtins() -> impl Iterator<Item = &'static NativeFunction> {
    BUILTINS.values()
}

/// Magnitude of a dimensionless argument
fn plain(function: &str, value: &Quantity) -> Result<f64> {
    if value.is_dimensionless() {
        Ok(value.value)
    } else {
        Err(Error::NonDimensionlessArgument {
            function: function.to_string(),
            unit: value.unit.to_string(),
        })
    }
}

fn sqrt(args: &[Quantity]) -> Result<Quantity> {
    Ok(args[0].powf(0.5))
}

fn sin(args: &[Quantity]) -> Result<Quantity> {
    Ok(plain("sin", &args[0])?.sin().into())
}

fn cos(args: &[Quantity]) -> Result<Quantity> {
    Ok(plain("cos", &args[0])?.cos().into())
}

fn tan(args: &[Quantity]) -> Result<Quantity> {
    Ok(plain("tan", &args[0])?.tan().into())
}

fn ln(args: &[Quantity]) -> Result<Quantity> {
    Ok(plain("ln", &args[0])?.ln().into())
}

fn log(args: &[Quantity]) -> Result<Quantity> {
    let x = plain("log", &args[0])?;
    match args.get(1) {
        Some(base) => Ok(x.log(plain("log", base)?).into()),
        None => Ok(x.ln().into()),
    }
}

fn exp(args: &[Quantity]) -> Result<Quantity> {
    Ok(plain("exp", &args[0])?.exp().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimcalc_units::Unit;

    #[test]
    fn test_lookup() {
        assert!(get_builtin("sqrt").is_some());
        assert!(get_builtin("unknown").is_none());
        assert_eq!(builtins().count(), 7);
    }

    #[test]
    fn test_sqrt_halves_dimension() {
        let area = Quantity::new(9.0, Unit::from_string("m2").unwrap());
        let side = get_builtin("sqrt").unwrap().call(&[area]).unwrap();
        assert_eq!(side, Quantity::new(3.0, Unit::from_string("m").unwrap()));
    }

    #[test]
    fn test_log_with_base() {
        let log = get_builtin("log").unwrap();
        let result = log.call(&[Quantity::from(100.0), Quantity::from(10.0)]).unwrap();
        assert!((result.value - 2.0).abs() < 1e-12);
        assert!(log.call(&[]).is_err());
    }

    #[test]
    fn test_transcendental_rejects_units() {
        let metre = Quantity::new(1.0, Unit::from_string("m").unwrap());
        let err = get_builtin("sin").unwrap().call(&[metre]).unwrap_err();
        assert!(matches!(err, Error::NonDimensionlessArgument { .. }));
    }
}
