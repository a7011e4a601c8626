//! Tree-walking evaluator
//!
//! Reduces a node to a [`Quantity`], a control signal, or nothing. Children
//! are evaluated before their parent and any error aborts the whole walk.

use crate::ast::{ArgumentList, AstNode, Command, Identifier, UnitFactor};
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::functions::{Function, UserFunction};
use crate::walker::NodeWalker;
use dimcalc_units::{Quantity, Unit};
use std::collections::HashMap;
use std::path::PathBuf;

/// Result of evaluating one node
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(Quantity),
    /// Flush the ledger to this path
    Render(PathBuf),
    /// End the session
    Exit,
    /// Definitions and layout commands
    Nothing,
}

impl Outcome {
    pub fn quantity(&self) -> Option<&Quantity> {
        match self {
            Outcome::Value(quantity) => Some(quantity),
            _ => None,
        }
    }
}

pub struct Evaluator<'env> {
    env: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Self { env }
    }

    pub fn evaluate(&mut self, node: &AstNode) -> Result<Outcome> {
        self.walk(node)
    }

    /// Evaluate a node that must produce a quantity.
    fn value(&mut self, node: &AstNode) -> Result<Quantity> {
        match self.walk(node)? {
            Outcome::Value(quantity) => Ok(quantity),
            other => Err(Error::EvaluationError(format!(
                "expected a value, got {:?}",
                other
            ))),
        }
    }

    fn binary(
        &mut self,
        left: &AstNode,
        right: &AstNode,
        op: impl FnOnce(Quantity, Quantity) -> dimcalc_units::Result<Quantity>,
    ) -> Result<Outcome> {
        let left = self.value(left)?;
        let right = self.value(right)?;
        Ok(Outcome::Value(op(left, right)?))
    }

    fn call_user(&mut self, function: &UserFunction, arguments: Vec<Quantity>) -> Result<Quantity> {
        if function.parameters.len() != arguments.len() {
            return Err(Error::ArityMismatch {
                function: function.name.clone(),
                expected: function.parameters.len().to_string(),
                found: arguments.len(),
            });
        }

        let bindings: HashMap<String, Quantity> = function
            .parameters
            .iter()
            .cloned()
            .zip(arguments)
            .collect();

        let mut frame = self.env.enter_frame(bindings);
        Evaluator::new(&mut frame).value(&function.body)
    }
}

impl NodeWalker for Evaluator<'_> {
    type Output = Result<Outcome>;

    fn walk_number(&mut self, literal: &str) -> Result<Outcome> {
        if literal.is_empty() {
            return Ok(Outcome::Value(Quantity::dimensionless(1.0)));
        }
        let value: f64 = literal
            .parse()
            .map_err(|_| Error::EvaluationError(format!("invalid number '{}'", literal)))?;
        Ok(Outcome::Value(Quantity::dimensionless(value)))
    }

    fn walk_add(&mut self, left: &AstNode, right: &AstNode) -> Result<Outcome> {
        self.binary(left, right, |l, r| l.try_add(r))
    }

    fn walk_subtract(&mut self, left: &AstNode, right: &AstNode) -> Result<Outcome> {
        self.binary(left, right, |l, r| l.try_sub(r))
    }

    fn walk_multiply(&mut self, left: &AstNode, right: &AstNode) -> Result<Outcome> {
        self.binary(left, right, |l, r| Ok(l * r))
    }

    fn walk_divide(&mut self, left: &AstNode, right: &AstNode) -> Result<Outcome> {
        self.binary(left, right, |l, r| Ok(l / r))
    }

    fn walk_exponentiate(&mut self, base: &AstNode, exponent: &AstNode) -> Result<Outcome> {
        self.binary(base, exponent, Quantity::pow)
    }

    fn walk_invert(&mut self, value: &AstNode) -> Result<Outcome> {
        Ok(Outcome::Value(-self.value(value)?))
    }

    fn walk_absolute(&mut self, expression: &AstNode) -> Result<Outcome> {
        Ok(Outcome::Value(self.value(expression)?.abs()))
    }

    fn walk_unit(&mut self, factors: &[UnitFactor]) -> Result<Outcome> {
        Ok(Outcome::Value(Unit::from_factors(factors)?.into()))
    }

    fn walk_unit_number(&mut self, value: &AstNode, unit: &AstNode) -> Result<Outcome> {
        let value = self.value(value)?;
        let unit = self.value(unit)?;
        Ok(Outcome::Value(value * unit))
    }

    fn walk_call(&mut self, function: &Identifier, arguments: &ArgumentList) -> Result<Outcome> {
        let callee = self.env.lookup_function(&function.name)?;
        let arguments = arguments
            .arguments
            .iter()
            .map(|argument| self.value(argument))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            function = %function.name,
            arguments = arguments.len(),
            depth = self.env.depth(),
            "calling function"
        );

        let value = match callee.as_ref() {
            Function::Native(native) => native.call(&arguments)?,
            Function::User(user) => self.call_user(user, arguments)?,
        };
        Ok(Outcome::Value(value))
    }

    fn walk_access(&mut self, name: &Identifier) -> Result<Outcome> {
        Ok(Outcome::Value(self.env.lookup_variable(&name.name)?))
    }

    fn walk_variable_definition(
        &mut self,
        name: &Identifier,
        expression: &AstNode,
    ) -> Result<Outcome> {
        let value = self.value(expression)?;
        tracing::debug!(variable = %name.name, value = %value, "defining variable");
        self.env.define_variable(name.name.clone(), value);
        Ok(Outcome::Nothing)
    }

    fn walk_function_definition(
        &mut self,
        name: &Identifier,
        parameters: &[Identifier],
        expression: &AstNode,
    ) -> Result<Outcome> {
        tracing::debug!(
            function = %name.name,
            parameters = parameters.len(),
            "defining function"
        );
        self.env.define_function(Function::User(UserFunction {
            name: name.name.clone(),
            parameters: parameters.iter().map(|p| p.name.clone()).collect(),
            body: expression.clone(),
        }));
        Ok(Outcome::Nothing)
    }

    fn walk_subexpression(&mut self, expression: &AstNode) -> Result<Outcome> {
        Ok(Outcome::Value(self.value(expression)?))
    }

    fn walk_command(&mut self, command: &Command) -> Result<Outcome> {
        match command {
            Command::Exit | Command::Quit => Ok(Outcome::Exit),
            Command::Render { path } => Ok(Outcome::Render(PathBuf::from(path))),
            Command::Evaluate(statement) | Command::Exclude(statement) => self.walk(statement),
            Command::Newline => Ok(Outcome::Nothing),
        }
    }
}
