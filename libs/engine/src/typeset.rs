//! LaTeX typesetting walker
//!
//! Renders the same nodes as the evaluator, as `align`-environment rows.

use crate::ast::{ArgumentList, AstNode, Command, Identifier, UnitFactor};
use crate::error::{Error, Result};
use crate::walker::NodeWalker;
use dimcalc_units::Unit;

/// Rendered form of one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Typeset {
    Math(String),
    /// Nothing to show (`render`, `exclude`)
    Empty,
    Exit,
}

impl Typeset {
    pub fn into_math(self) -> Option<String> {
        match self {
            Typeset::Math(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Typesetter;

impl Typesetter {
    pub fn new() -> Self {
        Self
    }

    pub fn typeset(&mut self, node: &AstNode) -> Result<Typeset> {
        self.walk(node)
    }

    fn math(&mut self, node: &AstNode) -> Result<String> {
        match self.walk(node)? {
            Typeset::Math(text) => Ok(text),
            Typeset::Empty => Ok(String::new()),
            Typeset::Exit => Err(Error::EvaluationError(
                "commands cannot be typeset inside an expression".into(),
            )),
        }
    }

    fn binary(&mut self, left: &AstNode, right: &AstNode, op: &str) -> Result<Typeset> {
        let left = self.math(left)?;
        let right = self.math(right)?;
        Ok(Typeset::Math(format!("{left} {op} {right}")))
    }
}

impl NodeWalker for Typesetter {
    type Output = Result<Typeset>;

    fn walk_number(&mut self, literal: &str) -> Result<Typeset> {
        let text = if literal.is_empty() { "1" } else { literal };
        Ok(Typeset::Math(text.to_string()))
    }

    fn walk_add(&mut self, left: &AstNode, right: &AstNode) -> Result<Typeset> {
        self.binary(left, right, "+")
    }

    fn walk_subtract(&mut self, left: &AstNode, right: &AstNode) -> Result<Typeset> {
        self.binary(left, right, "-")
    }

    fn walk_multiply(&mut self, left: &AstNode, right: &AstNode) -> Result<Typeset> {
        self.binary(left, right, r"\cdot")
    }

    fn walk_divide(&mut self, left: &AstNode, right: &AstNode) -> Result<Typeset> {
        let left = self.math(left)?;
        let right = self.math(right)?;
        Ok(Typeset::Math(format!(r"\frac{{{left}}}{{{right}}}")))
    }

    fn walk_exponentiate(&mut self, base: &AstNode, exponent: &AstNode) -> Result<Typeset> {
        let base = self.math(base)?;
        let exponent = self.math(exponent)?;
        Ok(Typeset::Math(format!("{{{base}}}^{{{exponent}}}")))
    }

    fn walk_invert(&mut self, value: &AstNode) -> Result<Typeset> {
        Ok(Typeset::Math(format!("-{}", self.math(value)?)))
    }

    fn walk_absolute(&mut self, expression: &AstNode) -> Result<Typeset> {
        Ok(Typeset::Math(format!("|{}|", self.math(expression)?)))
    }

    fn walk_unit(&mut self, factors: &[UnitFactor]) -> Result<Typeset> {
        Ok(Typeset::Math(Unit::from_factors(factors)?.to_latex_string()))
    }

    fn walk_unit_number(&mut self, value: &AstNode, unit: &AstNode) -> Result<Typeset> {
        let value = self.math(value)?;
        let unit = self.math(unit)?;
        if unit.is_empty() {
            return Ok(Typeset::Math(value));
        }
        Ok(Typeset::Math(format!("{value} {unit}")))
    }

    fn walk_call(&mut self, function: &Identifier, arguments: &ArgumentList) -> Result<Typeset> {
        let arguments = arguments
            .arguments
            .iter()
            .map(|argument| self.math(argument))
            .collect::<Result<Vec<_>>>()?;
        Ok(Typeset::Math(format!(
            "{}({})",
            function.name,
            arguments.join(", ")
        )))
    }

    fn walk_access(&mut self, name: &Identifier) -> Result<Typeset> {
        Ok(Typeset::Math(name.name.clone()))
    }

    fn walk_variable_definition(
        &mut self,
        name: &Identifier,
        expression: &AstNode,
    ) -> Result<Typeset> {
        Ok(Typeset::Math(format!(
            "{} &=& {}",
            name.name,
            self.math(expression)?
        )))
    }

    fn walk_function_definition(
        &mut self,
        name: &Identifier,
        parameters: &[Identifier],
        expression: &AstNode,
    ) -> Result<Typeset> {
        let parameters: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
        Ok(Typeset::Math(format!(
            "{}({}) &=& {}",
            name.name,
            parameters.join(", "),
            self.math(expression)?
        )))
    }

    fn walk_subexpression(&mut self, expression: &AstNode) -> Result<Typeset> {
        Ok(Typeset::Math(format!("({})", self.math(expression)?)))
    }

    fn walk_command(&mut self, command: &Command) -> Result<Typeset> {
        match command {
            Command::Exit | Command::Quit => Ok(Typeset::Exit),
            Command::Render { .. } | Command::Exclude(_) => Ok(Typeset::Empty),
            Command::Evaluate(statement) => self.walk(statement),
            Command::Newline => Ok(Typeset::Math(r"\\".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    fn latex(input: &str) -> Typeset {
        Typesetter::new().typeset(&parse_line(input).unwrap()).unwrap()
    }

    fn math(input: &str) -> String {
        latex(input).into_math().unwrap()
    }

    #[test]
    fn test_operators() {
        assert_eq!(math("1 + 2 - 3"), "1 + 2 - 3");
        assert_eq!(math("a * b"), r"a \cdot b");
        assert_eq!(math("a / b"), r"\frac{a}{b}");
        assert_eq!(math("a ^ 2"), "{a}^{2}");
        assert_eq!(math("-|x|"), "-|x|");
        assert_eq!(math("(1)"), "(1)");
    }

    #[test]
    fn test_units() {
        assert_eq!(math("3 kg"), "3 kg");
        assert_eq!(math("'N'"), "1 N");
        assert_eq!(math("2 m-1s-2"), r"2 \frac{1}{{s}^{2} m}");
    }

    #[test]
    fn test_definitions_and_calls() {
        assert_eq!(math("v = 3 m"), "v &=& 3 m");
        assert_eq!(math("f(x, y) = x * y"), r"f(x, y) &=& x \cdot y");
        assert_eq!(math("log(100, 10)"), "log(100, 10)");
    }

    #[test]
    fn test_commands() {
        assert_eq!(latex(":exclude 1 + 1"), Typeset::Empty);
        assert_eq!(latex(":render out.tex"), Typeset::Empty);
        assert_eq!(latex(":exit"), Typeset::Exit);
        assert_eq!(math(":newline"), r"\\");
    }
}
