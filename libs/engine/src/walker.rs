//! Visitor over [`AstNode`]
//!
//! The evaluator and the typesetter both implement [`NodeWalker`]. The
//! default [`NodeWalker::walk`] holds the only exhaustive match over node
//! kinds; implementors provide one `walk_*` method per kind.

use crate::ast::{ArgumentList, AstNode, Command, Identifier, UnitFactor};

pub trait NodeWalker {
    type Output;

    fn walk_number(&mut self, literal: &str) -> Self::Output;
    fn walk_add(&mut self, left: &AstNode, right: &AstNode) -> Self::Output;
    fn walk_subtract(&mut self, left: &AstNode, right: &AstNode) -> Self::Output;
    fn walk_multiply(&mut self, left: &AstNode, right: &AstNode) -> Self::Output;
    fn walk_divide(&mut self, left: &AstNode, right: &AstNode) -> Self::Output;
    fn walk_exponentiate(&mut self, base: &AstNode, exponent: &AstNode) -> Self::Output;
    fn walk_invert(&mut self, value: &AstNode) -> Self::Output;
    fn walk_absolute(&mut self, expression: &AstNode) -> Self::Output;
    fn walk_unit(&mut self, factors: &[UnitFactor]) -> Self::Output;
    fn walk_unit_number(&mut self, value: &AstNode, unit: &AstNode) -> Self::Output;
    fn walk_call(&mut self, function: &Identifier, arguments: &ArgumentList) -> Self::Output;
    fn walk_access(&mut self, name: &Identifier) -> Self::Output;
    fn walk_variable_definition(&mut self, name: &Identifier, expression: &AstNode)
        -> Self::Output;
    fn walk_function_definition(
        &mut self,
        name: &Identifier,
        parameters: &[Identifier],
        expression: &AstNode,
    ) -> Self::Output;
    fn walk_subexpression(&mut self, expression: &AstNode) -> Self::Output;
    fn walk_command(&mut self, command: &Command) -> Self::Output;

    fn walk(&mut self, node: &AstNode) -> Self::Output {
        match node {
            AstNode::Number { literal } => self.walk_number(literal),
            AstNode::Add { left, right } => self.walk_add(left, right),
            AstNode::Subtract { left, right } => self.walk_subtract(left, right),
            AstNode::Multiply { left, right } => self.walk_multiply(left, right),
            AstNode::Divide { left, right } => self.walk_divide(left, right),
            AstNode::Exponentiate { base, exponent } => self.walk_exponentiate(base, exponent),
            AstNode::Invert { value } => self.walk_invert(value),
            AstNode::Absolute { expression } => self.walk_absolute(expression),
            AstNode::Unit { factors } => self.walk_unit(factors),
            AstNode::UnitNumber { value, unit } => self.walk_unit_number(value, unit),
            AstNode::Call {
                function,
                arguments,
            } => self.walk_call(function, arguments),
            AstNode::Access { name } => self.walk_access(name),
            AstNode::VariableDefinition { name, expression } => {
                self.walk_variable_definition(name, expression)
            }
            AstNode::FunctionDefinition {
                name,
                parameters,
                expression,
            } => self.walk_function_definition(name, parameters, expression),
            AstNode::Subexpression { expression } => self.walk_subexpression(expression),
            AstNode::Command(command) => self.walk_command(command),
        }
    }
}
