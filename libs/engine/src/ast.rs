//! Abstract Syntax Tree (AST) representation
//!
//! One closed node set shared by the evaluator and the typesetter. Both walk
//! it through [`crate::walker::NodeWalker`], so adding a node kind here forces
//! both walkers to handle it.
//!
//! # Node kinds
//!
//! - number, unit, unit-number
//! - add, subtract, multiply, divide, exponentiate, invert, absolute, subexpression
//! - call (identifier + argument list), access (identifier)
//! - variable-definition, function-definition
//! - command (`exit`, `quit`, `render`, `evaluate`, `exclude`, `newline`)

pub use dimcalc_units::UnitFactor;

/// AST node for one calculator line or any part of it
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal as written; an empty literal stands for `1`
    Number { literal: String },

    /// expression '+' expression
    Add {
        left: Box<AstNode>,
        right: Box<AstNode>,
    },

    /// expression '-' expression
    Subtract {
        left: Box<AstNode>,
        right: Box<AstNode>,
    },

    /// expression '*' expression
    Multiply {
        left: Box<AstNode>,
        right: Box<AstNode>,
    },

    /// expression '/' expression
    Divide {
        left: Box<AstNode>,
        right: Box<AstNode>,
    },

    /// expression '^' expression
    Exponentiate {
        base: Box<AstNode>,
        exponent: Box<AstNode>,
    },

    /// '-' expression
    Invert { value: Box<AstNode> },

    /// '|' expression '|'
    Absolute { expression: Box<AstNode> },

    /// Compound unit, already split into `(symbol, exponent)` pairs
    Unit { factors: Vec<UnitFactor> },

    /// number unit
    UnitNumber {
        value: Box<AstNode>,
        unit: Box<AstNode>,
    },

    /// identifier '(' arguments ')'
    Call {
        function: Identifier,
        arguments: ArgumentList,
    },

    /// identifier
    Access { name: Identifier },

    /// identifier '=' expression
    VariableDefinition {
        name: Identifier,
        expression: Box<AstNode>,
    },

    /// identifier '(' parameters ')' '=' expression
    FunctionDefinition {
        name: Identifier,
        parameters: Vec<Identifier>,
        expression: Box<AstNode>,
    },

    /// '(' expression ')'
    Subexpression { expression: Box<AstNode> },

    /// Top-level directive wrapping every parsed line
    Command(Command),
}

/// A variable or function name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Call arguments in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentList {
    pub arguments: Vec<AstNode>,
}

impl ArgumentList {
    pub fn new(arguments: Vec<AstNode>) -> Self {
        Self { arguments }
    }
}

/// The closed command set
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Exit,
    Quit,
    /// Flush the ledger to a typeset document at `path`
    Render { path: String },
    /// Compute and print (the default for plain lines)
    Evaluate(Box<AstNode>),
    /// Compute, but leave out of the rendered document
    Exclude(Box<AstNode>),
    /// Line break in the rendered document
    Newline,
}

impl AstNode {
    pub fn number(literal: impl Into<String>) -> Self {
        AstNode::Number {
            literal: literal.into(),
        }
    }

    /// Wrap a statement the way a plain input line is wrapped.
    pub fn evaluate(statement: AstNode) -> Self {
        AstNode::Command(Command::Evaluate(Box::new(statement)))
    }
}
