//! Calculator parser - converts one input line to an AST
//!
//! Recursive descent parser. Precedence (lowest to highest):
//! 1. additive (+, -)
//! 2. multiplicative (*, /)
//! 3. invert (unary -)
//! 4. exponentiate (^, **), right associative
//! 5. postfix (number with optional unit, quoted unit, call, access,
//!    parenthesized, absolute value)
//!
//! Definitions and commands are statement-level only, so an expression can
//! never define anything part-way through its evaluation.

use crate::ast::*;
use crate::error::{Error, Result};
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};

/// Parser for calculator lines
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    recursion_depth: usize,
}

const MAX_RECURSION_DEPTH: usize = 200;

impl Parser {
    /// Create a new parser for the given input string
    pub fn new(input: String) -> Self {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token();
        Self {
            lexer,
            current_token,
            recursion_depth: 0,
        }
    }

    /// Advance to the next token
    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    /// Check if current token matches the given type
    fn current_token_is(&self, token_type: TokenType) -> bool {
        self.current_token.token_type == token_type
    }

    /// Type of the token after the current one
    fn peek_type(&mut self) -> TokenType {
        let saved = self.lexer.checkpoint();
        let token_type = self.lexer.next_token().token_type;
        self.lexer.restore(saved);
        token_type
    }

    /// Expect a specific token type and advance
    fn expect(&mut self, token_type: TokenType) -> Result<Token> {
        if self.current_token.token_type == token_type {
            let token = self.current_token.clone();
            self.advance();
            Ok(token)
        } else {
            Err(self.unexpected(&format!("{:?}", token_type)))
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        let token = &self.current_token;
        match token.token_type {
            TokenType::Error => Error::ParseError(format!(
                "{} at line {}, column {}",
                token.value, token.line, token.column
            )),
            TokenType::Eof => Error::ParseError(format!(
                "Expected {}, but reached end of input",
                expected
            )),
            _ => Error::ParseError(format!(
                "Expected {}, got {:?} '{}' at line {}, column {}",
                expected, token.token_type, token.value, token.line, token.column
            )),
        }
    }

    /// Parse the entire line (top-level entry point)
    ///
    /// The result is always an [`AstNode::Command`]; plain statements are
    /// wrapped in [`Command::Evaluate`].
    pub fn parse(&mut self) -> Result<AstNode> {
        let node = if self.current_token_is(TokenType::Colon) {
            self.parse_command()?
        } else {
            AstNode::evaluate(self.parse_statement()?)
        };

        if !self.current_token_is(TokenType::Eof) {
            return Err(self.unexpected("end of input"));
        }

        Ok(node)
    }

    /// Parse a bare expression with no statement or command wrapper
    pub fn parse_expression_only(&mut self) -> Result<AstNode> {
        let expr = self.parse_expression()?;
        if !self.current_token_is(TokenType::Eof) {
            return Err(self.unexpected("end of input"));
        }
        Ok(expr)
    }

    fn check_recursion_depth(&mut self) -> Result<()> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            return Err(Error::ParseError(format!(
                "Expression too deeply nested (max depth: {})",
                MAX_RECURSION_DEPTH
            )));
        }
        Ok(())
    }

    fn decrement_recursion_depth(&mut self) {
        self.recursion_depth -= 1;
    }

    /// Release the depth charged for each operand of a binary chain.
    fn release_recursion_depth(&mut self, operands: usize) {
        self.recursion_depth -= operands;
    }

    /// command: ':' keyword ...
    fn parse_command(&mut self) -> Result<AstNode> {
        self.expect(TokenType::Colon)?;
        let keyword = self.expect(TokenType::Identifier)?;

        let command = match keyword.value.as_str() {
            "exit" => Command::Exit,
            "quit" => Command::Quit,
            "newline" => Command::Newline,
            "evaluate" => Command::Evaluate(Box::new(self.parse_statement()?)),
            "exclude" => Command::Exclude(Box::new(self.parse_statement()?)),
            "render" => {
                let path = self.lexer.remainder_from(self.current_token.position);
                if path.is_empty() {
                    return Err(Error::ParseError("render requires an output path".into()));
                }
                self.current_token =
                    Token::eof(self.current_token.position + path.chars().count(), 1, 1);
                Command::Render { path }
            }
            other => {
                return Err(Error::ParseError(format!(
                    "Unknown command ':{}' at line {}, column {}",
                    other, keyword.line, keyword.column
                )))
            }
        };

        Ok(AstNode::Command(command))
    }

    /// statement: definition | expression
    fn parse_statement(&mut self) -> Result<AstNode> {
        if self.current_token_is(TokenType::Identifier) {
            match self.peek_type() {
                TokenType::Equal => return self.parse_variable_definition(),
                TokenType::OpenParen => {
                    if let Some(definition) = self.try_parse_function_definition()? {
                        return Ok(definition);
                    }
                }
                _ => {}
            }
        }
        self.parse_expression()
    }

    fn parse_variable_definition(&mut self) -> Result<AstNode> {
        let name = self.expect(TokenType::Identifier)?;
        self.expect(TokenType::Equal)?;
        let expression = self.parse_expression()?;
        Ok(AstNode::VariableDefinition {
            name: Identifier::new(name.value),
            expression: Box::new(expression),
        })
    }

    /// `f(a, b) = ...` looks like a call until the `=`; backtrack when it is one.
    fn try_parse_function_definition(&mut self) -> Result<Option<AstNode>> {
        let saved_lexer = self.lexer.checkpoint();
        let saved_token = self.current_token.clone();

        match self.parse_function_head() {
            Some((name, parameters)) if self.current_token_is(TokenType::Equal) => {
                self.advance(); // Skip '='
                let expression = self.parse_expression()?;
                Ok(Some(AstNode::FunctionDefinition {
                    name,
                    parameters,
                    expression: Box::new(expression),
                }))
            }
            _ => {
                self.lexer.restore(saved_lexer);
                self.current_token = saved_token;
                Ok(None)
            }
        }
    }

    fn parse_function_head(&mut self) -> Option<(Identifier, Vec<Identifier>)> {
        let name = self.expect(TokenType::Identifier).ok()?;
        self.expect(TokenType::OpenParen).ok()?;

        let mut parameters = Vec::new();
        if !self.current_token_is(TokenType::CloseParen) {
            loop {
                let param = self.expect(TokenType::Identifier).ok()?;
                parameters.push(Identifier::new(param.value));
                if self.current_token_is(TokenType::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenType::CloseParen).ok()?;

        Some((Identifier::new(name.value), parameters))
    }

    /// expression: term (('+' | '-') term)*
    ///
    /// Chains are left-nested, so every extra operand deepens the tree by one
    /// and is charged against the depth limit until the expression is done.
    fn parse_expression(&mut self) -> Result<AstNode> {
        self.check_recursion_depth()?;
        let mut left = self.parse_term()?;
        let mut operands = 0;

        loop {
            let make: fn(Box<AstNode>, Box<AstNode>) -> AstNode = match self.current_token.token_type {
                TokenType::Plus => |l, r| AstNode::Add { left: l, right: r },
                TokenType::Minus => |l, r| AstNode::Subtract { left: l, right: r },
                _ => break,
            };
            self.check_recursion_depth()?;
            operands += 1;
            self.advance();
            let right = self.parse_term()?;
            left = make(Box::new(left), Box::new(right));
        }

        self.release_recursion_depth(operands);
        self.decrement_recursion_depth();
        Ok(left)
    }

    /// term: unary (('*' | '/') unary)*
    fn parse_term(&mut self) -> Result<AstNode> {
        let mut left = self.parse_unary()?;
        let mut operands = 0;

        loop {
            let make: fn(Box<AstNode>, Box<AstNode>) -> AstNode = match self.current_token.token_type {
                TokenType::Multiply => |l, r| AstNode::Multiply { left: l, right: r },
                TokenType::Divide => |l, r| AstNode::Divide { left: l, right: r },
                _ => break,
            };
            self.check_recursion_depth()?;
            operands += 1;
            self.advance();
            let right = self.parse_unary()?;
            left = make(Box::new(left), Box::new(right));
        }

        self.release_recursion_depth(operands);
        Ok(left)
    }

    /// unary: '-' unary | power
    fn parse_unary(&mut self) -> Result<AstNode> {
        if self.current_token_is(TokenType::Minus) {
            self.check_recursion_depth()?;
            self.advance();
            let value = self.parse_unary()?;
            self.decrement_recursion_depth();
            return Ok(AstNode::Invert {
                value: Box::new(value),
            });
        }
        self.parse_power()
    }

    /// power: postfix ('^' unary)?
    fn parse_power(&mut self) -> Result<AstNode> {
        let base = self.parse_postfix()?;

        if self.current_token_is(TokenType::Caret) {
            self.check_recursion_depth()?;
            self.advance();
            let exponent = self.parse_unary()?;
            self.decrement_recursion_depth();
            return Ok(AstNode::Exponentiate {
                base: Box::new(base),
                exponent: Box::new(exponent),
            });
        }

        Ok(base)
    }

    fn parse_postfix(&mut self) -> Result<AstNode> {
        match self.current_token.token_type {
            TokenType::NumberLiteral => {
                let number = AstNode::number(self.current_token.value.clone());
                self.advance();
                match self.parse_optional_unit()? {
                    Some(unit) => Ok(AstNode::UnitNumber {
                        value: Box::new(number),
                        unit: Box::new(unit),
                    }),
                    None => Ok(number),
                }
            }
            TokenType::UnitString => {
                // A quoted unit on its own has an implicit magnitude of one.
                let unit = self.parse_optional_unit()?;
                let unit = unit.ok_or_else(|| self.unexpected("unit"))?;
                Ok(AstNode::UnitNumber {
                    value: Box::new(AstNode::number("")),
                    unit: Box::new(unit),
                })
            }
            TokenType::Identifier => {
                let name = Identifier::new(self.current_token.value.clone());
                self.advance();
                if self.current_token_is(TokenType::OpenParen) {
                    let arguments = self.parse_arguments()?;
                    Ok(AstNode::Call {
                        function: name,
                        arguments,
                    })
                } else {
                    Ok(AstNode::Access { name })
                }
            }
            TokenType::OpenParen => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect(TokenType::CloseParen)?;
                Ok(AstNode::Subexpression {
                    expression: Box::new(expression),
                })
            }
            TokenType::Pipe => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect(TokenType::Pipe)?;
                Ok(AstNode::Absolute {
                    expression: Box::new(expression),
                })
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    fn parse_optional_unit(&mut self) -> Result<Option<AstNode>> {
        match self.current_token.token_type {
            TokenType::Unit | TokenType::UnitString => {
                if self.current_token.value.is_empty() {
                    return Err(Error::ParseError(format!(
                        "Empty unit at line {}, column {}",
                        self.current_token.line, self.current_token.column
                    )));
                }
                let expr = dimcalc_units::parse(&self.current_token.value)?;
                dimcalc_units::Unit::from_factors(&expr.factors)?;
                self.advance();
                Ok(Some(AstNode::Unit {
                    factors: expr.factors,
                }))
            }
            _ => Ok(None),
        }
    }

    /// arguments: '(' (expression (',' expression)*)? ')'
    fn parse_arguments(&mut self) -> Result<ArgumentList> {
        self.expect(TokenType::OpenParen)?;

        let mut arguments = Vec::new();
        if !self.current_token_is(TokenType::CloseParen) {
            loop {
                arguments.push(self.parse_expression()?);
                if self.current_token_is(TokenType::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenType::CloseParen)?;

        Ok(ArgumentList::new(arguments))
    }
}

/// Parse one input line.
pub fn parse_line(input: &str) -> Result<AstNode> {
    Parser::new(input.to_string()).parse()
}
