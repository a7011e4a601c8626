//! Token types for the calculator lexer

/// Token types for the calculator lexer
#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub enum TokenType {
    // Literals
    NumberLiteral,
    /// Unquoted compound unit directly after a number: `3 m2kg-1s-3`
    Unit,
    /// Quoted unit: `'N'`
    UnitString,

    Identifier,

    // Operators
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Caret,    // ^ or **
    Pipe,     // |
    Equal,    // =

    // Delimiters
    OpenParen,  // (
    CloseParen, // )
    Comma,      // ,
    Colon,      // :

    // End of input
    Eof,

    // Error
    Error, // For lexical errors
}

/// A token in a calculator line
#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    /// Character offset of the first character of the token.
    pub position: usize,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(
        token_type: TokenType,
        value: String,
        position: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            token_type,
            value,
            position,
            line,
            column,
        }
    }

    pub fn eof(position: usize, line: usize, column: usize) -> Self {
        Self::new(TokenType::Eof, String::new(), position, line, column)
    }

    pub fn error(message: String, position: usize, line: usize, column: usize) -> Self {
        Self::new(TokenType::Error, message, position, line, column)
    }
}
