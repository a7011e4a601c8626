//! Calculator lexer - tokenizes input lines
//!
//! Converts one input line into a stream of tokens. A word that directly
//! follows a number is lexed as a unit suffix when every letters segment in
//! it names a known unit (`3 m2kg-1s-3`, `1 N`); otherwise it is an
//! identifier.

use crate::error::{Error, Result};
use crate::token::{Token, TokenType};

/// Cursor state of a [`Lexer`], used to backtrack without copying the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
    line: usize,
    column: usize,
    current_char: Option<char>,
    after_number: bool,
}

/// The calculator lexer
pub struct Lexer {
    position: usize,
    line: usize,
    column: usize,
    chars: Vec<char>,
    current_char: Option<char>,
    /// Set after a number token so the next word may be read as a unit.
    after_number: bool,
}

impl Lexer {
    /// Create a new lexer for the given input
    pub fn new(input: String) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            position: 0,
            line: 1,
            column: 1,
            chars,
            current_char,
            after_number: false,
        }
    }

    /// Save the cursor so it can be restored with [`Lexer::restore`].
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            line: self.line,
            column: self.column,
            current_char: self.current_char,
            after_number: self.after_number,
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
        self.current_char = checkpoint.current_char;
        self.after_number = checkpoint.after_number;
    }

    /// Raw input from `position` to the end, trimmed.
    pub fn remainder_from(&self, position: usize) -> String {
        let start = position.min(self.chars.len());
        self.chars[start..].iter().collect::<String>().trim().to_string()
    }

    /// Advance to the next character
    fn advance(&mut self) {
        if let Some(c) = self.current_char {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += 1;
        self.current_char = self.chars.get(self.position).copied();
    }

    /// Peek at the next character without advancing
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position + 1).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    /// Skip whitespace and `#` comments (comments run to end of line)
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char {
            if c.is_whitespace() {
                self.advance();
            } else if c == '#' {
                while let Some(c) = self.current_char {
                    self.advance();
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Read an identifier
    fn read_identifier(&mut self) -> String {
        let start_pos = self.position;

        while let Some(c) = self.current_char {
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        self.chars[start_pos..self.position].iter().collect()
    }

    /// Read a number: digits, optional fraction, optional exponent
    fn read_number(&mut self) -> String {
        let start_pos = self.position;

        self.skip_digits();

        // Decimal part only if followed by digits
        if self.current_char == Some('.') && self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // Skip '.'
            self.skip_digits();
        }

        // Scientific notation: 1e3, 2.5E-4
        if matches!(self.current_char, Some('e' | 'E')) {
            let signed = matches!(self.peek(), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                self.advance(); // Skip 'e'
                if signed {
                    self.advance();
                }
                self.skip_digits();
            }
        }

        self.chars[start_pos..self.position].iter().collect()
    }

    fn skip_digits(&mut self) {
        while self.current_char.is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Read a quoted unit: 'm2kg-1'
    fn read_quoted(&mut self) -> Result<String> {
        self.advance(); // Skip opening quote

        let start_pos = self.position;
        while let Some(c) = self.current_char {
            if c == '\'' {
                let value = self.chars[start_pos..self.position].iter().collect();
                self.advance(); // Skip closing quote
                return Ok(value);
            }
            self.advance();
        }

        Err(Error::ParseError("Unterminated unit string".into()))
    }

    /// Try to read a unit suffix at the current position.
    ///
    /// Restores the lexer and returns `None` when the word is not a unit.
    fn try_read_unit(&mut self) -> Option<String> {
        let saved = self.checkpoint();
        let start_pos = self.position;

        while self.current_char.is_some_and(char::is_alphabetic) {
            while self.current_char.is_some_and(char::is_alphabetic) {
                self.advance();
            }
            // Signed exponent: the sign only belongs to the unit when a digit follows.
            let signed = matches!(self.current_char, Some('-' | '+'))
                && self.peek().is_some_and(|c| c.is_ascii_digit());
            if signed {
                self.advance();
            }
            if self.current_char.is_some_and(|c| c.is_ascii_digit()) {
                self.skip_digits();
                if self.current_char == Some('.') && self.peek().is_some_and(|c| c.is_ascii_digit())
                {
                    self.advance();
                    self.skip_digits();
                }
            }
        }

        let word: String = self.chars[start_pos..self.position].iter().collect();
        let at_boundary = !self
            .current_char
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '(');

        if at_boundary && dimcalc_units::Unit::from_string(&word).is_ok() {
            Some(word)
        } else {
            self.restore(saved);
            None
        }
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Token {
        let after_number = std::mem::replace(&mut self.after_number, false);
        self.skip_whitespace();

        let position = self.position;
        let line = self.line;
        let column = self.column;

        let Some(c) = self.current_char else {
            return Token::eof(position, line, column);
        };

        if after_number && c.is_alphabetic() {
            if let Some(unit) = self.try_read_unit() {
                return Token::new(TokenType::Unit, unit, position, line, column);
            }
        }

        let single = |lexer: &mut Lexer, token_type: TokenType| {
            lexer.advance();
            Token::new(token_type, c.to_string(), position, line, column)
        };

        match c {
            '(' => single(self, TokenType::OpenParen),
            ')' => single(self, TokenType::CloseParen),
            ',' => single(self, TokenType::Comma),
            ':' => single(self, TokenType::Colon),
            '+' => single(self, TokenType::Plus),
            '-' => single(self, TokenType::Minus),
            '/' => single(self, TokenType::Divide),
            '^' => single(self, TokenType::Caret),
            '|' => single(self, TokenType::Pipe),
            '=' => single(self, TokenType::Equal),
            '*' => {
                self.advance();
                if self.current_char == Some('*') {
                    self.advance();
                    Token::new(TokenType::Caret, "**".into(), position, line, column)
                } else {
                    Token::new(TokenType::Multiply, "*".into(), position, line, column)
                }
            }
            '\'' => match self.read_quoted() {
                Ok(value) => Token::new(TokenType::UnitString, value, position, line, column),
                Err(e) => Token::error(e.to_string(), position, line, column),
            },
            c if c.is_ascii_digit() => {
                let value = self.read_number();
                self.after_number = true;
                Token::new(TokenType::NumberLiteral, value, position, line, column)
            }
            c if c.is_alphabetic() || c == '_' => {
                let ident = self.read_identifier();
                Token::new(TokenType::Identifier, ident, position, line, column)
            }
            other => {
                self.advance();
                Token::error(
                    format!("Unexpected character '{}'", other),
                    position,
                    line,
                    column,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input.to_string());
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.token_type == TokenType::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn types(input: &str) -> Vec<TokenType> {
        tokenize(input).into_iter().map(|t| t.token_type).collect()
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("42 3.14 1e3 2.5E-4");
        let values: Vec<_> = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["42", "3.14", "1e3", "2.5E-4", ""]);
    }

    #[test]
    fn test_unit_after_number() {
        let tokens = tokenize("3 m2kg-1s-3");
        assert_eq!(tokens[1].token_type, TokenType::Unit);
        assert_eq!(tokens[1].value, "m2kg-1s-3");
    }

    #[test]
    fn test_unknown_word_after_number_is_identifier() {
        assert_eq!(
            types("2 x"),
            vec![TokenType::NumberLiteral, TokenType::Identifier, TokenType::Eof]
        );
    }

    #[test]
    fn test_call_after_number_is_not_unit() {
        assert_eq!(types("2 s(1)")[1], TokenType::Identifier);
    }

    #[test]
    fn test_minus_needs_digit_to_join_unit() {
        assert_eq!(
            types("2 m - 1"),
            vec![
                TokenType::NumberLiteral,
                TokenType::Unit,
                TokenType::Minus,
                TokenType::NumberLiteral,
                TokenType::Eof
            ]
        );
        assert_eq!(tokenize("2 m-1")[1].value, "m-1");
    }

    #[test]
    fn test_unit_not_read_without_number() {
        assert_eq!(types("m")[0], TokenType::Identifier);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            types("+ - * / ^ ** | = ( ) , :"),
            vec![
                TokenType::Plus,
                TokenType::Minus,
                TokenType::Multiply,
                TokenType::Divide,
                TokenType::Caret,
                TokenType::Caret,
                TokenType::Pipe,
                TokenType::Equal,
                TokenType::OpenParen,
                TokenType::CloseParen,
                TokenType::Comma,
                TokenType::Colon,
                TokenType::Eof
            ]
        );
    }

    #[test]
    fn test_quoted_unit() {
        let tokens = tokenize("'N'");
        assert_eq!(tokens[0].token_type, TokenType::UnitString);
        assert_eq!(tokens[0].value, "N");
        assert_eq!(tokenize("'N")[0].token_type, TokenType::Error);
    }

    #[test]
    fn test_comments() {
        assert_eq!(types("1 # trailing note"), vec![TokenType::NumberLiteral, TokenType::Eof]);
    }

    #[test]
    fn test_restore_replays_same_token() {
        let mut lexer = Lexer::new("2 m2kg-1 + x".into());
        lexer.next_token();
        let saved = lexer.checkpoint();
        let unit = lexer.next_token();
        assert_eq!(unit.token_type, TokenType::Unit);
        lexer.restore(saved);
        assert_eq!(lexer.checkpoint(), saved);
        let replayed = lexer.next_token();
        assert_eq!(replayed.token_type, unit.token_type);
        assert_eq!(replayed.value, unit.value);
        assert_eq!(lexer.next_token().token_type, TokenType::Plus);
    }

    #[test]
    fn test_remainder() {
        let mut lexer = Lexer::new(":render out/doc.tex ".into());
        lexer.next_token();
        let word = lexer.next_token();
        let path = lexer.next_token();
        assert_eq!(word.value, "render");
        assert_eq!(lexer.remainder_from(path.position), "out/doc.tex");
    }
}
