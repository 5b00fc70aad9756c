use std::fmt;
use std::fmt::Formatter;

/// The lexical class of a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Operator,
    Function,
    Factorial,
}

/// A discrete part of an expression: its class, and the exact text it was scanned from.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// Characters that each form a single operator token.
pub static OPERATOR_SYMBOLS: [char; 7] = ['+', '-', '*', '/', '^', '(', ')'];

/// Names the lexer accepts as function tokens.
pub static FUNCTION_NAMES: [&str; 2] = ["sin", "cos"];

pub const FACTORIAL_SYMBOL: char = '!';

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Token {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn new_number(digits: impl Into<String>) -> Token {
        Self::new(TokenKind::Number, digits)
    }

    pub fn new_operator(symbol: char) -> Token {
        Self::new(TokenKind::Operator, symbol)
    }

    pub fn new_function(name: impl Into<String>) -> Token {
        Self::new(TokenKind::Function, name)
    }

    pub fn new_factorial() -> Token {
        Self::new(TokenKind::Factorial, FACTORIAL_SYMBOL)
    }

    /// Whether this is the operator token for the given symbol.
    /// Parentheses count as operators.
    pub fn is_operator(&self, symbol: char) -> bool {
        self.kind == TokenKind::Operator && self.text.chars().eq(std::iter::once(symbol))
    }

    pub fn is_factorial(&self) -> bool {
        self.kind == TokenKind::Factorial
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => f.pad("NUMBER"),
            TokenKind::Operator => f.pad("OPERATOR"),
            TokenKind::Function => f.pad("FUNCTION"),
            TokenKind::Factorial => f.pad("FACTORIAL"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_token_matches_only_its_own_symbol() {
        let plus = Token::new_operator('+');

        assert!(plus.is_operator('+'));
        assert!(!plus.is_operator('-'));
    }

    #[test]
    fn number_token_is_never_an_operator() {
        let number = Token::new_number("1");

        assert!(!number.is_operator('1'));
    }

    #[test]
    fn kind_is_displayed_in_upper_case() {
        assert_eq!(TokenKind::Factorial.to_string(), "FACTORIAL");
        assert_eq!(format!("{:?}", Token::new_function("sin")), "FUNCTION \"sin\"");
    }
}
