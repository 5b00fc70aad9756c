use crate::analyzer::token::Token;
use thiserror::Error;

/// Raised when the input text cannot be split into tokens.
/// Tokenization stops at the first such error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    #[error("Unexpected identifier: {0}")]
    UnexpectedIdentifier(String),
}

/// Raised when a token sequence does not match the grammar.
/// The parser catches these and reports them as an invalid analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unmatched parenthesis")]
    UnmatchedParenthesis,
    #[error("Function must be followed by parenthesis")]
    FunctionMustBeFollowedByParenthesis,
    #[error("Unmatched parenthesis in function call")]
    UnmatchedParenthesisInFunctionCall,
    #[error("Unexpected token: {} '{}'", .0.kind, .0.text)]
    UnexpectedToken(Token),
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("Unexpected tokens at end of input")]
    UnexpectedTrailingTokens,
    #[error("Expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
