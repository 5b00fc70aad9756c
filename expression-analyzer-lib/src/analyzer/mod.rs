pub mod error;
pub mod grammar;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::analyzer::error::LexError;
use crate::analyzer::parser::SyntaxAnalysis;
use crate::analyzer::token::{Token, TokenKind};
use anyhow::{Context, Result};
use string_builder::Builder;

/// Everything produced by analyzing one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub syntax: SyntaxAnalysis,
}

/// Tokenizes and parses the given expression.
///
/// A syntax error does not fail the call; it is reported through `Analysis::syntax`.
/// Only text that cannot be tokenized at all is returned as an error.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens and the syntax analysis of the expression.
///
/// # Examples
///
/// ```
/// use expression_analyzer::analyzer::analyze;
///
/// let analysis = analyze("3!!").unwrap();
/// assert!(analysis.syntax.valid);
///
/// let not_tokenizable = analyze("tan(1)");
/// assert!(not_tokenizable.is_err());
/// ```
pub fn analyze(expression: &str) -> Result<Analysis, LexError> {
    let tokens = lexer::tokenize(expression)?;
    let syntax = parser::parse(&tokens);
    Ok(Analysis { tokens, syntax })
}

/// Pretty-prints the given tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use expression_analyzer::analyzer::tokens_to_string;
/// use expression_analyzer::analyzer::lexer::tokenize;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("2*sin(3)^4!")?;
/// let pretty_printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(pretty_printed_tokens, "2 * sin(3)^4!");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::Operator
                if ['+', '-', '*', '/']
                    .iter()
                    .any(|&symbol| token.is_operator(symbol)) =>
            {
                builder.append(" ");
                builder.append(token.text.as_str());
                builder.append(" ");
            }
            _ => builder.append(token.text.as_str()),
        }
    }

    builder.string().context("Failed to build token string")
}
