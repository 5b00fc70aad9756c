use crate::analyzer::error::LexError;
use crate::analyzer::token::{Token, FACTORIAL_SYMBOL, FUNCTION_NAMES, OPERATOR_SYMBOLS};
use itertools::Itertools;
use log::{debug, trace};

/// Splits the given text into tokens, scanning left to right.
///
/// # Arguments
///
/// * `expression`: The text of the expression, in infix format.
///
/// returns: The tokens in scan order, or the first character or identifier
/// that could not be scanned.
///
/// # Examples
///
/// ```
/// use expression_analyzer::analyzer::lexer::tokenize;
/// use expression_analyzer::analyzer::token::Token;
///
/// let tokens = tokenize("12+3").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::new_number("12"), Token::new_operator('+'), Token::new_number("3")]
/// );
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let mut characters = expression.chars().peekable();
    let mut tokens = Vec::new();

    while let Some(&character) = characters.peek() {
        if character.is_whitespace() {
            characters.next();
            continue;
        }

        let token = if character.is_ascii_digit() {
            let digits: String = characters
                .peeking_take_while(char::is_ascii_digit)
                .collect();
            Token::new_number(digits)
        } else if character.is_ascii_lowercase() {
            let name: String = characters
                .peeking_take_while(char::is_ascii_lowercase)
                .collect();
            if !FUNCTION_NAMES.contains(&name.as_str()) {
                return Err(LexError::UnexpectedIdentifier(name));
            }
            Token::new_function(name)
        } else if OPERATOR_SYMBOLS.contains(&character) {
            characters.next();
            Token::new_operator(character)
        } else if character == FACTORIAL_SYMBOL {
            characters.next();
            Token::new_factorial()
        } else {
            return Err(LexError::UnexpectedCharacter(character));
        };

        trace!("Scanned {:?}", token);
        tokens.push(token);
    }

    debug!("Scanned {} tokens from {:?}", tokens.len(), expression);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::token::TokenKind;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    #[parameterized(digits = { "0", "7", "42", "0012", "98765432109876543210" })]
    fn digit_run_becomes_single_number_token(digits: &str) {
        let tokens = tokenize(digits).unwrap();

        pretty_assertions::assert_eq!(tokens, vec![Token::new_number(digits)]);
    }

    #[test]
    fn simple_expression_returns_tokens() {
        let tokens = tokenize("12+3").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new_number("12"),
                Token::new_operator('+'),
                Token::new_number("3"),
            ]
        );
    }

    #[test]
    fn function_call_returns_tokens() {
        let tokens = tokenize("sin(1)").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new_function("sin"),
                Token::new_operator('('),
                Token::new_number("1"),
                Token::new_operator(')'),
            ]
        );
    }

    #[test]
    fn whitespace_is_skipped() {
        let tokens = tokenize(" 1 \t*\n( 2 ) ").unwrap();

        let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::Operator,
            ]
        );
    }

    #[test]
    fn every_operator_symbol_is_its_own_token() {
        let tokens = tokenize("+-*/^()").unwrap();

        let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
        assert_eq!(texts, vec!["+", "-", "*", "/", "^", "(", ")"]);
        assert!(tokens.iter().all(|token| token.kind == TokenKind::Operator));
    }

    #[test]
    fn repeated_factorials_are_separate_tokens() {
        let tokens = tokenize("3!!").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new_number("3"),
                Token::new_factorial(),
                Token::new_factorial(),
            ]
        );
    }

    #[test]
    fn number_directly_followed_by_function_is_split() {
        let tokens = tokenize("2cos(0)").unwrap();

        assert_eq!(tokens[0], Token::new_number("2"));
        assert_eq!(tokens[1], Token::new_function("cos"));
    }

    #[test]
    fn empty_input_returns_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("  \t ").unwrap().is_empty());
    }

    #[parameterized(
        expression = { "tan(1)", "sinh(1)", "x", "1 + sincos(2)" },
        identifier = { "tan", "sinh", "x", "sincos" }
    )]
    fn unknown_identifier_fails(expression: &str, identifier: &str) {
        let error = tokenize(expression).unwrap_err();

        pretty_assertions::assert_eq!(error, LexError::UnexpectedIdentifier(identifier.to_string()));
    }

    #[parameterized(
        expression = { "1@2", "1.5", "Sin(1)", "2 % 3", "1=1" },
        character = { '@', '.', 'S', '%', '=' }
    )]
    fn unknown_character_fails(expression: &str, character: char) {
        let error = tokenize(expression).unwrap_err();

        pretty_assertions::assert_eq!(error, LexError::UnexpectedCharacter(character));
    }
}
