use crate::analyzer::error::ParseError;
use crate::analyzer::operator::{BinaryOperator, Function};
use crate::analyzer::parser::derivation::{DerivationStep, Stage};
use crate::analyzer::syntax::expression_tree::Node;
use crate::analyzer::token::{Token, TokenKind};
use log::trace;

/// How many parentheses and function calls may be open at once.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive descent over the token sequence, one method per grammar rule.
///
/// The cursor only ever moves forward; every rule decides with a single token of lookahead.
pub(super) struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    nesting: usize,
    steps: Vec<DerivationStep>,
}

impl<'a> Parser<'a> {
    pub(super) fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens,
            cursor: 0,
            nesting: 0,
            steps: Vec::new(),
        }
    }

    /// Parses a whole expression, requiring that every token is consumed.
    pub(super) fn parse_all(&mut self) -> Result<Node, ParseError> {
        let root = self.expression()?;
        if self.cursor != self.tokens.len() {
            return Err(ParseError::UnexpectedTrailingTokens);
        }
        Ok(root)
    }

    pub(super) fn into_steps(self) -> Vec<DerivationStep> {
        self.steps
    }

    /// expression := term (("+"|"-") term)*
    fn expression(&mut self) -> Result<Node, ParseError> {
        let mut node = self.term()?;
        while let Some(operator) = self.next_binary_operator(&['+', '-']) {
            let right = self.term()?;
            node = Node::new_binary_expression(operator, node, right);
            self.log(
                Stage::Expression,
                format!("Created binary expression with operator '{}'", operator),
            );
        }
        Ok(node)
    }

    /// term := factor (("*"|"/") factor)*
    fn term(&mut self) -> Result<Node, ParseError> {
        let mut node = self.factor()?;
        while let Some(operator) = self.next_binary_operator(&['*', '/']) {
            let right = self.factor()?;
            node = Node::new_binary_expression(operator, node, right);
            self.log(
                Stage::Term,
                format!("Created binary expression with operator '{}'", operator),
            );
        }
        Ok(node)
    }

    /// factor := power ("!")*
    ///
    /// Factorial is applied to the already folded power, so `2^3!` is `(2^3)!`.
    fn factor(&mut self) -> Result<Node, ParseError> {
        let mut node = self.power()?;
        while self.peek().map_or(false, Token::is_factorial) {
            self.cursor += 1;
            node = Node::new_factorial(node);
            self.log(Stage::Factor, "Created factorial expression");
        }
        Ok(node)
    }

    /// power := primary ("^" primary)*
    fn power(&mut self) -> Result<Node, ParseError> {
        let mut node = self.primary()?;
        while let Some(operator) = self.next_binary_operator(&['^']) {
            let right = self.primary()?;
            node = Node::new_binary_expression(operator, node, right);
            self.log(Stage::Power, "Created power expression");
        }
        Ok(node)
    }

    /// primary := NUMBER | "(" expression ")" | FUNCTION "(" expression ")"
    fn primary(&mut self) -> Result<Node, ParseError> {
        let token = self.advance().ok_or(ParseError::UnexpectedEndOfInput)?;
        match token.kind {
            TokenKind::Number => {
                self.log(
                    Stage::Primary,
                    format!("Found number literal '{}'", token.text),
                );
                Ok(Node::new_number_literal(token.text.as_str()))
            }
            TokenKind::Operator if token.is_operator('(') => {
                self.log(
                    Stage::Primary,
                    "Found opening parenthesis, starting subexpression",
                );
                let node = self.nested(Self::expression)?;
                self.expect_operator(')', ParseError::UnmatchedParenthesis)?;
                self.log(
                    Stage::Primary,
                    "Found closing parenthesis, ending subexpression",
                );
                Ok(node)
            }
            TokenKind::Function => {
                let function: Function = token
                    .text
                    .parse()
                    .map_err(|_| ParseError::UnexpectedToken(token.clone()))?;
                self.expect_operator('(', ParseError::FunctionMustBeFollowedByParenthesis)?;
                self.log(
                    Stage::Primary,
                    format!("Found function '{}', parsing argument", function),
                );
                let argument = self.nested(Self::expression)?;
                self.expect_operator(')', ParseError::UnmatchedParenthesisInFunctionCall)?;
                self.log(
                    Stage::Primary,
                    format!("Completed function '{}' call", function),
                );
                Ok(Node::new_function_call(function, argument))
            }
            _ => Err(ParseError::UnexpectedToken(token.clone())),
        }
    }

    /// Runs a rule one parenthesis level deeper, refusing to go past `MAX_NESTING_DEPTH`.
    fn nested(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<Node, ParseError>,
    ) -> Result<Node, ParseError> {
        if self.nesting == MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.nesting += 1;
        let result = rule(self);
        self.nesting -= 1;
        result
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.cursor += 1;
        Some(token)
    }

    /// Consumes the next token if it is one of the given binary operators.
    fn next_binary_operator(&mut self, symbols: &[char]) -> Option<BinaryOperator> {
        let operator = self
            .peek()
            .filter(|token| symbols.iter().any(|&symbol| token.is_operator(symbol)))
            .and_then(|token| token.text.chars().next())
            .and_then(BinaryOperator::from_symbol)?;
        self.cursor += 1;
        Some(operator)
    }

    /// Consumes the given operator, failing with `error` if the next token is anything else
    /// or if there are no tokens left.
    fn expect_operator(&mut self, symbol: char, error: ParseError) -> Result<(), ParseError> {
        match self.peek() {
            Some(token) if token.is_operator(symbol) => {
                self.cursor += 1;
                Ok(())
            }
            _ => Err(error),
        }
    }

    fn log(&mut self, stage: Stage, description: impl Into<String>) {
        let step = DerivationStep::new(stage, description);
        trace!("{}", step);
        self.steps.push(step);
    }
}
