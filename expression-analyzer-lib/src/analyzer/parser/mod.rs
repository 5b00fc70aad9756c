pub mod derivation;
mod recursive_descent;

pub use recursive_descent::MAX_NESTING_DEPTH;

use crate::analyzer::error::ParseError;
use crate::analyzer::parser::derivation::{DerivationStep, Stage};
use crate::analyzer::parser::recursive_descent::Parser;
use crate::analyzer::syntax::expression_tree::Node;
use crate::analyzer::syntax::render_tree::RenderTree;
use crate::analyzer::token::Token;
use log::debug;

/// The outcome of checking a token sequence against the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxAnalysis {
    pub valid: bool,
    pub steps: Vec<DerivationStep>,
    pub tree: RenderTree,
    /// The abstract syntax tree, present only when the expression is valid.
    pub ast: Option<Node>,
    /// The error that halted parsing, present only when the expression is invalid.
    pub error: Option<ParseError>,
}

impl SyntaxAnalysis {
    /// The derivation steps as display lines, e.g. `Factor: Created factorial expression`.
    pub fn step_lines(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}

/// Parses the given tokens into an abstract syntax tree, logging each grammar rule as it is
/// recognized.
///
/// Parsing never fails: a syntax error is reported through the returned analysis, with the
/// error message as the final derivation step and a placeholder `Error` tree.
///
/// # Arguments
///
/// * `tokens`: The tokens to parse, in scan order.
///
/// returns: The validity verdict, the derivation steps and the tree to display.
///
/// # Examples
///
/// ```
/// use expression_analyzer::analyzer::lexer::tokenize;
/// use expression_analyzer::analyzer::parser::parse;
///
/// let tokens = tokenize("2+3*4").unwrap();
/// let analysis = parse(&tokens);
/// assert!(analysis.valid);
/// assert_eq!(analysis.tree.name, "+");
/// ```
pub fn parse(tokens: &[Token]) -> SyntaxAnalysis {
    let mut parser = Parser::new(tokens);
    let outcome = parser.parse_all();
    let mut steps = parser.into_steps();

    match outcome {
        Ok(ast) => {
            debug!("Parsed {} tokens into {} nodes", tokens.len(), ast.size());
            steps.push(DerivationStep::new(Stage::Complete, "Expression is valid"));
            SyntaxAnalysis {
                valid: true,
                steps,
                tree: RenderTree::from(&ast),
                ast: Some(ast),
                error: None,
            }
        }
        Err(error) => {
            debug!("Parsing failed after {} steps: {}", steps.len(), error);
            steps.push(DerivationStep::new(Stage::Error, error.to_string()));
            SyntaxAnalysis {
                valid: false,
                steps,
                tree: RenderTree::error(),
                ast: None,
                error: Some(error),
            }
        }
    }
}
