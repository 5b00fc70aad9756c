use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_analyzer::analyzer::grammar::GRAMMAR;
use expression_analyzer::analyzer::{analyze, tokens_to_string, Analysis};
use log::info;

/// Analyzes the syntax of an arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to analyze
    #[clap(required_unless_present = "grammar")]
    expression: Option<String>,

    /// Print the grammar the expression is checked against
    #[clap(long)]
    grammar: bool,

    /// Print the token table
    #[clap(long)]
    tokens: bool,

    /// Print the derivation steps
    #[clap(long)]
    steps: bool,

    /// Print the syntax tree
    #[clap(long)]
    tree: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

impl Arguments {
    /// With no section selected, every section is printed.
    fn prints_all(&self) -> bool {
        !(self.tokens || self.steps || self.tree)
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if args.grammar {
        println!("{}", GRAMMAR);
    }

    let expression = match &args.expression {
        Some(expression) => expression,
        None => return Ok(()),
    };

    let analysis = analyze(expression).context("could not tokenize expression")?;
    info!(
        "Analyzed {:?} into {} tokens",
        expression,
        analysis.tokens.len()
    );

    print_analysis(&args, &analysis)?;

    if !analysis.syntax.valid {
        bail!("expression is not syntactically valid");
    }
    Ok(())
}

fn print_analysis(args: &Arguments, analysis: &Analysis) -> Result<()> {
    if args.prints_all() || args.tokens {
        println!("{}", tokens_to_string(&analysis.tokens)?);
        for (index, token) in analysis.tokens.iter().enumerate() {
            println!("{:>4}  {:<10} {}", index + 1, token.kind, token.text);
        }
        println!();
    }

    if args.prints_all() {
        if analysis.syntax.valid {
            println!("Expression is syntactically valid");
        } else {
            println!("Expression is not syntactically valid");
        }
        println!();
    }

    if args.prints_all() || args.steps {
        for (index, step) in analysis.syntax.steps.iter().enumerate() {
            println!("{:>4}  {:<18} {}", index + 1, step.stage, step.description);
        }
        println!();
    }

    if args.prints_all() || args.tree {
        ptree::print_tree(&analysis.syntax.tree).context("could not print syntax tree")?;
    }

    Ok(())
}
