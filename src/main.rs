use std::process::ExitCode;

use bigdecimal::BigDecimal;
use clap::Parser;
use mathfn::{
    interpreter::{evaluator::core::Options, lexer::tokenize, parser::core::parse_expr},
    util::num::{DIVISION_SCALE, parse_decimal},
};

/// mathfn compiles an arithmetic expression and evaluates it once.
///
/// Variables are bound in the order they first appear in the expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Fractional digits kept by division.
    #[arg(short, long, default_value_t = DIVISION_SCALE)]
    scale: i64,

    /// Print the tokens before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed tree before evaluating.
    #[arg(long)]
    tree: bool,

    /// The expression, e.g. "x*y+z".
    expression: String,

    /// Values for the variables, in order of first appearance.
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
}

fn run(args: &Args) -> Result<BigDecimal, Box<dyn std::error::Error>> {
    let inputs = args.values
                     .iter()
                     .map(|v| parse_decimal(&v.replace(',', ".")).ok_or_else(|| format!("Invalid value '{v}'.")))
                     .collect::<Result<Vec<_>, _>>()?;

    let tokens = tokenize(&args.expression)?;
    if args.tokens {
        for token in &tokens {
            println!("{token}");
        }
    }

    let expr = parse_expr(&tokens)?;
    if args.tree {
        println!("{expr}");
    }

    let function = expr.lower_with(Options { division_scale: args.scale });
    Ok(function.evaluate(&inputs)?)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
