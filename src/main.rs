use std::{
    fs,
    io::{self, BufRead},
};

use clap::Parser;
use krunch::{
    ast::Expr,
    interpreter::evaluator::core::{Evaluator, MAX_EVALUATION_STEPS},
    parse,
};
use log::{debug, error};

/// krunch is a small integer calculator: `+ - * /`, parentheses and builtins
/// such as `sqrt`, `pow`, `gcf` or `isPrime`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells krunch to read expressions from a file, one per line, instead of
    /// taking a single expression. Blank lines in the file are skipped.
    #[arg(short, long)]
    file: bool,

    /// Maximum number of reduction steps before evaluation gives up.
    #[arg(short, long, default_value_t = MAX_EVALUATION_STEPS)]
    max_steps: usize,

    /// Prints the parsed expression tree before each result.
    #[arg(short, long)]
    tree: bool,

    /// The expression (or file path with `--file`). Expressions are read
    /// from standard input when omitted.
    contents: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let evaluator = Evaluator::default().with_max_steps(args.max_steps);

    match &args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            for line in script_lines(&script) {
                evaluate(&evaluator, line, args.tree);
            }
        },
        Some(expression) => evaluate(&evaluator, expression, args.tree),
        None => {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => evaluate(&evaluator, &line, args.tree),
                    Err(e) => {
                        error!("stopped reading standard input: {e}");
                        break;
                    },
                }
            }
        },
    }
}

/// Expressions in a `--file` script. Blank lines are skipped.
fn script_lines(script: &str) -> impl Iterator<Item = &str> {
    script.lines().filter(|line| !line.is_empty())
}

/// Parses and evaluates one expression, printing the tree first if asked.
fn evaluate(evaluator: &Evaluator, source: &str, print_tree: bool) {
    let tree = parse(source);
    if print_tree {
        println!("{tree}");
    }

    debug!("evaluating '{source}'");
    println!("{}", render(evaluator, tree));
}

/// The text shown for an evaluated tree: its outcome or the fatal error.
fn render(evaluator: &Evaluator, tree: Expr) -> String {
    match evaluator.run(tree) {
        Ok(outcome) => outcome.to_string(),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_expression_is_reported_not_skipped() {
        assert_eq!(render(&Evaluator::default(), parse("")),
                   "Error(Syntax error: empty expression.)");
    }

    #[test]
    fn scripts_skip_blank_lines_only() {
        let lines = script_lines("1+1\n\nfoo(1)\n").collect::<Vec<_>>();
        assert_eq!(lines, ["1+1", "foo(1)"]);
    }

    #[test]
    fn fatal_errors_are_rendered_as_text() {
        assert_eq!(render(&Evaluator::default(), parse("pow(2)")),
                   "Arity error: pow() expects 2 argument(s), got 1.");
    }
}
