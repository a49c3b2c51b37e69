use std::{fs, process::ExitCode};

use clap::Parser;
use letlang::interpreter::{evaluator::core::Evaluator, lexer::scan, parser::core::parse};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LET_LOG=debug`.
const LOG_ENV: &str = "LET_LOG";

/// letlang evaluates a single LET expression: integers, `minus`, `iszero`,
/// `if` and `let`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells letlang to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the token queue before parsing.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the syntax tree before evaluation and again, with environments,
    /// after it.
    #[arg(long)]
    tree: bool,

    /// Logs each pipeline stage to stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();
}

fn section(title: &str) {
    println!();
    println!("{title}");
    println!("-------------------------------------------------------------------------");
    println!();
}

fn main() -> ExitCode {
    let Args { file,
               tokens: show_tokens,
               tree: show_tree,
               verbose,
               contents, } = Args::parse();
    init_logging(verbose);

    let script = if file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };
    debug!(bytes = script.len(), from_file = file, "loaded program");

    let tokens = scan(&script);
    if show_tokens {
        section("Token Queue:");
        for token in &tokens {
            println!("{token}");
        }
    }

    let mut tree = match parse(&tokens) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };
    if show_tree {
        section("Abstract Syntax Tree Without Environments");
        println!("{tree}");
    }

    let value = match Evaluator::new(&mut tree).evaluate() {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };
    info!(tokens = tokens.len(), nodes = tree.len(), %value, "program evaluated");

    if show_tree {
        section("Evaluation");
        println!("Expression evaluated to: {value}");
        section("Abstract Syntax Tree With Environments");
        println!("{tree}");
    } else {
        println!("{value}");
    }

    ExitCode::SUCCESS
}
