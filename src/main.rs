use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use clap::Parser;
use decicalc::{
    evaluate_line_with,
    interpreter::{
        builder::build,
        evaluator::core::{Context, DIVISION_SCALE, MAX_DIGITS, MAX_EXPONENT},
        parser::core::parse,
    },
};
use tracing_subscriber::EnvFilter;

/// decicalc evaluates arithmetic expressions with exact decimal arithmetic and
/// prints the result with grouped digits.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate once. Without one, lines are read from stdin
    /// until end of input.
    expression: Vec<String>,

    /// Minimum number of significant fractional digits kept by a division
    /// that does not terminate.
    #[arg(short, long, default_value_t = DIVISION_SCALE)]
    precision: u32,

    /// Largest accepted exponent magnitude for `**`.
    #[arg(long, default_value_t = MAX_EXPONENT)]
    max_exponent: u32,

    /// Largest number of digits a product or power may produce.
    #[arg(long, default_value_t = MAX_DIGITS)]
    max_digits: u64,

    /// Print the parse tree before each result.
    #[arg(long)]
    show_tree: bool,

    /// Print the fully parenthesized syntax tree before each result.
    #[arg(long)]
    show_ast: bool,

    /// Log more detail to stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Evaluates one line, printing the result to stdout or the diagnostic to
/// stderr. Returns whether evaluation succeeded.
fn run_line(args: &Args, context: &Context, line: &str) -> bool {
    if (args.show_tree || args.show_ast)
       && let Ok(tree) = parse(line)
    {
        if args.show_tree {
            println!("tree: {tree}");
        }
        if args.show_ast {
            println!("ast:  {}", build(tree));
        }
    }

    match evaluate_line_with(context, line) {
        Ok(result) => {
            println!("{result}");
            true
        },
        Err(diagnostic) => {
            eprintln!("{diagnostic}");
            false
        },
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let context = Context::new().with_division_scale(args.precision)
                                .with_max_exponent(args.max_exponent)
                                .with_max_digits(args.max_digits);

    if !args.expression.is_empty() {
        let line = args.expression.join(" ");
        return if run_line(&args, &context, &line) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("> ");
            if let Err(e) = io::stdout().flush() {
                eprintln!("Failed to write the prompt: {e}");
                return ExitCode::FAILURE;
            }
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read from stdin: {e}");
                return ExitCode::FAILURE;
            },
            None => break,
        };

        if line.trim().is_empty() {
            continue;
        }
        run_line(&args, &context, &line);
    }

    if interactive {
        println!();
    }
    ExitCode::SUCCESS
}
