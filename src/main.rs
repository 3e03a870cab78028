use std::io::{self, BufRead};

use clap::Parser as ClapParser;
use log::LevelFilter;
use pratt_calc::Parser;

/// pratt-calc evaluates arithmetic expressions with constants, functions and
/// implicit multiplication.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Logs every pipeline stage at debug level, regardless of `RUST_LOG`.
    #[arg(short, long)]
    verbose: bool,

    /// Reads commands from stdin even when an expression is given.
    ///
    /// `-quit` exits, `-eval` evaluates the following line, any other line is
    /// evaluated directly.
    #[arg(short, long)]
    repl: bool,

    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        pretty_env_logger::formatted_builder().filter_level(LevelFilter::Debug)
                                              .init();
    } else {
        pretty_env_logger::init();
    }

    let parser = Parser::<pratt_calc::numeric::DefaultTraits>::new();

    if let Some(expression) = &args.expression {
        report(&parser, expression);
        if !args.repl {
            return;
        }
    }

    let mut lines = io::stdin().lock().lines().map_while(Result::ok);
    while let Some(line) = lines.next() {
        match line.trim() {
            "-quit" => break,
            "-eval" => match lines.next() {
                Some(expression) => report(&parser, &expression),
                None => break,
            },
            "" => {},
            expression => report(&parser, expression),
        }
    }
}

fn report(parser: &Parser, expression: &str) {
    match parser.evaluate(expression) {
        Ok(value) => println!("Result: {value}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
