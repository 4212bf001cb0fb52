use std::fs;

use clap::Parser;
use tortuga::{
    interpreter::{
        evaluator::{eval, is_constant},
        graphviz, printer,
    },
    parse, parse_expression,
};

/// tortuga parses a LOGO-like scripting language and renders the resulting
/// syntax tree as a Graphviz graph or a structural dump.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tortuga to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the syntax tree as an indented structural dump instead of a
    /// Graphviz graph.
    #[arg(short, long)]
    tree: bool,

    /// Treats the input as a single expression and prints its numeric value.
    #[arg(short, long)]
    eval: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.eval {
        match parse_expression(&script) {
            Ok(expr) => {
                if is_constant(&expr) {
                    println!("{}", eval(&expr));
                } else {
                    eprintln!("The expression does not reduce to a number.");
                }
            },
            Err(e) => eprintln!("{e}"),
        }
        return;
    }

    match parse(&script) {
        Ok(program) => {
            if args.tree {
                print!("{}", printer::dump(&program));
            } else {
                print!("{}", graphviz::render(&program));
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
