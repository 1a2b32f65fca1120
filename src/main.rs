use std::{fs, io, process};

use clap::Parser;
use simplelang::{
    error::Diagnostic,
    interpreter::{evaluator::core::Evaluator, lexer, parser::core::parse_program},
};

/// simplelang is a small, statically-typed teaching language with numbers,
/// text, booleans, conditionals, counted loops and procedures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script to execute.
    file: String,

    /// Print a banner for each pipeline phase on standard error.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               &args.file);
                     process::exit(1);
                 });

    if let Err(e) = run(&source, args.verbose) {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Drives the pipeline stage by stage so the phase banners can report on
/// each artifact before the next stage consumes it.
fn run(source: &str, verbose: bool) -> Result<(), Diagnostic> {
    if verbose {
        eprintln!("Scanning...");
    }
    let tokens = lexer::scan(source)?;

    if verbose {
        eprintln!("Scanned {} tokens.", tokens.len());
        eprintln!("Parsing...");
    }
    let program = parse_program(&tokens)?;

    if verbose {
        eprintln!("Parsed {} statements.", program.statements.len());
        eprintln!("Executing...");
    }
    let stdout = io::stdout();
    let mut evaluator = Evaluator::new(stdout.lock());
    evaluator.run(&program)?;

    Ok(())
}
