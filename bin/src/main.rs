use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
    println,
};

use anyhow::anyhow;
use clap::Parser;

use errors::{ErrorReporter, LoxErrors};
use parser::AstPrinter;
use scanner::Scanner;

#[derive(clap::Parser)]
struct Args {
    file: Option<PathBuf>,
}

fn run_file(path: PathBuf) -> anyhow::Result<()> {
    run(&std::fs::read_to_string(path)?).map_err(|e| anyhow!("{e}"))
}

fn run_prompt() -> anyhow::Result<()> {
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        match run(&line) {
            Ok(()) => (),
            Err(e) => println!("{}", e),
        }
    }
}

fn run(source: &str) -> Result<(), LoxErrors> {
    let mut reporter = ErrorReporter::new();
    let tokens = Scanner::new(source).scan_tokens(&mut reporter);
    log::debug!("scanned {} tokens", tokens.len());

    let expr = match parser::Parser::new(tokens).parse() {
        Ok(expr) => Some(expr),
        Err(e) => {
            reporter.report(e.into());
            None
        }
    };

    // No tree gets printed for input that produced any diagnostic, even when
    // the parser built one from the tokens that survived scanning.
    if reporter.had_error() {
        return Err(reporter.into_errors());
    }
    if let Some(expr) = expr {
        println!("{}", AstPrinter.print(&expr));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.file {
        Some(file) => run_file(file),
        None => run_prompt(),
    }
}
