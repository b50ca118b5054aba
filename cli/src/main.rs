//! FILENAME: cli/src/main.rs
//! PURPOSE: Thin command-line front end for the sandboxed evaluator.
//! CONTEXT: Pure glue over `engine::safe_eval`. With arguments, the
//! arguments are joined into one expression and evaluated once. Without
//! arguments, an interactive read-evaluate-print loop starts. All
//! evaluation logic and all safety guarantees live in the engine; this
//! binary only moves strings in and prints results out.

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;

/// Safely evaluate arithmetic expressions.
///
/// Accepts numeric literals (42, 3.14, 2j), the operators + - * / // % **,
/// unary sign, and parentheses. Nothing else - names, calls, and strings
/// are rejected, which is the point.
#[derive(Parser)]
#[command(name = "safe-calc", version)]
struct Cli {
    /// Expression to evaluate; starts a REPL when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.expression.is_empty() {
        return repl();
    }

    // Arguments are joined so `safe-calc 1 + 2` and `safe-calc "1 + 2"`
    // behave the same way.
    let expression = cli.expression.join(" ");
    match engine::safe_eval(&expression) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Interactive loop: one expression per line, Ctrl-C or Ctrl-D to exit.
fn repl() -> ExitCode {
    println!("Safe calculator REPL. Press Ctrl-C or Ctrl-D to exit.");

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error: failed to initialize line editor: {}", e);
            return ExitCode::FAILURE;
        }
    };

    loop {
        match editor.readline("calc> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                match engine::safe_eval(&line) {
                    Ok(value) => println!("=> {}", value),
                    Err(e) => println!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Exiting.");
                break;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    ExitCode::SUCCESS
}
