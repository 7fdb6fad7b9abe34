use bogus::{builtin_functions::default_scope, config::Config, init_tracing, interpret_with, Error};
use bogus_eval::Interpreter;
use bogus_source::{Source, SyntaxError};
use bogus_value::Scope;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// Prints `err` with the line and column it points at in `content`.
fn report(content: &str, err: &Error) {
    match err.span() {
        Some(span) => {
            let source: Source = content.into();
            source.errors.add_error(SyntaxError::new(err, span));
            eprint!("{}", source.diagnostics());
        }
        None => eprintln!("ERROR: {}", err),
    }
}

fn run_file(path: &Path, interpreter: &mut Interpreter) -> io::Result<bool> {
    let content = std::fs::read_to_string(path)?;
    let scope = default_scope();

    match interpret_with(&content, &scope, interpreter) {
        Ok(value) => {
            if !value.is_void() {
                println!("{}", value);
            }
            Ok(true)
        }
        Err(err) => {
            report(&content, &err);
            Ok(false)
        }
    }
}

fn repl(scope: &Scope, interpreter: &mut Interpreter) -> io::Result<()> {
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            // EOF
            println!();
            return Ok(());
        }
        if input.trim().is_empty() {
            continue;
        }

        match interpret_with(&input, scope, interpreter) {
            Ok(value) if value.is_void() => {}
            Ok(value) => println!("{}", value),
            Err(err) => report(&input, &err),
        }
    }
}

fn main() -> io::Result<()> {
    init_tracing();

    let config = Config::from_env();
    tracing::debug!(?config, "starting");
    let mut interpreter = Interpreter::new(config.eval);

    match &config.script {
        Some(path) => {
            if !run_file(path, &mut interpreter)? {
                process::exit(1);
            }
            Ok(())
        }
        None => repl(&default_scope(), &mut interpreter),
    }
}
