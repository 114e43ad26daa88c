use crate::config::Config;
use crate::error::Error;
use crate::fixture::comparison_cases;
use crate::interpreter::Interpreter;
use crate::parser::parse;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Describe an error, with the offending source line highlighted when it has a location.
pub fn describe(error: &Error, program: &str) -> String {
    match error.src() {
        Some(src) => format!(
            "{error} at {}\n{}",
            src.location(program),
            src.highlight(program)
        ),
        None => error.to_string(),
    }
}

/// Run the given data as a comparison script, printing the outcome of each comparison.
fn run(interpreter: &mut Interpreter, program: &str) -> crate::error::Result<()> {
    let parsed = parse(program)?;
    for comparison in &parsed.comparisons {
        println!("{}", interpreter.comparison(comparison)?);
    }
    Ok(())
}

/// Evaluate a script given as a string.
pub fn eval(program: &str, config: Config) -> anyhow::Result<()> {
    let mut interpreter = Interpreter::new(config);
    run(&mut interpreter, program).map_err(|e| anyhow::anyhow!(describe(&e, program)))
}

/// Run a REPL until EOF. Errors are reported and do not end the session.
pub fn repl(config: Config) -> anyhow::Result<()> {
    let mut interpreter = Interpreter::new(config);
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        if let Err(e) = run(&mut interpreter, &line) {
            eprintln!("{}", describe(&e, &line));
        }
    }

    Ok(())
}

/// Run a comparison script from a file.
pub fn file(filename: impl AsRef<Path>, config: Config) -> anyhow::Result<()> {
    let filename = filename.as_ref();
    let program = fs::read_to_string(filename)?;
    let mut interpreter = Interpreter::new(config);
    run(&mut interpreter, &program)
        .map_err(|e| anyhow::anyhow!("{}: {}", filename.display(), describe(&e, &program)))
}

/// Check every case in the reference table, failing if any does not hold.
pub fn cases(config: Config, verbose: bool) -> anyhow::Result<()> {
    let mut interpreter = Interpreter::new(config);
    let cases = comparison_cases();
    let mut failed = 0;
    for case in &cases {
        match case.verify(&mut interpreter) {
            Ok(()) if verbose => println!("ok {}: {}", case.name, case.input),
            Ok(()) => {}
            Err(mismatch) => {
                failed += 1;
                eprintln!("FAILED {mismatch}");
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} cases failed", cases.len());
    }
    println!("{} cases passed", cases.len());
    Ok(())
}
