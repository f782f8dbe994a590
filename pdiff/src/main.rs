mod config;
mod error;
mod input;

use config::{Args, Config, USAGE};
use error::{Error, MissingInput, WrongArgumentCount};
use input::parse_point;
use log::{debug, error};
use pdiff_compute::{Analysis, Formula};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, IsTerminal, Read}, process::ExitCode};

/// The banner and instructions printed when running interactively.
const BANNER: &str = "\
===========================================
    PARTIAL DERIVATIVE CALCULATOR
===========================================

Instructions:
- Use 'x' and 'y' as variables.
- Operators: +, -, *, /, ^ (power).
- Functions: sin, cos, exp, log, sqrt.
- Example: sqrt(x^2 + y^2)
";

/// Formats the value of a formula at a point and its partial derivatives there.
fn format_results((x, y): (f64, f64), analysis: &Analysis, precision: usize) -> String {
    format!(
        "f({:.2}, {:.2}) = {:.*}\n∂f/∂x = {:.*}\n∂f/∂y = {:.*}",
        x,
        y,
        precision,
        analysis.value,
        precision,
        analysis.dx,
        precision,
        analysis.dy,
    )
}

/// Reports the error to stderr, against the given formula if the error is in the formula.
fn report(err: &Error, formula: &str) {
    if let Err(io_err) = err.report_to_stderr(formula) {
        error!("failed to write error report: {}", io_err);
    }
}

/// Lexes the formula, reads the point, then evaluates the formula and its gradient there.
fn analyze(formula: &str, point: &str, config: &Config) -> Result<String, Error> {
    let formula = Formula::new(formula)?;
    let point = parse_point(point)?;
    let analysis = formula.analyze(point.0, point.1, config.step)?;
    debug!("analyzed {:?} at {:?}: {:?}", formula.source(), point, analysis);
    Ok(format_results(point, &analysis, config.precision))
}

/// Runs a single analysis, printing the results or reporting the failure.
fn run_once(formula: &str, point: &str, config: &Config) -> ExitCode {
    match analyze(formula, point, config) {
        Ok(results) => {
            println!("{}", results);
            ExitCode::SUCCESS
        },
        Err(err) => {
            report(&err, formula);
            ExitCode::FAILURE
        },
    }
}

/// Reads the formula from the first line of stdin, and the point from the second line.
fn run_piped(config: &Config) -> ExitCode {
    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        error!("failed to read stdin: {}", err);
        return ExitCode::FAILURE;
    }

    let mut lines = input.lines();
    let missing = |what: &'static str| Error::input("stdin", "", pdiff_error::Error::new(Vec::new(), MissingInput { what }));
    let Some(formula) = lines.next() else {
        report(&missing("the formula"), "");
        return ExitCode::FAILURE;
    };
    let Some(point) = lines.next() else {
        report(&missing("the point"), formula);
        return ExitCode::FAILURE;
    };

    run_once(formula, point, config)
}

/// Prompts for a formula and a point, then prints the results. Errors in the input are reported,
/// and only errors from the editor itself are returned.
fn process_line(rl: &mut DefaultEditor, config: &Config) -> Result<(), ReadlineError> {
    let source = rl.readline("Enter the function f(x, y): ")?;
    if source.trim().is_empty() {
        return Ok(());
    }
    rl.add_history_entry(&source)?;

    let formula = match Formula::new(source.as_str()) {
        Ok(formula) => formula,
        Err(err) => {
            report(&err.into(), &source);
            return Ok(());
        },
    };

    let point = rl.readline("Enter the point (x y): ")?;
    let results = parse_point(&point)
        .and_then(|(x, y)| {
            let analysis = formula.analyze(x, y, config.step)?;
            Ok(format_results((x, y), &analysis, config.precision))
        });

    match results {
        Ok(results) => println!("\nResults:\n{}\n", results),
        Err(err) => report(&err, &source),
    }

    Ok(())
}

/// Runs the interactive mode until the user presses Ctrl-C or Ctrl-D.
fn run_interactive(config: &Config) -> ExitCode {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            error!("failed to start the line editor: {}", err);
            return ExitCode::FAILURE;
        },
    };

    println!("{}", BANNER);
    loop {
        if let Err(err) = process_line(&mut rl, config) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => ExitCode::SUCCESS,
                _ => {
                    eprintln!("{}", err);
                    ExitCode::FAILURE
                },
            };
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let (config, positional) = match config::parse_args(std::env::args().skip(1)) {
        Ok(Args::Help) => {
            print!("{}", USAGE);
            return ExitCode::SUCCESS;
        },
        Ok(Args::Run { config, positional }) => (config, positional),
        Err(err) => {
            report(&err, "");
            return ExitCode::FAILURE;
        },
    };
    debug!("running with {:?}", config);

    match positional.as_slice() {
        [formula, x, y] => run_once(formula, &format!("{} {}", x, y), &config),
        [] if !io::stdin().is_terminal() => run_piped(&config),
        [] => run_interactive(&config),
        args => {
            let err = Error::input(
                "arguments",
                "",
                pdiff_error::Error::new(Vec::new(), WrongArgumentCount { given: args.len() }),
            );
            report(&err, "");
            ExitCode::FAILURE
        },
    }
}
