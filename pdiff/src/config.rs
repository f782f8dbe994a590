use log::trace;
use pdiff_compute::DEFAULT_STEP;
use super::error::{Error, InvalidOptionValue, MissingOptionValue, UnknownOption};

/// The usage message printed by `--help`.
pub const USAGE: &str = "\
Evaluate a formula in x and y, and estimate its partial derivatives at a point.

Usage: pdiff [OPTIONS] <FORMULA> <X> <Y>
       pdiff [OPTIONS]                   (read the formula and point from stdin, or prompt for them)

Options:
  -s, --step <H>        step size of the finite differences [default: 1e-4]
  -p, --precision <N>   number of decimal places to print [default: 6]
  -h, --help            print this message

Set RUST_LOG=debug to log every evaluation.
";

/// Options that control how formulas are differentiated and how results are printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// The step size of the finite differences.
    pub step: f64,

    /// The number of decimal places used to print values.
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            precision: 6,
        }
    }
}

/// What the command line asks the program to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Args {
    /// Print the usage message.
    Help,

    /// Evaluate formulas with the given configuration. The positional arguments are the formula
    /// and the point, if they were given.
    Run {
        config: Config,
        positional: Vec<String>,
    },
}

/// The options that take a value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ValueOption {
    Step,
    Precision,
}

impl ValueOption {
    /// Returns the option with the given name, if it is one.
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "-s" | "--step" => Some(Self::Step),
            "-p" | "--precision" => Some(Self::Precision),
            _ => None,
        }
    }

    /// Returns an example of a valid value for this option.
    fn example(self) -> &'static str {
        match self {
            Self::Step => "1e-6",
            Self::Precision => "10",
        }
    }

    /// Parses the value of this option into the configuration.
    fn apply(self, value: &str, config: &mut Config) -> Result<(), Error> {
        let invalid = |option: &'static str, expected: &'static str| Error::input(
            "argument",
            value,
            pdiff_error::Error::new(vec![0..value.len()], InvalidOptionValue { option, expected }),
        );

        match self {
            Self::Step => {
                config.step = value
                    .parse::<f64>()
                    .ok()
                    .filter(|step| step.is_finite() && *step > 0.0)
                    .ok_or_else(|| invalid("--step", "a finite number greater than zero"))?;
            },
            Self::Precision => {
                config.precision = value
                    .parse()
                    .map_err(|_| invalid("--precision", "a non-negative integer"))?;
            },
        }

        Ok(())
    }
}

/// Parses the command-line arguments, not including the program name.
///
/// A `-` followed by anything other than a known option is a positional argument, so negative
/// coordinates and formulas such as `-x^2` can be given directly. Everything after `--` is
/// positional.
pub fn parse_args<I>(args: I) -> Result<Args, Error>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut positional = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--" {
            positional.extend(args.by_ref());
            break;
        }

        if arg == "-h" || arg == "--help" {
            return Ok(Args::Help);
        }

        let (name, inline_value) = match arg.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value.to_owned())),
            _ => (arg.as_str(), None),
        };

        if let Some(option) = ValueOption::from_name(name) {
            let Some(value) = inline_value.or_else(|| args.next()) else {
                return Err(Error::input(
                    "argument",
                    arg.clone(),
                    pdiff_error::Error::new(vec![0..arg.len()], MissingOptionValue {
                        option: arg.clone(),
                        example: option.example(),
                    }),
                ));
            };
            option.apply(&value, &mut config)?;
        } else if name.starts_with("--") {
            return Err(Error::input(
                "argument",
                arg.clone(),
                pdiff_error::Error::new(vec![0..arg.len()], UnknownOption { option: arg.clone() }),
            ));
        } else {
            positional.push(arg);
        }
    }

    trace!("parsed arguments: {:?}, positional: {:?}", config, positional);
    Ok(Args::Run { config, positional })
}
