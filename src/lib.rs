use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::iter;

use structopt::clap::AppSettings;
use structopt::StructOpt;
use tracing::debug;

pub mod error;
pub mod grow;
pub mod tomato;

pub use crate::error::Error;
pub use crate::grow::{EnvConditions, FixedConditions, GrowingConditions};

/// Environment variable holding the log filter for the binary
pub const LOG_ENV: &'static str = "POMODORO_LOG";

/**
 * Terminal argument settings
 */
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pomodoro",
    about = "tells you which tomatoes your garden can grow",
    raw(global_settings = "&[AppSettings::DisableHelpFlags, AppSettings::DisableVersion]")
)]
/// Pass the name of a tomato and pomodoro will tell you if it grows.
/// Growing conditions are read from GROW_WATER, GROW_SOIL and GROW_SEED.
pub struct PomodoroConfig {
    #[structopt(name = "TOMATO", parse(from_os_str))]
    /// Tomato variety, e.g. "san marzano"
    tomatoes: Vec<OsString>,
}

impl PomodoroConfig {
    /// Parses a full argument list, program name included.
    ///
    /// Every token after the program name is a tomato, even `--` or one
    /// that looks like a flag.
    pub fn from_args_safe<I>(args: I) -> Result<PomodoroConfig, Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let program = args.next().unwrap_or_else(|| OsString::from("pomodoro"));
        let argv = iter::once(program)
            .chain(iter::once(OsString::from("--")))
            .chain(args);

        PomodoroConfig::from_iter_safe(argv).map_err(|err| {
            debug!(kind = ?err.kind, "could not parse arguments: {}", err.message);
            Error::Usage
        })
    }

    /// The one tomato we were asked about
    pub fn tomato(&self) -> Result<&OsStr, Error> {
        match self.tomatoes.as_slice() {
            [tomato] => Ok(tomato.as_os_str()),
            _ => {
                debug!(count = self.tomatoes.len(), "expected exactly one arg");
                Err(Error::Usage)
            }
        }
    }
}

/// Looks up a variety by name and evaluates it against the conditions.
pub fn evaluate(name: &str, conditions: &dyn GrowingConditions) -> Result<&'static str, Error> {
    let evaluator = match tomato::lookup(name) {
        Some(evaluator) => evaluator,
        None => {
            debug!(name, known = ?tomato::names(), "no such tomato");
            return Err(Error::UnknownTomato(name.to_string()));
        }
    };

    let result = evaluator(conditions);
    debug!(name, result, "evaluated tomato");
    Ok(result)
}

/// Evaluates the configured tomato and writes the result, one line, to `out`.
pub fn run<W: Write>(
    config: &PomodoroConfig,
    conditions: &dyn GrowingConditions,
    out: &mut W,
) -> Result<(), Error> {
    // Names that aren't UTF-8 can't match a variety, lossy is fine here
    let name = config.tomato()?.to_string_lossy();
    let result = evaluate(&name, conditions)?;

    writeln!(out, "{}", result)?;
    out.flush()?;

    Ok(())
}
