//! Input validation: prompt until the console yields acceptable text
//!
//! Rejected input is answered with a message and the same prompt again, with no
//! retry limit. Only an exhausted input stream ends the loop with an error.

use tracing::{debug, instrument};

use crate::application::error::IoResultExt;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{parse_number, DomainError, Operator};
use crate::infrastructure::Console;

/// Answer to the continue prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Stop,
}

/// Prompt until the user enters a numeric literal.
#[instrument(level = "debug", skip(console))]
pub fn request_number<C: Console + ?Sized>(console: &mut C, prompt: &str) -> ApplicationResult<f64> {
    request_with(console, prompt, parse_number)
}

/// Prompt until the user enters one of the supported operators.
#[instrument(level = "debug", skip(console))]
pub fn request_operator<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> ApplicationResult<Operator> {
    request_with(console, prompt, str::parse::<Operator>)
}

/// Ask whether to go on. Only `no`, in any letter case, stops.
///
/// A closed input counts as an answer other than `no`.
#[instrument(level = "debug", skip(console))]
pub fn request_continue<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> ApplicationResult<Decision> {
    let answer = console.prompt(prompt).io_context("read answer")?;
    debug!("continue answer: {:?}", answer);
    match answer {
        Some(text) if text.to_lowercase() == "no" => Ok(Decision::Stop),
        _ => Ok(Decision::Continue),
    }
}

fn request_with<C, T, F>(console: &mut C, prompt: &str, parse: F) -> ApplicationResult<T>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T, DomainError>,
{
    loop {
        let Some(line) = console.prompt(prompt).io_context("read input")? else {
            return Err(ApplicationError::InputClosed {
                prompt: prompt.to_string(),
            });
        };
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(rejection) => {
                debug!("rejected input {:?}: {}", line, rejection);
                console
                    .warn(&rejection.to_string())
                    .io_context("print validation message")?;
            }
        }
    }
}
