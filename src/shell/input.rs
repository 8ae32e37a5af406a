//! Validated input helpers
//!
//! Each `read_*` function prompts until it gets an acceptable value. Bad
//! input and read failures are reported and re-prompted; only closed input
//! (`Ok(None)`) ends the loop without a value.

use super::terminal::Terminal;
use crate::model::bounded_name;
use std::io;

/// Rejected user input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("value must be between {min} and {max}")]
    OutOfRange { min: String, max: String },

    #[error("input must not be empty")]
    Empty,

    #[error("input must not contain NUL characters")]
    Nul,
}

/// A bounded string and whether it had to be shortened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounded {
    pub value: String,
    pub truncated: bool,
}

/// Parse a whole number in `min..=max`
pub fn parse_int_in_range(input: &str, min: usize, max: usize) -> Result<usize, InputError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    usize::try_from(value)
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or_else(|| InputError::OutOfRange {
            min: min.to_string(),
            max: max.to_string(),
        })
}

/// Parse a decimal number in `min..=max`
pub fn parse_float_in_range(input: &str, min: f32, max: f32) -> Result<f32, InputError> {
    let trimmed = input.trim();
    let value: f32 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    // NaN fails the range check as well
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            min: min.to_string(),
            max: max.to_string(),
        })
    }
}

/// Bound a non-blank string to the name length limit
///
/// The text is kept as typed apart from its line ending. NUL is rejected
/// because it terminates the stored field.
pub fn parse_bounded(input: &str) -> Result<Bounded, InputError> {
    let line = input.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Err(InputError::Empty);
    }
    if line.contains('\0') {
        return Err(InputError::Nul);
    }

    let value = bounded_name(line);
    Ok(Bounded {
        value: value.to_string(),
        truncated: value.len() < line.len(),
    })
}

/// Whether an answer confirms a yes/no question
///
/// Only the first non-blank character counts, case-insensitively.
pub fn is_confirmation(input: &str) -> bool {
    input
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Prompt until `parse` accepts a line
fn read_validated<T, V, F>(term: &mut T, prompt: &str, parse: F) -> io::Result<Option<V>>
where
    T: Terminal + ?Sized,
    F: Fn(&str) -> Result<V, InputError>,
{
    loop {
        term.prompt(prompt)?;

        let line = match term.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => return Ok(None),
            Err(e) => {
                log::warn!("Failed to read input: {}", e);
                term.error("Invalid input! Please try again.")?;
                continue;
            }
        };

        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line, e);
                term.error(&format!("Invalid input ({})! Please try again.", e))?;
            }
        }
    }
}

/// Read a whole number in `min..=max`
pub fn read_int<T: Terminal + ?Sized>(
    term: &mut T,
    prompt: &str,
    min: usize,
    max: usize,
) -> io::Result<Option<usize>> {
    read_validated(term, prompt, |line| parse_int_in_range(line, min, max))
}

/// Read a decimal number in `min..=max`
pub fn read_float<T: Terminal + ?Sized>(
    term: &mut T,
    prompt: &str,
    min: f32,
    max: f32,
) -> io::Result<Option<f32>> {
    read_validated(term, prompt, |line| parse_float_in_range(line, min, max))
}

/// Read a non-empty name, truncating (with a warning) past the length limit
pub fn read_bounded_string<T: Terminal + ?Sized>(
    term: &mut T,
    prompt: &str,
) -> io::Result<Option<String>> {
    let Some(bounded) = read_validated(term, prompt, parse_bounded)? else {
        return Ok(None);
    };

    if bounded.truncated {
        term.warning(&format!("Name truncated to \"{}\".", bounded.value))?;
    }
    Ok(Some(bounded.value))
}

/// Ask a yes/no question
///
/// A read failure counts as "no".
pub fn read_confirmation<T: Terminal + ?Sized>(
    term: &mut T,
    prompt: &str,
) -> io::Result<Option<bool>> {
    term.prompt(prompt)?;
    match term.read_line() {
        Ok(Some(line)) => Ok(Some(is_confirmation(&line))),
        Ok(None) => Ok(None),
        Err(e) => {
            log::warn!("Failed to read confirmation: {}", e);
            Ok(Some(false))
        }
    }
}
