//! Prompt-per-value console input for the driver.
//!
//! Reads, in order: slots in the room, blue workers, green workers.
//! Capacity validation itself belongs to the coordinator; this layer
//! only turns lines into counts.

use std::io::{BufRead, Write};

use crate::config::SimConfig;

/// Errors raised while reading simulation input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before all values were supplied.
    #[error("input ended before a value for {0} was supplied")]
    MissingValue(&'static str),

    /// A value could not be parsed as a non-negative count.
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue {
        field: &'static str,
        value: String,
    },
}

/// Reads the room size and per-group worker counts, prompting on `out`.
pub fn read_config(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<SimConfig, InputError> {
    let capacity = prompt_count(input, out, "slots in the fitting room")?;
    let blue_workers = prompt_count(input, out, "blue workers")?;
    let green_workers = prompt_count(input, out, "green workers")?;
    Ok(SimConfig {
        capacity,
        blue_workers,
        green_workers,
        ..SimConfig::default()
    })
}

fn prompt_count(
    input: &mut impl BufRead,
    out: &mut impl Write,
    field: &'static str,
) -> Result<usize, InputError> {
    write!(out, "Enter the number of {field}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::MissingValue(field));
    }
    let value = line.trim();
    value.parse().map_err(|_| InputError::InvalidValue {
        field,
        value: value.to_string(),
    })
}
