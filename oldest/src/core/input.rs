//! Parsing of the three ages from raw input text.

use thiserror::Error;

use crate::core::person::ROSTER_SIZE;

/// Malformed input. Every variant maps to the `INVALID` exit code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected {expected} ages, found {found}", expected = ROSTER_SIZE)]
    WrongCount { found: usize },
    #[error("token {position} is not an integer: {token:?}")]
    NotAnInteger { position: usize, token: String },
}

/// Parse exactly three whitespace-separated integers.
///
/// Tokens are checked in order, so the first malformed token is reported
/// unless the count is already exceeded before it.
pub fn parse_ages(text: &str) -> Result<[i64; ROSTER_SIZE], InputError> {
    let mut ages = [0i64; ROSTER_SIZE];
    let mut found = 0;
    for (index, token) in text.split_ascii_whitespace().enumerate() {
        if index >= ROSTER_SIZE {
            return Err(InputError::WrongCount {
                found: text.split_ascii_whitespace().count(),
            });
        }
        ages[index] = token.parse().map_err(|_| InputError::NotAnInteger {
            position: index + 1,
            token: token.to_string(),
        })?;
        found += 1;
    }
    if found != ROSTER_SIZE {
        return Err(InputError::WrongCount { found });
    }
    Ok(ages)
}
