//! Orchestration for the default command: read ages, report the oldest.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::finder::find_oldest;
use crate::core::input::{InputError, parse_ages};
use crate::core::person::{Person, roster};
use crate::io::input::read_input;

/// Find the oldest person described by `text`.
pub fn find_in_text(text: &str) -> Result<Person, InputError> {
    let ages = parse_ages(text)?;
    debug!(?ages, "parsed ages");
    let people = roster(ages);
    let oldest = *find_oldest(&people);
    debug!(name = oldest.name, age = oldest.age, "selected oldest");
    Ok(oldest)
}

/// Read all of `reader` and find the oldest person in it.
pub fn find_from_reader(reader: impl Read) -> Result<Person> {
    let text = read_input(reader)?;
    let person = find_in_text(&text).context("invalid input")?;
    Ok(person)
}

/// Render the result line printed on stdout.
pub fn render(person: &Person, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(person).context("serialize result");
    }
    Ok(person.name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_oldest_from_reader() {
        let person = find_from_reader("10\n25\n7\n".as_bytes()).expect("find");
        assert_eq!(
            person,
            Person {
                name: "Berto",
                age: 25
            }
        );
    }

    #[test]
    fn reader_errors_carry_input_error() {
        let err = find_from_reader("10 25".as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::WrongCount { found: 2 })
        );
        assert_eq!(format!("{err:#}"), "invalid input: expected 3 ages, found 2");
    }

    #[test]
    fn renders_plain_name() {
        let person = find_in_text("1 9 3").expect("find");
        assert_eq!(render(&person, false).expect("render"), "Berto");
    }

    #[test]
    fn renders_json_line() {
        let person = find_in_text("1 9 3").expect("find");
        assert_eq!(
            render(&person, true).expect("render"),
            r#"{"name":"Berto","age":9}"#
        );
    }
}
