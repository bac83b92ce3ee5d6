//! The fixed roster of people whose ages are compared.

use serde::Serialize;

/// Number of people in every run.
pub const ROSTER_SIZE: usize = 3;

/// Names assigned to ages by input position.
pub const NAMES: [&str; ROSTER_SIZE] = ["Alvin", "Berto", "Carlo"];

/// A named age from the roster.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Person {
    pub name: &'static str,
    pub age: i64,
}

/// Pair each age with the name at the same position.
pub fn roster(ages: [i64; ROSTER_SIZE]) -> [Person; ROSTER_SIZE] {
    std::array::from_fn(|index| Person {
        name: NAMES[index],
        age: ages[index],
    })
}
