//! Selection of the oldest person in a roster.

use crate::core::person::{Person, ROSTER_SIZE};

/// Return the person with the maximum age.
///
/// Single pass, no sorting. Among tied maxima the entry with the latest
/// position wins, which is the entry a stable ascending sort would place last.
pub fn find_oldest(people: &[Person; ROSTER_SIZE]) -> &Person {
    people[1..].iter().fold(&people[0], |best, person| {
        if person.age >= best.age { person } else { best }
    })
}
