//! Deterministic, pure logic shared by the commands.
//!
//! Core modules are free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod finder;
pub mod input;
pub mod lenient;
pub mod person;
pub mod reducer;
