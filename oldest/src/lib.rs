//! Report the oldest of three people.
//!
//! Three ages are read in a fixed order and paired with the names Alvin,
//! Berto and Carlo. The name with the highest age is printed.
//!
//! - **[`core`]**: Pure, deterministic logic (parsing, selection, comparison,
//!   scoring). No I/O.
//! - **[`io`]**: Reading input streams and case files.
//!
//! Orchestration modules ([`find`], [`check`]) combine the two to implement
//! the CLI commands.

pub mod check;
pub mod core;
pub mod exit_codes;
pub mod find;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
