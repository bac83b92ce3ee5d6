//! I/O helpers for the commands.

pub mod cases;
pub mod input;
