//! Stable exit codes for the `oldest` binary.

/// Command succeeded, or every checked case was accepted.
pub const OK: i32 = 0;
/// Malformed input, or a case file that could not be loaded.
pub const INVALID: i32 = 1;
/// `oldest check` found at least one case that was not accepted.
pub const MISMATCH: i32 = 2;
