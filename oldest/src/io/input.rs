//! Reading raw input for the finder.

use std::io::Read;

use anyhow::{Context, Result};

/// Read the whole input stream into a string.
pub fn read_input(mut reader: impl Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).context("read input")?;
    Ok(buf)
}
