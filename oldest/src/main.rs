//! Print the name of the oldest of Alvin, Berto and Carlo.
//!
//! Reads three ages from stdin, one per person in that order. `oldest check`
//! judges the same logic against a TOML case file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use oldest::check::{check_from_path, render_report};
use oldest::exit_codes;
use oldest::find::{find_from_reader, render};
use oldest::logging;

#[derive(Parser)]
#[command(
    name = "oldest",
    version,
    about = "Print the name of the oldest of three people"
)]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Judge every case in a TOML case file and print per-subtask scores.
    Check {
        /// Path to the case file.
        cases: PathBuf,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        None => cmd_find(cli.json),
        Some(Command::Check { cases }) => cmd_check(&cases, cli.json),
    }
}

fn cmd_find(json: bool) -> Result<i32> {
    let person = find_from_reader(std::io::stdin().lock())?;
    println!("{}", render(&person, json)?);
    Ok(exit_codes::OK)
}

fn cmd_check(cases: &Path, json: bool) -> Result<i32> {
    let report = check_from_path(cases)?;
    println!("{}", render_report(&report, json)?);
    if report.all_accepted() {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::MISMATCH)
    }
}
