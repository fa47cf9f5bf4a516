//! Commands module - CLI command implementations.

pub mod feed;
pub mod migrate;
pub mod reaction;

use common::AppResult;
use serde_json::Value;

/// Print a command result as pretty JSON on stdout
fn print_json(value: Value) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
