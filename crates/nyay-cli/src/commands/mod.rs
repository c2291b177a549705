//! Command implementations.

pub mod config;
pub mod parse;
pub mod sanitize;

pub use self::config::execute_config;
pub use self::parse::execute_parse;
pub use self::sanitize::execute_sanitize;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::io::Read;

/// Read the command input from a file or stdin.
pub fn read_input(args: &InputArgs) -> Result<String> {
    match (&args.file, args.stdin) {
        (Some(_), true) => Err(CliError::InvalidInput(
            "Use either --file or --stdin, not both".to_string(),
        )),
        (Some(path), false) => Ok(std::fs::read_to_string(path)?),
        (None, true) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        (None, false) => Err(CliError::InvalidInput(
            "No input given; pass --file <PATH> or --stdin".to_string(),
        )),
    }
}
