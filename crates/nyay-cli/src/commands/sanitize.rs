//! Sanitize command implementation.

use crate::cli::InputArgs;
use crate::commands::read_input;
use crate::error::Result;
use nyay_verdicts::sanitize;

/// Execute the sanitize command.
pub fn execute_sanitize(args: InputArgs) -> Result<()> {
    let text = read_input(&args)?;
    println!("{}", sanitize(&text));
    Ok(())
}
