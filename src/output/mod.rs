//! Output formatting for CLI results

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod progress;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Server responses have no fixed row shape; they print as JSON whatever
/// format was asked for.
impl Formattable for Value {
    fn format(&self, _format: OutputFormat) -> Result<String> {
        json::format_json(self)
    }
}

/// Format and print data to stdout
pub fn print<T: Formattable + ?Sized>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}
