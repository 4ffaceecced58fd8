//! Output formatting module
//!
//! Handles the two record formats: plain blocks and CSV

mod common;
mod csv;
mod plain;

use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::rc::Record;

pub use self::common::escape_csv;
pub use self::csv::CsvFormatter;
pub use self::plain::PlainFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Write the records to `out`
    fn format(&self, records: &[Record], out: &mut dyn Write) -> io::Result<()>;
}

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Plain => Box::new(PlainFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Print records to stdout in the requested format
pub fn output_records(records: &[Record], format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    formatter_for(format).format(records, &mut out)?;
    out.flush()
}
