//! CSV output formatter

use std::io::{self, Write};

use super::common::csv_line;
use super::Formatter;
use crate::rc::Record;

/// Formatter for CSV output
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, records: &[Record], out: &mut dyn Write) -> io::Result<()> {
        // Header comes from the first record; nothing at all for an empty list
        let Some(first) = records.first() else {
            return Ok(());
        };
        writeln!(out, "{}", csv_line(first.keys()))?;

        for record in records {
            writeln!(out, "{}", csv_line(&record.to_row()))?;
        }
        Ok(())
    }
}
