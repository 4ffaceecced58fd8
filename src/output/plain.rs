//! Plain text output formatter

use std::io::{self, Write};

use super::Formatter;
use crate::rc::Record;

/// Formatter for human-readable blocks
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn format(&self, records: &[Record], out: &mut dyn Write) -> io::Result<()> {
        for record in records {
            writeln!(out, "{}", record.name())?;
            let block = record.to_block();
            if !block.is_empty() {
                writeln!(out, "{}", block)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
