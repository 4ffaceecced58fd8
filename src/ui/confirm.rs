//! Interactive console prompts

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Confirm, Input};

use crate::error::{RcError, Result};

/// Console interaction used by interactive commands
///
/// Tests drive commands with a scripted implementation.
pub trait Prompter {
    /// Show a line of text to the operator
    fn say(&mut self, message: &str);

    /// Ask a yes/no question; anything but an explicit yes is `false`
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Read one line of input (may be empty)
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Prompter backed by the terminal
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn say(&mut self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if !io::stdin().is_terminal() {
            let prompt = format!("{} (y/N) ", prompt);
            let answer = read_plain_line(&mut io::stdin().lock(), &prompt)?;
            return Ok(is_yes(&answer));
        }
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if !io::stdin().is_terminal() {
            return read_plain_line(&mut io::stdin().lock(), &format!("{}: ", prompt));
        }
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }
}

/// Print `prompt` and read one line without terminal handling.
/// End of input reads as an empty line.
fn read_plain_line(reader: &mut dyn BufRead, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut input = String::new();
    reader
        .read_line(&mut input)
        .map_err(|e| RcError::Prompt(e.to_string()))?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Only `y`/`Y` confirms a piped answer
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}

/// Prompter that replays canned answers and records what it was shown
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub confirms: std::collections::VecDeque<bool>,
    pub lines: std::collections::VecDeque<String>,
    pub transcript: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(confirms: &[bool], lines: &[&str]) -> Self {
        Self {
            confirms: confirms.iter().copied().collect(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            transcript: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.transcript.push(prompt.to_string());
        self.confirms
            .pop_front()
            .ok_or_else(|| RcError::Prompt("no scripted answer".to_string()))
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(prompt.to_string());
        self.lines
            .pop_front()
            .ok_or_else(|| RcError::Prompt("no scripted input".to_string()))
    }
}
