//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners
//! and interactive prompts.

mod confirm;
mod spinner;

#[cfg(test)]
pub use confirm::ScriptedPrompter;
pub use confirm::{ConsolePrompter, Prompter};
pub use spinner::{create_spinner, finish_spinner};
