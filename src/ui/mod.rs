//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Display functions
//! - `scripted` - Canned answers for tests
//! - This module - The [Prompter] trait and the terminal implementation

use std::io::{self, BufRead, Write};

use crate::error::Result;

pub mod formatter;
pub mod scripted;

pub use formatter::{
    display_command, display_complete, display_current_version, display_error, display_status,
    display_success, display_warning,
};
pub use scripted::{Answer, ScriptedPrompter};

/// Asks the operator questions.
pub trait Prompter {
    /// Offer a list of choices and return the chosen one.
    ///
    /// Implementations may return text outside `choices`; callers validate it.
    fn select(&self, message: &str, choices: &[&str], default: usize) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Prompts on stdout and reads answers from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter
    }

    fn read_answer(prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

/// Resolve a list answer: empty input picks the default, a 1-based index or
/// an exact choice picks that choice, anything else is returned as typed.
pub fn resolve_selection(input: &str, choices: &[&str], default: usize) -> String {
    if input.is_empty() {
        return choices.get(default).copied().unwrap_or_default().to_string();
    }

    match input.parse::<usize>() {
        Ok(index) if index > 0 && index <= choices.len() => choices[index - 1].to_string(),
        _ => input.to_string(),
    }
}

/// Resolve a yes/no answer; "y"/"yes" and "n"/"no" in any case, empty input
/// picks the default, anything else counts as no.
pub fn resolve_confirmation(input: &str, default: bool) -> bool {
    match input.to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, message: &str, choices: &[&str], default: usize) -> Result<String> {
        let input = Self::read_answer(&formatter::format_choices(message, choices, default))?;
        Ok(resolve_selection(&input, choices, default))
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let input = Self::read_answer(&formatter::format_confirm(message, default))?;
        Ok(resolve_confirmation(&input, default))
    }
}
