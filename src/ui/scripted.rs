use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{DeployError, Result};
use crate::ui::Prompter;

/// One canned answer
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Choice(String),
    Yes,
    No,
}

/// Prompter replaying canned answers, for tests.
///
/// Once the script runs out every prompt takes its default.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        ScriptedPrompter {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Pick `choice` from the list, then answer yes to every confirmation
    pub fn accept_all(choice: &str) -> Self {
        let mut answers = vec![Answer::Choice(choice.to_string())];
        answers.extend(std::iter::repeat(Answer::Yes).take(16));
        Self::new(answers)
    }

    /// Messages of every prompt shown so far
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn next(&self, message: &str) -> Option<Answer> {
        self.asked.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, message: &str, choices: &[&str], default: usize) -> Result<String> {
        match self.next(message) {
            Some(Answer::Choice(choice)) => Ok(choice),
            None => Ok(choices.get(default).copied().unwrap_or_default().to_string()),
            Some(other) => Err(DeployError::prompt(format!(
                "expected a choice for '{}', got {:?}",
                message, other
            ))),
        }
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        match self.next(message) {
            Some(Answer::Yes) => Ok(true),
            Some(Answer::No) => Ok(false),
            None => Ok(default),
            Some(other) => Err(DeployError::prompt(format!(
                "expected yes/no for '{}', got {:?}",
                message, other
            ))),
        }
    }
}
