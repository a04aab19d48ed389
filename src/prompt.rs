//! User input and interaction handling.

use crate::error::Result;
use dialoguer::{Confirm, Input, Select};

/// Abstract interface for the questions the front end asks.
pub trait Prompter {
    /// Asks for free text, offering `default` when given.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Asks to pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Ok(Select::new().with_prompt(prompt).items(items).default(default).interact()?)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }
}
