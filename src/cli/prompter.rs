// src/cli/prompter.rs

//! The prompt layer: pick one item from a list, type a line of text, or
//! answer yes/no.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    /// The terminal interaction itself failed, e.g. stdin was closed.
    #[error("Prompt failed: {0}")]
    Interaction(#[from] dialoguer::Error),
    /// The user dismissed the prompt.
    #[error("Prompt cancelled.")]
    Cancelled,
    /// The selection is not one of the offered items.
    #[error("Invalid selection '{choice}'.")]
    InvalidSelection { choice: String },
    /// A scripted answer does not match the kind of prompt being asked.
    #[error("Unexpected {kind} prompt '{prompt}'.")]
    UnexpectedPrompt { kind: PromptKind, prompt: String },
    /// A scripted prompter ran out of answers.
    #[error("No answer left for prompt '{prompt}'.")]
    Exhausted { prompt: String },
}

/// The three kinds of interaction offered by a [`Prompter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Select,
    Input,
    Confirm,
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Select => "select",
            Self::Input => "input",
            Self::Confirm => "confirm",
        };
        f.write_str(name)
    }
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Interactive input used by the action handlers.
pub trait Prompter {
    /// Lets the user pick one of `items` and returns the chosen item.
    fn select(&mut self, prompt: &str, items: &[String]) -> PromptResult<String>;

    /// Reads a line of text.
    fn input(&mut self, prompt: &str) -> PromptResult<String>;

    /// Asks a yes/no question. `default` is the pre-selected answer.
    fn confirm(&mut self, prompt: &str, default: bool) -> PromptResult<bool>;
}

// --- Terminal implementation ---

/// Prompts on the terminal with dialoguer's colorful theme.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DialoguerPrompter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialoguerPrompter").finish_non_exhaustive()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> PromptResult<String> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?
            .ok_or(PromptError::Cancelled)?;
        items
            .get(index)
            .cloned()
            .ok_or_else(|| PromptError::InvalidSelection {
                choice: index.to_string(),
            })
    }

    fn input(&mut self, prompt: &str) -> PromptResult<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> PromptResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?
            .ok_or(PromptError::Cancelled)
    }
}

// --- Scripted implementation ---

/// One pre-recorded answer for a [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Pick the item with this exact text.
    Select(String),
    /// Type this text.
    Input(String),
    /// Answer yes or no.
    Confirm(bool),
}

/// Replays a fixed sequence of answers and records what was asked. Running
/// out of answers behaves like a closed input stream.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
    offered: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = Answer>,
    {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Every prompt text shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// The item lists offered by each `select`, in order.
    pub fn offered(&self) -> &[Vec<String>] {
        &self.offered
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> PromptResult<Answer> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| PromptError::Exhausted {
            prompt: prompt.to_string(),
        })
    }
}

fn unexpected(kind: PromptKind, prompt: &str) -> PromptError {
    PromptError::UnexpectedPrompt {
        kind,
        prompt: prompt.to_string(),
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> PromptResult<String> {
        self.offered.push(items.to_vec());
        match self.next(prompt)? {
            Answer::Select(choice) if items.contains(&choice) => Ok(choice),
            Answer::Select(choice) => Err(PromptError::InvalidSelection { choice }),
            _ => Err(unexpected(PromptKind::Select, prompt)),
        }
    }

    fn input(&mut self, prompt: &str) -> PromptResult<String> {
        match self.next(prompt)? {
            Answer::Input(text) => Ok(text),
            _ => Err(unexpected(PromptKind::Input, prompt)),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> PromptResult<bool> {
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(yes),
            _ => Err(unexpected(PromptKind::Confirm, prompt)),
        }
    }
}
