//! Interactive prompts using dialoguer
//!
//! Question groups talk to a [`Prompter`] rather than to the terminal, so the
//! same flow can be driven by [`TerminalPrompter`] or by a scripted answer
//! source in tests.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::error::PromptError;
use crate::flow::validate::{self, Rule};
use crate::utils::{print_guidance, print_help};

/// Free-text question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuestion {
    pub message: String,
    pub help: Option<String>,
    /// Returned when the answer is left blank
    pub default: Option<String>,
    pub rules: Vec<Rule>,
}

impl TextQuestion {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
            default: None,
            rules: Vec::new(),
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Offer `value` as the default unless it is empty
    pub fn default_to(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.default = (!value.is_empty()).then_some(value);
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Apply the default to a blank answer
    pub fn resolve(&self, raw: &str) -> String {
        match &self.default {
            Some(default) if raw.is_empty() => default.clone(),
            _ => raw.to_string(),
        }
    }

    pub fn validate(&self, value: &str) -> Result<(), String> {
        validate::check_all(&self.rules, value)
    }
}

/// Yes/no question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmQuestion {
    pub message: String,
    pub help: Option<String>,
    pub default: bool,
}

impl ConfirmQuestion {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
            default: false,
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

/// Pick one of a fixed list of options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuestion {
    pub message: String,
    pub help: Option<String>,
    pub options: Vec<String>,
    pub default: usize,
}

impl SelectQuestion {
    pub fn new<I, S>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            message: message.into(),
            help: None,
            options: options.into_iter().map(|o| o.to_string()).collect(),
            default: 0,
        }
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Pre-select `index`, ignored when out of range
    pub fn default(mut self, index: usize) -> Self {
        if index < self.options.len() {
            self.default = index;
        }
        self
    }
}

/// Source of answers for the question flow
pub trait Prompter {
    /// Ask a free-text question, re-asking until every rule passes
    fn text(&mut self, question: &TextQuestion) -> Result<String, PromptError>;

    fn confirm(&mut self, question: &ConfirmQuestion) -> Result<bool, PromptError>;

    /// Returns the index of the chosen option
    fn select(&mut self, question: &SelectQuestion) -> Result<usize, PromptError>;

    /// Show instructional text. Never affects the answers.
    fn guidance(&mut self, text: &str);
}

/// Prompter backed by the terminal
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl std::fmt::Debug for TerminalPrompter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalPrompter").finish_non_exhaustive()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, question: &TextQuestion) -> Result<String, PromptError> {
        print_help(question.help.as_deref());

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(question.message.as_str())
            .allow_empty(true);
        if let Some(default) = &question.default {
            input = input.default(default.clone());
        }

        let rules = question.rules.clone();
        let raw = input
            .validate_with(move |value: &String| validate::check_all(&rules, value))
            .interact_text()?;

        Ok(question.resolve(&raw))
    }

    fn confirm(&mut self, question: &ConfirmQuestion) -> Result<bool, PromptError> {
        print_help(question.help.as_deref());

        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(question.message.as_str())
            .default(question.default)
            .interact()?;
        Ok(confirmed)
    }

    fn select(&mut self, question: &SelectQuestion) -> Result<usize, PromptError> {
        print_help(question.help.as_deref());

        let index = Select::with_theme(&self.theme)
            .with_prompt(question.message.as_str())
            .items(&question.options[..])
            .default(question.default)
            .interact()?;
        Ok(index)
    }

    fn guidance(&mut self, text: &str) {
        print_guidance(text);
    }
}
