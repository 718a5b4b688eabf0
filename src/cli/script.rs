//! Scripted answer source
//!
//! Replays a fixed list of answers instead of reading the terminal and keeps a
//! log of every question asked, so flows can be checked by call count.

use std::collections::VecDeque;

use crate::cli::prompts::{ConfirmQuestion, Prompter, SelectQuestion, TextQuestion};
use crate::error::PromptError;

/// One scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Yes,
    No,
    /// Option label to pick in a select question
    Choice(String),
    /// Accept whatever default the question offers
    Default,
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }

    pub fn blank() -> Self {
        Answer::Text(String::new())
    }

    pub fn choice(label: impl Into<String>) -> Self {
        Answer::Choice(label.into())
    }

    pub fn confirm(value: bool) -> Self {
        if value {
            Answer::Yes
        } else {
            Answer::No
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Answer::Text(_) => "text",
            Answer::Yes | Answer::No => "confirm",
            Answer::Choice(_) => "select",
            Answer::Default => "default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    Confirm,
    Select,
}

/// A question that was put to the scripted prompter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asked {
    pub kind: PromptKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<Asked>,
    rejections: Vec<String>,
    guidance: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Every question asked, in order. Re-asks after a rejection are not repeated.
    pub fn asked(&self) -> &[Asked] {
        &self.asked
    }

    pub fn count(&self, kind: PromptKind) -> usize {
        self.asked.iter().filter(|a| a.kind == kind).count()
    }

    pub fn was_asked(&self, message: &str) -> bool {
        self.asked.iter().any(|a| a.message == message)
    }

    /// Validation messages shown for rejected answers
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    pub fn guidance_shown(&self) -> &[String] {
        &self.guidance
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn record(&mut self, kind: PromptKind, message: &str) {
        self.asked.push(Asked {
            kind,
            message: message.to_string(),
        });
    }

    fn next_answer(&mut self, question: &str) -> Result<Answer, PromptError> {
        self.answers.pop_front().ok_or_else(|| PromptError::Exhausted {
            question: question.to_string(),
        })
    }
}

fn mismatch(question: &str, expected: &'static str, found: &Answer) -> PromptError {
    PromptError::Mismatch {
        question: question.to_string(),
        expected,
        found: found.kind(),
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, question: &TextQuestion) -> Result<String, PromptError> {
        self.record(PromptKind::Text, &question.message);

        loop {
            let raw = match self.next_answer(&question.message)? {
                Answer::Text(raw) => raw,
                Answer::Default => String::new(),
                other => return Err(mismatch(&question.message, "text", &other)),
            };

            let value = question.resolve(&raw);
            match question.validate(&value) {
                Ok(()) => return Ok(value),
                Err(message) => self.rejections.push(message),
            }
        }
    }

    fn confirm(&mut self, question: &ConfirmQuestion) -> Result<bool, PromptError> {
        self.record(PromptKind::Confirm, &question.message);

        match self.next_answer(&question.message)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            Answer::Default => Ok(question.default),
            other => Err(mismatch(&question.message, "confirm", &other)),
        }
    }

    fn select(&mut self, question: &SelectQuestion) -> Result<usize, PromptError> {
        self.record(PromptKind::Select, &question.message);

        match self.next_answer(&question.message)? {
            Answer::Choice(label) => question
                .options
                .iter()
                .position(|o| *o == label)
                .ok_or(PromptError::UnknownChoice {
                    question: question.message.clone(),
                    choice: label,
                }),
            Answer::Default => Ok(question.default),
            other => Err(mismatch(&question.message, "select", &other)),
        }
    }

    fn guidance(&mut self, text: &str) {
        self.guidance.push(text.to_string());
    }
}
