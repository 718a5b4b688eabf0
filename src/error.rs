//! Error types for the wizard.
//!
//! Prompt failures are recoverable: the affected question group falls back to
//! its defaults and the flow continues. Store failures are fatal.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of an interactive prompt session
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal backend failed (input closed, not a terminal)
    #[error("prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),

    /// A scripted session ran out of answers
    #[error("no answer left for \"{question}\"")]
    Exhausted { question: String },

    /// A scripted session answered with the wrong kind of value
    #[error("expected a {expected} answer for \"{question}\", got {found}")]
    Mismatch {
        question: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The chosen option is not one of the offered options
    #[error("\"{choice}\" is not an option for \"{question}\"")]
    UnknownChoice { question: String, choice: String },
}

/// Failure reading or writing `init.yml`
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Trouble creating new {} file", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid configuration document: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize the configuration document")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure of a wizard run
#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, WizardError>;
