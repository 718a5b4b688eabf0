//! CLI module - argument parsing, prompts and command handlers

mod args;
pub mod generate;
mod prompts;
pub mod script;

pub use args::{Cli, Commands};
pub use generate::{run_flow, run_generate, run_options};
pub use prompts::*;
pub use script::{Answer, PromptKind, ScriptedPrompter};
