//! Step sequencing
//!
//! A flow is a static list of [`StepSpec`]s. Each step runs only when its
//! predicate holds for the answers gathered so far, so branching is data
//! rather than nested conditionals.

use tracing::{debug, warn};

use crate::cli::Prompter;
use crate::config::InitDocument;
use crate::error::PromptError;
use crate::flow::answers::{Answers, ScmAnswers};
use crate::flow::catalog::Catalog;
use crate::flow::groups;
use crate::utils::{print_step_header, print_warning};

/// One question group of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Initial,
    GitHub,
    GitLab,
    OAuth,
    Storage,
    Dns,
    Tls,
    Options,
}

impl Step {
    pub fn title(&self) -> &'static str {
        match self {
            Step::Initial => "Platform",
            Step::GitHub => "GitHub App",
            Step::GitLab => "GitLab",
            Step::OAuth => "OAuth",
            Step::Storage => "Build Log Storage",
            Step::Dns => "DNS Provider",
            Step::Tls => "TLS",
            Step::Options => "Final Configuration",
        }
    }
}

/// A step and the condition under which it runs
#[derive(Clone, Copy)]
pub struct StepSpec {
    pub step: Step,
    pub when: fn(&Answers) -> bool,
}

impl std::fmt::Debug for StepSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepSpec").field("step", &self.step).finish()
    }
}

pub fn always(_: &Answers) -> bool {
    true
}

pub fn uses_github(answers: &Answers) -> bool {
    answers.scm_provider() == Some(crate::config::ScmProvider::Github)
}

pub fn uses_gitlab(answers: &Answers) -> bool {
    answers.scm_provider() == Some(crate::config::ScmProvider::Gitlab)
}

pub fn oauth_enabled(answers: &Answers) -> bool {
    answers.oauth_enabled()
}

/// Initial → SCM → OAuth → storage → DNS → TLS
pub const INSTALL_FLOW: &[StepSpec] = &[
    StepSpec { step: Step::Initial, when: always },
    StepSpec { step: Step::GitHub, when: uses_github },
    StepSpec { step: Step::GitLab, when: uses_gitlab },
    StepSpec { step: Step::OAuth, when: oauth_enabled },
    StepSpec { step: Step::Storage, when: always },
    StepSpec { step: Step::Dns, when: always },
    StepSpec { step: Step::Tls, when: always },
];

/// Final platform options, run on its own against an existing document
pub const OPTIONS_FLOW: &[StepSpec] = &[StepSpec { step: Step::Options, when: always }];

/// Runs a flow against a prompter and collects the answers
pub struct Wizard<'a> {
    prompter: &'a mut dyn Prompter,
    catalog: &'a Catalog,
    seed: &'a InitDocument,
    failed: Vec<Step>,
}

impl<'a> Wizard<'a> {
    /// `seed` provides the defaults offered by each question
    pub fn new(prompter: &'a mut dyn Prompter, catalog: &'a Catalog, seed: &'a InitDocument) -> Self {
        Self {
            prompter,
            catalog,
            seed,
            failed: Vec::new(),
        }
    }

    /// Steps whose prompts failed during the last run
    pub fn failed(&self) -> &[Step] {
        &self.failed
    }

    pub fn run(&mut self, flow: &[StepSpec]) -> Answers {
        let mut answers = Answers::default();
        let mut number: u8 = 0;

        for entry in flow {
            if !(entry.when)(&answers) {
                debug!(step = entry.step.title(), "step skipped");
                continue;
            }

            number = number.saturating_add(1);
            print_step_header(number, entry.step.title());
            self.run_step(entry.step, &mut answers);
        }

        answers
    }

    /// A failed group records its fallback and the flow moves on
    fn run_step(&mut self, step: Step, answers: &mut Answers) {
        match step {
            Step::Initial => {
                // No fallback: without a provider choice no SCM or OAuth step runs
                let result = groups::ask_initial(&mut *self.prompter, self.catalog, self.seed);
                answers.initial = self.recover(step, result);
            }
            Step::GitHub => {
                let result = groups::ask_github(&mut *self.prompter, self.catalog, self.seed);
                let github = self.recover(step, result).unwrap_or_default();
                answers.scm = Some(ScmAnswers::GitHub(github));
            }
            Step::GitLab => {
                let result = groups::ask_gitlab(&mut *self.prompter, self.catalog, self.seed);
                let gitlab = self.recover(step, result).unwrap_or_default();
                answers.scm = Some(ScmAnswers::GitLab(gitlab));
            }
            Step::OAuth => {
                let scm = answers.scm_provider().unwrap_or_default();
                let result = groups::ask_oauth(&mut *self.prompter, self.catalog, scm, self.seed);
                answers.oauth = Some(self.recover(step, result).unwrap_or_default());
            }
            Step::Storage => {
                let result = groups::ask_storage(&mut *self.prompter, self.catalog, self.seed);
                let storage = self
                    .recover(step, result)
                    .unwrap_or_else(|| self.catalog.storage.clone());
                answers.storage = Some(storage);
            }
            Step::Dns => {
                let result = groups::ask_dns(&mut *self.prompter, self.catalog, self.seed);
                answers.dns = self.recover(step, result);
            }
            Step::Tls => {
                let dns_service = answers.dns_service();
                let result =
                    groups::ask_tls(&mut *self.prompter, self.catalog, dns_service, self.seed);
                answers.tls = Some(self.recover(step, result).unwrap_or_default());
            }
            Step::Options => {
                let result = groups::ask_options(&mut *self.prompter, self.catalog, self.seed);
                let options = self
                    .recover(step, result)
                    .unwrap_or_else(|| groups::default_options(self.catalog));
                answers.options = Some(options);
            }
        }
    }

    fn recover<T>(&mut self, step: Step, result: Result<T, PromptError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(step = step.title(), error = %err, "prompt failed, using defaults");
                print_warning(&format!("{}: {}", step.title(), err));
                self.failed.push(step);
                None
            }
        }
    }
}
