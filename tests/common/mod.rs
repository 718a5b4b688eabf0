//! Shared test utilities and scripted answer fixtures
//!
//! Each helper returns the answers for one question group, in the order the
//! group asks them, so a test can concatenate the groups of the flow it runs.

#![allow(dead_code)]

use ofc_wizard::cli::{Answer, ScriptedPrompter};
use ofc_wizard::config::{assemble, InitDocument};
use ofc_wizard::flow::{Answers, Catalog, StepSpec, Step, Wizard};

pub const ROOT_DOMAIN: &str = "faas.example.com";
pub const REGISTRY: &str = "docker.io/ofc/";
pub const EMAIL: &str = "ops@example.com";

/// Orchestrator, root domain, registry, SCM, OAuth flag
pub fn initial(scm: &str, enable_oauth: bool) -> Vec<Answer> {
    vec![
        Answer::choice("kubernetes"),
        Answer::text(ROOT_DOMAIN),
        Answer::text(REGISTRY),
        Answer::choice(scm),
        Answer::confirm(enable_oauth),
    ]
}

/// App already set up, app ID, blank webhook secret, private key path
pub fn github() -> Vec<Answer> {
    vec![
        Answer::Yes,
        Answer::text("4242"),
        Answer::blank(),
        Answer::text("/home/ofc/private-key.pem"),
    ]
}

/// Blank webhook secret path, instance URL
pub fn gitlab() -> Vec<Answer> {
    vec![Answer::blank(), Answer::text("https://gitlab.example.com/")]
}

/// App already created, client ID, and a base URL for GitLab
pub fn oauth(scm: &str) -> Vec<Answer> {
    let mut answers = vec![Answer::Yes, Answer::text("client-123")];
    if scm == "gitlab" {
        answers.push(Answer::text("https://gitlab.example.com"));
    }
    answers
}

pub fn bundled_storage() -> Vec<Answer> {
    vec![Answer::No]
}

pub fn custom_storage() -> Vec<Answer> {
    vec![
        Answer::Yes,
        Answer::text("s3.amazonaws.com"),
        Answer::text("eu-west-1"),
        Answer::text("ofc-logs"),
        Answer::Yes,
    ]
}

/// Provider by display name plus the credential path
pub fn dns(provider: &str) -> Vec<Answer> {
    vec![
        Answer::choice(provider),
        Answer::text(format!("/home/ofc/{}", provider.to_lowercase().replace(' ', "-"))),
    ]
}

pub fn tls_declined() -> Vec<Answer> {
    vec![Answer::No]
}

/// TLS enabled with the email and issuer, before any provider fields
pub fn tls(issuer: &str) -> Vec<Answer> {
    vec![Answer::Yes, Answer::text(EMAIL), Answer::choice(issuer)]
}

pub fn script(groups: impl IntoIterator<Item = Vec<Answer>>) -> ScriptedPrompter {
    ScriptedPrompter::new(groups.into_iter().flatten())
}

/// Result of running a flow against a fresh document
pub struct Run {
    pub answers: Answers,
    pub doc: InitDocument,
    pub failed: Vec<Step>,
}

pub fn run_flow(prompter: &mut ScriptedPrompter, flow: &[StepSpec]) -> Run {
    run_flow_seeded(prompter, flow, InitDocument::default())
}

pub fn run_flow_seeded(
    prompter: &mut ScriptedPrompter,
    flow: &[StepSpec],
    seed: InitDocument,
) -> Run {
    let catalog = Catalog::openfaas_cloud();
    let (answers, failed) = {
        let mut wizard = Wizard::new(prompter, &catalog, &seed);
        let answers = wizard.run(flow);
        (answers, wizard.failed().to_vec())
    };

    let mut doc = seed.clone();
    assemble(&mut doc, &answers, &catalog);
    Run {
        answers,
        doc,
        failed,
    }
}
