//! Command handlers: run a flow, assemble the answers and write init.yml

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{Prompter, TerminalPrompter};
use crate::config::{assemble, InitDocument, InitFile};
use crate::error::WizardError;
use crate::flow::{Catalog, StepSpec, Wizard, INSTALL_FLOW, OPTIONS_FLOW};
use crate::report::ConfigSummary;
use crate::utils::{
    create_spinner, finish_with_error, finish_with_success, print_banner, print_completion,
    print_info, print_saved,
};

/// Load `file`, ask `flow`, apply the answers and save the result.
///
/// Prompt failures never surface here; only reading or writing the file
/// can fail.
pub fn run_flow(
    file: &InitFile,
    catalog: &Catalog,
    prompter: &mut dyn Prompter,
    flow: &[StepSpec],
) -> Result<InitDocument, WizardError> {
    let mut doc = file.open_or_create()?;
    let seed = doc.clone();

    let answers = {
        let mut wizard = Wizard::new(prompter, catalog, &seed);
        let answers = wizard.run(flow);
        if !wizard.failed().is_empty() {
            info!(failed = wizard.failed().len(), "some steps fell back to defaults");
        }
        answers
    };

    assemble(&mut doc, &answers, catalog);

    let spinner = create_spinner("Writing init.yml...");
    if let Err(err) = file.save(&doc) {
        finish_with_error(&spinner, "Could not write init.yml");
        return Err(err.into());
    }
    finish_with_success(&spinner, "Configuration saved");

    Ok(doc)
}

fn run_interactive(dir: &Path, flow: &[StepSpec]) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    let file = InitFile::in_dir(dir);
    if file.exists() {
        print_info("Existing init.yml found, its values are offered as defaults");
    }

    let catalog = Catalog::openfaas_cloud();
    let mut prompter = TerminalPrompter::new();
    let doc = run_flow(&file, &catalog, &mut prompter, flow)
        .with_context(|| format!("Failed to generate {}", file.path().display()))?;

    print_saved(file.path());
    ConfigSummary::from_document(&doc).display();
    print_completion();
    Ok(())
}

/// `ofc-wizard generate`
pub fn run_generate(dir: &Path) -> Result<()> {
    run_interactive(dir, INSTALL_FLOW)
}

/// `ofc-wizard options`
pub fn run_options(dir: &Path) -> Result<()> {
    run_interactive(dir, OPTIONS_FLOW)
}
