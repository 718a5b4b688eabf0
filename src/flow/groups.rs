//! Question groups
//!
//! Each `ask_*` function asks one cohesive block of questions and returns its
//! answer record. Values from a previously saved document are offered as
//! defaults.

use std::fmt::Display;

use tracing::debug;

use crate::cli::{ConfirmQuestion, Prompter, SelectQuestion, TextQuestion};
use crate::config::assembler::GITHUB_WEBHOOK_SECRET;
use crate::config::{DnsService, InitDocument, ScmProvider};
use crate::error::PromptError;
use crate::flow::answers::{
    CredentialFile, DnsAnswers, GithubAnswers, GitlabAnswers, InitialAnswers, OAuthAnswers,
    OptionsAnswers, ProviderFields, StorageAnswers, TlsAnswers,
};
use crate::flow::catalog::Catalog;
use crate::flow::validate::{Rule, EMAIL_ADDRESS, REGISTRY_ADDRESS};

/// Secret holding the GitHub App private key
pub const PRIVATE_KEY_SECRET: &str = "private-key";

/// Ask a select question over typed options, pre-selecting `current`
fn choose<T>(
    prompter: &mut dyn Prompter,
    message: &str,
    options: &[T],
    current: Option<T>,
) -> Result<T, PromptError>
where
    T: Copy + PartialEq + Display,
{
    let default = current
        .and_then(|c| options.iter().position(|o| *o == c))
        .unwrap_or(0);
    let question = SelectQuestion::new(message, options.iter()).default(default);

    let index = prompter.select(&question)?;
    options
        .get(index)
        .copied()
        .ok_or_else(|| PromptError::UnknownChoice {
            question: message.to_string(),
            choice: index.to_string(),
        })
}

pub fn ask_initial(
    prompter: &mut dyn Prompter,
    catalog: &Catalog,
    seed: &InitDocument,
) -> Result<InitialAnswers, PromptError> {
    let orchestrator = choose(
        prompter,
        "Select an orchestration provider",
        &catalog.orchestrators,
        seed.orchestration,
    )?;

    let root_domain = prompter.text(
        &TextQuestion::new("Root Domain (eg: faas.example.com):")
            .rule(Rule::Required)
            .default_to(seed.root_domain.as_str()),
    )?;

    let registry = prompter.text(
        &TextQuestion::new("Registry to publish images (eg: docker.io/your-name/):")
            .rule(Rule::Required)
            .rule(REGISTRY_ADDRESS)
            .default_to(seed.registry.as_str()),
    )?;

    let scm = choose(
        prompter,
        "Select a source control management provider",
        &catalog.scm_providers,
        seed.scm,
    )?;

    let enable_oauth = prompter.confirm(
        &ConfirmQuestion::new(
            "Would you like to enable OAuth so only those with GitHub/GitLab accounts may log in (recommended)",
        )
        .default(seed.enable_oauth),
    )?;

    Ok(InitialAnswers {
        orchestrator,
        root_domain,
        registry,
        scm,
        enable_oauth,
    })
}

pub fn ask_github(
    prompter: &mut dyn Prompter,
    catalog: &Catalog,
    seed: &InitDocument,
) -> Result<GithubAnswers, PromptError> {
    let app_ready =
        prompter.confirm(&ConfirmQuestion::new("Do you have your GitHub App set up already?"))?;
    if !app_ready {
        prompter.guidance(&catalog.github_app_help);
    }

    let seeded_app_id = seed.github.as_ref().map(|g| g.app_id.as_str()).unwrap_or_default();
    let app_id = prompter.text(
        &TextQuestion::new("GitHub App ID:")
            .rule(Rule::Required)
            .default_to(seeded_app_id),
    )?;

    let saved_secret = seed.secret_literal(GITHUB_WEBHOOK_SECRET).unwrap_or_default();
    let message = if saved_secret.is_empty() {
        "Enter your webhook secret (leave blank for a random value):"
    } else {
        "Enter your webhook secret (leave blank to keep the saved secret):"
    };
    let mut webhook_secret = prompter.text(&TextQuestion::new(message))?;
    if webhook_secret.is_empty() {
        webhook_secret = saved_secret.to_string();
    }

    let private_key_path = prompter.text(
        &TextQuestion::new("Enter the path of the file for your private key:")
            .help("Enter the full path of the private key downloaded from the GitHub app (eg: ~/Downloads/private-key.pem)")
            .rule(Rule::Required)
            .default_to(seed.secret_file(PRIVATE_KEY_SECRET).unwrap_or_default()),
    )?;

    Ok(GithubAnswers {
        app_id,
        webhook_secret,
        private_key_path,
    })
}

pub fn ask_gitlab(
    prompter: &mut dyn Prompter,
    _catalog: &Catalog,
    seed: &InitDocument,
) -> Result<GitlabAnswers, PromptError> {
    let webhook_secret_path = prompter.text(
        &TextQuestion::new(
            "Enter the path to the file with your webhook secret (leave blank for a random value):",
        )
        .help("Enter the full path of the file holding the GitLab webhook secret (eg: ~/Downloads/gitlab-webhook-secret)"),
    )?;

    // Trailing slash is requested but not enforced
    let seeded_instance = seed
        .gitlab
        .as_ref()
        .map(|g| g.gitlab_instance.as_str())
        .unwrap_or_default();
    let instance_url = prompter.text(
        &TextQuestion::new("Enter the public URL for your GitLab instance (with trailing slash):")
            .help("Enter the full URL of your public GitLab (eg: https://gitlab.example.com/)")
            .rule(Rule::Required)
            .default_to(seeded_instance),
    )?;

    Ok(GitlabAnswers {
        webhook_secret_path,
        instance_url,
    })
}

pub fn ask_oauth(
    prompter: &mut dyn Prompter,
    catalog: &Catalog,
    scm: ScmProvider,
    seed: &InitDocument,
) -> Result<OAuthAnswers, PromptError> {
    let app_ready =
        prompter.confirm(&ConfirmQuestion::new("Have you created your OAuth App already?"))?;
    if !app_ready {
        prompter.guidance(&catalog.oauth_app_help);
    }

    let seeded = seed.oauth.clone().unwrap_or_default();
    let client_id = prompter.text(
        &TextQuestion::new("Enter the OAuth App ID:").default_to(seeded.client_id),
    )?;

    let base_url = match scm {
        ScmProvider::Gitlab => Some(prompter.text(
            &TextQuestion::new("Enter your OAuth Provider Base URL:")
                .default_to(seeded.oauth_provider_base_url),
        )?),
        ScmProvider::Github => None,
    };

    Ok(OAuthAnswers {
        client_id,
        base_url,
    })
}

pub fn ask_storage(
    prompter: &mut dyn Prompter,
    catalog: &Catalog,
    seed: &InitDocument,
) -> Result<StorageAnswers, PromptError> {
    let mut answers = catalog.storage.clone();

    let custom = prompter.confirm(&ConfirmQuestion::new(
        "Would you like to use custom storage (S3 compatible) for logs from buildkit? (not recommended)",
    ))?;
    if !custom {
        return Ok(answers);
    }

    let s3 = &seed.s3;
    answers.url = prompter.text(
        &TextQuestion::new("Enter the Base URL for your storage location:")
            .default_to(s3.s3_url.as_str()),
    )?;
    answers.region = prompter.text(
        &TextQuestion::new("Enter the S3 region associated with the storage location:")
            .default_to(s3.s3_region.as_str()),
    )?;
    answers.bucket = prompter.text(
        &TextQuestion::new("Enter the bucket name to store the buildkit logs:")
            .default_to(s3.s3_bucket.as_str()),
    )?;
    answers.tls = prompter.confirm(
        &ConfirmQuestion::new(
            "Would you like to enable TLS encryption on the requests to the storage?",
        )
        .default(s3.s3_tls),
    )?;

    Ok(answers)
}

pub fn ask_dns(
    prompter: &mut dyn Prompter,
    catalog: &Catalog,
    seed: &InitDocument,
) -> Result<DnsAnswers, PromptError> {
    let current = seed.tls_config.as_ref().and_then(|t| t.dns_service);
    let default = current
        .and_then(|c| catalog.dns_providers.iter().position(|p| p.service == c))
        .unwrap_or(0);
    let question = SelectQuestion::new(
        "Select a DNS provider:",
        catalog.dns_providers.iter().map(|p| p.display_name),
    )
    .default(default);

    let index = prompter.select(&question)?;
    let provider =
        catalog
            .dns_providers
            .get(index)
            .ok_or_else(|| PromptError::UnknownChoice {
                question: question.message.clone(),
                choice: index.to_string(),
            })?;
    debug!(provider = provider.id, "DNS provider selected");

    let path = prompter.text(
        &TextQuestion::new("Enter the path to the file containing the DNS provider credentials:")
            .help(provider.help)
            .default_to(seed.secret_file(provider.id).unwrap_or_default()),
    )?;

    Ok(DnsAnswers {
        service: provider.service,
        id: provider.id.to_string(),
        filters: provider.filters.iter().map(|f| f.to_string()).collect(),
        credential: CredentialFile {
            name: provider.credential_file.to_string(),
            path,
        },
    })
}

/// Asks nothing beyond the first confirmation when TLS is declined
pub fn ask_tls(
    prompter: &mut dyn Prompter,
    catalog: &Catalog,
    dns_service: Option<DnsService>,
    seed: &InitDocument,
) -> Result<TlsAnswers, PromptError> {
    let enabled = prompter.confirm(
        &ConfirmQuestion::new("Would you like to enable TLS? (recommended)").default(seed.tls),
    )?;
    if !enabled {
        return Ok(TlsAnswers::default());
    }

    let seeded = seed.tls_config.clone().unwrap_or_default();
    let email = prompter.text(
        &TextQuestion::new("Enter the email address to use for registering the domain:")
            .rule(Rule::Required)
            .rule(EMAIL_ADDRESS)
            .default_to(seeded.email),
    )?;

    let issuer = choose(
        prompter,
        "Choose which type of certificate to issue (recommend prod):",
        &catalog.issuer_types,
        seed.tls_config.as_ref().map(|t| t.issuer_type),
    )?;

    let provider_fields = match dns_service {
        Some(DnsService::CloudDns) => ProviderFields::CloudDns {
            project_id: prompter.text(
                &TextQuestion::new("Enter the Project ID:").default_to(seeded.project_id),
            )?,
        },
        Some(DnsService::Route53) => {
            let region = prompter
                .text(&TextQuestion::new("Enter the AWS Region:").default_to(seeded.region))?;
            let access_key_id = prompter.text(
                &TextQuestion::new("Enter the Access Key ID:").default_to(seeded.access_key_id),
            )?;
            ProviderFields::Route53 {
                region,
                access_key_id,
            }
        }
        Some(DnsService::DigitalOcean) | None => ProviderFields::None,
    };

    Ok(TlsAnswers {
        enabled,
        email,
        issuer,
        dns_service,
        provider_fields,
    })
}

/// Options used when the final-configuration step is skipped or fails
pub fn default_options(catalog: &Catalog) -> OptionsAnswers {
    OptionsAnswers {
        audit_url: catalog.audit_url.clone(),
        version: catalog.version.clone(),
        network_policies: true,
        ..Default::default()
    }
}

pub fn ask_options(
    prompter: &mut dyn Prompter,
    catalog: &Catalog,
    seed: &InitDocument,
) -> Result<OptionsAnswers, PromptError> {
    let mut answers = default_options(catalog);

    let saved_audit = seed
        .slack
        .as_ref()
        .map(|s| s.url.as_str())
        .filter(|url| *url != catalog.audit_url)
        .unwrap_or_default();
    let custom_audit = prompter.confirm(
        &ConfirmQuestion::new("Would you like to use a custom audit trail URL (ie post to Slack)?")
            .default(!saved_audit.is_empty()),
    )?;
    if custom_audit {
        answers.audit_url = prompter.text(
            &TextQuestion::new("URL to post audit trail message to:")
                .rule(Rule::Required)
                .default_to(saved_audit),
        )?;
    }

    answers.customers_url = prompter.text(
        &TextQuestion::new("URL of the customers access control list:")
            .help("The raw text file, or GitHub raw URL of allowed users. This must be a public endpoint")
            .default_to(seed.customers_url.as_str()),
    )?;

    answers.dockerfile = prompter.confirm(
        &ConfirmQuestion::new("Would you like to enable the Dockerfile template?")
            .help("This will allow templates built using dockerfile to be deployed which will allow ANY workload to be built and run. Use with caution")
            .default(seed.enable_dockerfile_lang),
    )?;

    answers.scale_to_zero = prompter.confirm(
        &ConfirmQuestion::new("Would you like to enable scale-to-zero as the default?")
            .help("With this enabled, all functions will scale to zero. To turn off, add a label 'com.openfaas.scale.zero: false'")
            .default(seed.scale_to_zero),
    )?;

    // A saved version means this step ran before, so its saved flags are answers too
    let options_saved = !seed.openfaas_cloud_version.is_empty();
    let version_default = if options_saved {
        seed.openfaas_cloud_version.as_str()
    } else {
        catalog.version.as_str()
    };
    answers.version = prompter.text(
        &TextQuestion::new(format!(
            "Enter the version of OpenFaaS Cloud to use (blank for default: {})",
            version_default
        ))
        .help("See available versions here: https://github.com/openfaas/openfaas-cloud/releases/")
        .default_to(version_default),
    )?;

    answers.network_policies = prompter.confirm(
        &ConfirmQuestion::new(
            "Would you like to enable network policies (restrict functions from calling the openfaas namespace, recommended)",
        )
        .help("Prevents functions from talking to the openfaas namespace, and to each other. Use the ingress address for the gateway or external IP instead")
        .default(!options_saved || seed.network_policies),
    )?;

    answers.ingress = choose(
        prompter,
        "Choose which type of ingress to use:",
        &catalog.ingress_types,
        seed.ingress,
    )?;

    Ok(answers)
}
