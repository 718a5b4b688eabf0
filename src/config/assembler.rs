//! Maps answer records onto the configuration document
//!
//! Only sections whose group ran are touched, so values loaded from an
//! existing `init.yml` survive a partial run.

use tracing::debug;

use crate::config::document::{
    FileValue, GithubSection, GitlabSection, InitDocument, Literal, OAuthSection, Secret,
    SlackSection, StorageSection, TlsSection,
};
use crate::flow::answers::{
    Answers, DnsAnswers, GithubAnswers, GitlabAnswers, InitialAnswers, OAuthAnswers,
    OptionsAnswers, ProviderFields, ScmAnswers, StorageAnswers, TlsAnswers,
};
use crate::flow::catalog::Catalog;
use crate::flow::groups::PRIVATE_KEY_SECRET;

pub const GITHUB_WEBHOOK_SECRET: &str = "github-webhook-secret";
pub const GITLAB_WEBHOOK_SECRET: &str = "gitlab-webhook-secret";

pub const SCM_GITHUB_FILTER: &str = "scm_github";
pub const SCM_GITLAB_FILTER: &str = "scm_gitlab";

/// Namespace of secrets read by functions
pub const FUNCTIONS_NAMESPACE: &str = "openfaas-fn";
/// Namespace of secrets read by the certificate issuer
pub const CERT_MANAGER_NAMESPACE: &str = "cert-manager";

/// Apply every group that ran to `doc`
pub fn assemble(doc: &mut InitDocument, answers: &Answers, catalog: &Catalog) {
    if let Some(initial) = &answers.initial {
        apply_initial(doc, initial);
    }

    match &answers.scm {
        Some(ScmAnswers::GitHub(github)) => apply_github(doc, github),
        Some(ScmAnswers::GitLab(gitlab)) => apply_gitlab(doc, gitlab),
        None => {}
    }

    if let Some(oauth) = &answers.oauth {
        apply_oauth(doc, oauth);
    }

    if let Some(storage) = &answers.storage {
        apply_storage(doc, storage);
    }

    if let Some(dns) = &answers.dns {
        apply_dns(doc, dns, catalog);
    }

    if let Some(tls) = &answers.tls {
        apply_tls(doc, tls);
    }

    if let Some(options) = &answers.options {
        apply_options(doc, options);
    }
}

pub fn apply_initial(doc: &mut InitDocument, initial: &InitialAnswers) {
    doc.orchestration = Some(initial.orchestrator);
    doc.root_domain = initial.root_domain.clone();
    doc.registry = initial.registry.clone();
    doc.scm = Some(initial.scm);
    doc.enable_oauth = initial.enable_oauth;

    if !initial.enable_oauth {
        doc.oauth = None;
    }
}

pub fn apply_github(doc: &mut InitDocument, github: &GithubAnswers) {
    doc.github = Some(GithubSection {
        app_id: github.app_id.clone(),
    });
    doc.gitlab = None;
    doc.remove_secret(GITLAB_WEBHOOK_SECRET);

    doc.upsert_secret(Secret {
        name: GITHUB_WEBHOOK_SECRET.to_string(),
        literals: vec![Literal {
            name: GITHUB_WEBHOOK_SECRET.to_string(),
            value: github.webhook_secret.clone(),
        }],
        filters: vec![SCM_GITHUB_FILTER.to_string()],
        namespace: FUNCTIONS_NAMESPACE.to_string(),
        files: Vec::new(),
    });
    doc.upsert_secret(Secret {
        name: PRIVATE_KEY_SECRET.to_string(),
        literals: Vec::new(),
        filters: vec![SCM_GITHUB_FILTER.to_string()],
        namespace: FUNCTIONS_NAMESPACE.to_string(),
        files: vec![FileValue {
            name: PRIVATE_KEY_SECRET.to_string(),
            value_from: github.private_key_path.clone(),
            value_command: String::new(),
        }],
    });
}

pub fn apply_gitlab(doc: &mut InitDocument, gitlab: &GitlabAnswers) {
    doc.gitlab = Some(GitlabSection {
        gitlab_instance: gitlab.instance_url.clone(),
    });
    doc.github = None;
    doc.remove_secret(GITHUB_WEBHOOK_SECRET);
    doc.remove_secret(PRIVATE_KEY_SECRET);

    let mut secret = Secret {
        name: GITLAB_WEBHOOK_SECRET.to_string(),
        filters: vec![SCM_GITLAB_FILTER.to_string()],
        namespace: FUNCTIONS_NAMESPACE.to_string(),
        ..Default::default()
    };
    // An empty literal asks the bootstrap tool to generate the value
    if gitlab.webhook_secret_path.is_empty() {
        secret.literals.push(Literal {
            name: GITLAB_WEBHOOK_SECRET.to_string(),
            value: String::new(),
        });
    } else {
        secret.files.push(FileValue {
            name: GITLAB_WEBHOOK_SECRET.to_string(),
            value_from: gitlab.webhook_secret_path.clone(),
            value_command: String::new(),
        });
    }
    doc.upsert_secret(secret);
}

pub fn apply_oauth(doc: &mut InitDocument, oauth: &OAuthAnswers) {
    doc.oauth = Some(OAuthSection {
        client_id: oauth.client_id.clone(),
        oauth_provider_base_url: oauth.base_url.clone().unwrap_or_default(),
    });
}

pub fn apply_storage(doc: &mut InitDocument, storage: &StorageAnswers) {
    doc.s3 = StorageSection {
        s3_url: storage.url.clone(),
        s3_region: storage.region.clone(),
        s3_tls: storage.tls,
        s3_bucket: storage.bucket.clone(),
    };
}

/// Writes the credential secret and drops those of the other DNS providers
pub fn apply_dns(doc: &mut InitDocument, dns: &DnsAnswers, catalog: &Catalog) {
    for other in catalog.dns_providers.iter().filter(|p| p.id != dns.id) {
        if doc.remove_secret(other.id) {
            debug!(secret = other.id, "removed credentials of unused DNS provider");
        }
    }

    doc.upsert_secret(Secret {
        name: dns.id.clone(),
        literals: Vec::new(),
        filters: dns.filters.clone(),
        namespace: CERT_MANAGER_NAMESPACE.to_string(),
        files: vec![FileValue {
            name: dns.credential.name.clone(),
            value_from: dns.credential.path.clone(),
            value_command: String::new(),
        }],
    });
}

pub fn apply_tls(doc: &mut InitDocument, tls: &TlsAnswers) {
    doc.tls = tls.enabled;
    if !tls.enabled {
        doc.tls_config = None;
        return;
    }

    let mut section = TlsSection {
        issuer_type: tls.issuer,
        email: tls.email.clone(),
        dns_service: tls.dns_service,
        ..Default::default()
    };
    match &tls.provider_fields {
        ProviderFields::CloudDns { project_id } => section.project_id = project_id.clone(),
        ProviderFields::Route53 {
            region,
            access_key_id,
        } => {
            section.region = region.clone();
            section.access_key_id = access_key_id.clone();
        }
        ProviderFields::None => {}
    }
    doc.tls_config = Some(section);
}

pub fn apply_options(doc: &mut InitDocument, options: &OptionsAnswers) {
    doc.slack = Some(SlackSection {
        url: options.audit_url.clone(),
    });
    doc.customers_url = options.customers_url.clone();
    doc.enable_dockerfile_lang = options.dockerfile;
    doc.scale_to_zero = options.scale_to_zero;
    doc.openfaas_cloud_version = options.version.clone();
    doc.network_policies = options.network_policies;
    doc.ingress = Some(options.ingress);
}
