//! Answer records, one per question group
//!
//! Each record is produced once by its group and consumed once by the
//! assembler. `Default` is the zero-value fallback used when a group fails.

use crate::config::{DnsService, IngressType, IssuerType, Orchestrator, ScmProvider};
use crate::flow::catalog::{DEFAULT_STORAGE_BUCKET, DEFAULT_STORAGE_REGION, DEFAULT_STORAGE_URL};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialAnswers {
    pub orchestrator: Orchestrator,
    pub root_domain: String,
    pub registry: String,
    pub scm: ScmProvider,
    pub enable_oauth: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GithubAnswers {
    pub app_id: String,
    /// Blank means the bootstrap tool generates a random secret
    pub webhook_secret: String,
    pub private_key_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitlabAnswers {
    /// Blank means the bootstrap tool generates a random secret
    pub webhook_secret_path: String,
    pub instance_url: String,
}

/// Answers of whichever source-control sub-flow ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScmAnswers {
    GitHub(GithubAnswers),
    GitLab(GitlabAnswers),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthAnswers {
    /// Blank means the OAuth app is not configured yet
    pub client_id: String,
    /// Only asked for GitLab
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageAnswers {
    pub url: String,
    pub region: String,
    pub bucket: String,
    pub tls: bool,
}

impl Default for StorageAnswers {
    /// The bundled Minio service
    fn default() -> Self {
        Self {
            url: DEFAULT_STORAGE_URL.to_string(),
            region: DEFAULT_STORAGE_REGION.to_string(),
            bucket: DEFAULT_STORAGE_BUCKET.to_string(),
            tls: false,
        }
    }
}

/// Expected credential file name paired with the local path holding it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialFile {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswers {
    pub service: DnsService,
    pub id: String,
    pub filters: Vec<String>,
    pub credential: CredentialFile,
}

/// Extra TLS fields that exist for one DNS service only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProviderFields {
    #[default]
    None,
    CloudDns {
        project_id: String,
    },
    Route53 {
        region: String,
        access_key_id: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsAnswers {
    pub enabled: bool,
    pub email: String,
    pub issuer: IssuerType,
    pub dns_service: Option<DnsService>,
    pub provider_fields: ProviderFields,
}

/// Final platform options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsAnswers {
    pub audit_url: String,
    pub customers_url: String,
    pub dockerfile: bool,
    pub scale_to_zero: bool,
    pub version: String,
    pub network_policies: bool,
    pub ingress: IngressType,
}

/// Everything collected during one run. `None` means the group did not run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub initial: Option<InitialAnswers>,
    pub scm: Option<ScmAnswers>,
    pub oauth: Option<OAuthAnswers>,
    pub storage: Option<StorageAnswers>,
    pub dns: Option<DnsAnswers>,
    pub tls: Option<TlsAnswers>,
    pub options: Option<OptionsAnswers>,
}

impl Answers {
    pub fn scm_provider(&self) -> Option<ScmProvider> {
        self.initial.as_ref().map(|i| i.scm)
    }

    pub fn oauth_enabled(&self) -> bool {
        self.initial.as_ref().is_some_and(|i| i.enable_oauth)
    }

    pub fn dns_service(&self) -> Option<DnsService> {
        self.dns.as_ref().map(|d| d.service)
    }
}
