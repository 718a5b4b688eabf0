//! The `init.yml` document consumed by the OpenFaaS Cloud bootstrap tool
//!
//! Every section mirrors a key of the persisted file. Optional sections are
//! `Option`s and optional scalars are skipped when empty, so a field that was
//! never populated is omitted from the written file instead of being written
//! as an empty value.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Enumerated values
// ============================================================================

/// Container orchestrator the platform is deployed onto
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orchestrator {
    #[default]
    Kubernetes,
    Swarm,
}

impl Orchestrator {
    pub const ALL: [Orchestrator; 2] = [Orchestrator::Kubernetes, Orchestrator::Swarm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orchestrator::Kubernetes => "kubernetes",
            Orchestrator::Swarm => "swarm",
        }
    }
}

/// Code-hosting platform used for webhooks and OAuth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScmProvider {
    #[default]
    Github,
    Gitlab,
}

impl ScmProvider {
    pub const ALL: [ScmProvider; 2] = [ScmProvider::Github, ScmProvider::Gitlab];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScmProvider::Github => "github",
            ScmProvider::Gitlab => "gitlab",
        }
    }
}

/// Certificate issuer environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuerType {
    #[default]
    Prod,
    Staging,
}

impl IssuerType {
    pub const ALL: [IssuerType; 2] = [IssuerType::Prod, IssuerType::Staging];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssuerType::Prod => "prod",
            IssuerType::Staging => "staging",
        }
    }
}

/// How the gateway is exposed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngressType {
    #[default]
    Loadbalancer,
    Host,
}

impl IngressType {
    pub const ALL: [IngressType; 2] = [IngressType::Loadbalancer, IngressType::Host];

    pub fn as_str(&self) -> &'static str {
        match self {
            IngressType::Loadbalancer => "loadbalancer",
            IngressType::Host => "host",
        }
    }
}

/// DNS service used by cert-manager for DNS01 challenges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DnsService {
    DigitalOcean,
    CloudDns,
    Route53,
}

impl DnsService {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsService::DigitalOcean => "digitalocean",
            DnsService::CloudDns => "clouddns",
            DnsService::Route53 => "route53",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Orchestrator, ScmProvider, IssuerType, IngressType, DnsService);

// ============================================================================
// Document
// ============================================================================

/// Aggregate configuration written to `init.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orchestration: Option<Orchestrator>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<Secret>,

    pub registry: String,

    pub root_domain: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress: Option<IngressType>,

    #[serde(skip_serializing_if = "Deployment::is_empty")]
    pub deployment: Deployment,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm: Option<ScmProvider>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubSection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<GitlabSection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth: Option<OAuthSection>,

    /// Audit trail destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackSection>,

    /// Older wizard builds wrote this key misspelled
    #[serde(alias = "cusomter_url", skip_serializing_if = "String::is_empty")]
    pub customers_url: String,

    pub s3: StorageSection,

    pub enable_oauth: bool,

    pub tls: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsSection>,

    pub enable_dockerfile_lang: bool,

    pub scale_to_zero: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub openfaas_cloud_version: String,

    pub network_policies: bool,
}

impl InitDocument {
    /// Look up a secret by name
    pub fn secret(&self, name: &str) -> Option<&Secret> {
        self.secrets.iter().find(|s| s.name == name)
    }

    /// Replace the secret with the same name, or append it
    pub fn upsert_secret(&mut self, secret: Secret) {
        match self.secrets.iter_mut().find(|s| s.name == secret.name) {
            Some(existing) => *existing = secret,
            None => self.secrets.push(secret),
        }
    }

    /// Remove a secret by name, returning whether one was removed
    pub fn remove_secret(&mut self, name: &str) -> bool {
        let before = self.secrets.len();
        self.secrets.retain(|s| s.name != name);
        self.secrets.len() != before
    }

    /// Value of the first literal of a secret, if non-empty
    pub fn secret_literal(&self, name: &str) -> Option<&str> {
        self.secret(name)
            .and_then(|s| s.literals.first())
            .map(|l| l.value.as_str())
            .filter(|v| !v.is_empty())
    }

    /// `value_from` of the first file entry of a secret, if any
    pub fn secret_file(&self, name: &str) -> Option<&str> {
        self.secret(name)
            .and_then(|s| s.files.first())
            .map(|f| f.value_from.as_str())
            .filter(|v| !v.is_empty())
    }
}

/// Secret created by the bootstrap tool before deploying the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Secret {
    pub name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub literals: Vec<Literal>,

    /// Feature tags that decide whether the bootstrap tool creates the secret
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileValue>,
}

/// Literal secret value. An empty value is generated by the bootstrap tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Literal {
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

/// Secret value read from a local file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileValue {
    pub name: String,

    pub value_from: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_command: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_templates: Vec<String>,
}

impl Deployment {
    pub fn is_empty(&self) -> bool {
        self.custom_templates.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSection {
    pub app_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitlabSection {
    pub gitlab_instance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthSection {
    pub client_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub oauth_provider_base_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackSection {
    pub url: String,
}

/// S3-compatible storage for build logs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    pub s3_url: String,
    pub s3_region: String,
    pub s3_tls: bool,
    pub s3_bucket: String,
}

/// Certificate configuration. Provider-specific fields stay empty unless
/// their DNS service was selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsSection {
    pub issuer_type: IssuerType,

    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_service: Option<DnsService>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub access_key_id: String,
}
