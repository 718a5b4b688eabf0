//! Static lookup tables for the question flow
//!
//! A [`Catalog`] is built once at startup and handed to the wizard by
//! reference. Nothing in it changes at runtime.

use crate::config::{DnsService, IngressType, IssuerType, Orchestrator, ScmProvider};
use crate::flow::answers::StorageAnswers;

pub const DEFAULT_VERSION: &str = "0.9.7";
pub const DEFAULT_AUDIT_URL: &str = "http://gateway.openfaas:8080/function/echo";

pub const DEFAULT_STORAGE_URL: &str = "cloud-minio.openfaas.svc.cluster.local:9000";
pub const DEFAULT_STORAGE_REGION: &str = "us-east-1";
pub const DEFAULT_STORAGE_BUCKET: &str = "pipeline";

pub const CREATE_GITHUB_APP_HELP: &str = "Create a GitHub app by following the instructions in the docs: https://docs.openfaas.com/openfaas-cloud/self-hosted/github/";
pub const CREATE_OAUTH_APP_HELP: &str =
    "Create the OAuth App on your source control management system";

/// Supported DNS / certificate-issuance integration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsProvider {
    /// Name shown in the selection list
    pub display_name: &'static str,
    pub service: DnsService,
    /// Secret name the bootstrap tool looks up
    pub id: &'static str,
    /// Tags used to pick the matching certificate-issuer webhook
    pub filters: &'static [&'static str],
    /// File name the credential is mounted as
    pub credential_file: &'static str,
    pub help: &'static str,
}

pub const DIGITALOCEAN_DNS: DnsProvider = DnsProvider {
    display_name: "DigitalOcean",
    service: DnsService::DigitalOcean,
    id: "digitalocean-dns",
    filters: &["do_dns01"],
    credential_file: "access-token",
    help: "Create a Personal Access Token and save it into a file, with no new lines",
};

pub const CLOUD_DNS: DnsProvider = DnsProvider {
    display_name: "Google Cloud",
    service: DnsService::CloudDns,
    id: "clouddns-service-account",
    filters: &["gcp_dns01"],
    credential_file: "service-account.json",
    help: "Create a service account for DNS management and export it",
};

pub const ROUTE53_DNS: DnsProvider = DnsProvider {
    display_name: "AWS Route 53",
    service: DnsService::Route53,
    id: "route53-credentials-secret",
    filters: &["route53_dns01"],
    credential_file: "secret-access-key",
    help: "Create a role and download its secret access key",
};

/// Immutable option and default tables used by every question group
#[derive(Debug, Clone)]
pub struct Catalog {
    pub orchestrators: Vec<Orchestrator>,
    pub scm_providers: Vec<ScmProvider>,
    pub dns_providers: Vec<DnsProvider>,
    pub issuer_types: Vec<IssuerType>,
    pub ingress_types: Vec<IngressType>,
    /// Bundled storage service used unless custom storage is requested
    pub storage: StorageAnswers,
    pub audit_url: String,
    pub version: String,
    pub github_app_help: String,
    pub oauth_app_help: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::openfaas_cloud()
    }
}

impl Catalog {
    /// Tables for the OpenFaaS Cloud bootstrap tool
    pub fn openfaas_cloud() -> Self {
        Self {
            orchestrators: Orchestrator::ALL.to_vec(),
            scm_providers: ScmProvider::ALL.to_vec(),
            dns_providers: vec![DIGITALOCEAN_DNS, CLOUD_DNS, ROUTE53_DNS],
            issuer_types: IssuerType::ALL.to_vec(),
            ingress_types: IngressType::ALL.to_vec(),
            storage: StorageAnswers::default(),
            audit_url: DEFAULT_AUDIT_URL.to_string(),
            version: DEFAULT_VERSION.to_string(),
            github_app_help: CREATE_GITHUB_APP_HELP.to_string(),
            oauth_app_help: CREATE_OAUTH_APP_HELP.to_string(),
        }
    }
}
