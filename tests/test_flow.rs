//! Tests for the question flow and document assembly
//!
//! Flows are driven by a scripted prompter, so branching is verified by which
//! questions were asked and how many.

mod common;

use common::*;
use ofc_wizard::cli::{Answer, PromptKind, ScriptedPrompter};
use ofc_wizard::config::{DnsService, IngressType, InitDocument, IssuerType, ScmProvider};
use ofc_wizard::flow::catalog::{DEFAULT_AUDIT_URL, DEFAULT_STORAGE_URL, DEFAULT_VERSION};
use ofc_wizard::flow::groups::ask_tls;
use ofc_wizard::flow::validate::{EMAIL_MESSAGE, REGISTRY_SUFFIX_MESSAGE};
use ofc_wizard::flow::{Catalog, ProviderFields, Step, INSTALL_FLOW, OPTIONS_FLOW};

// ============================================================================
// Source control branching
// ============================================================================

#[test]
fn test_github_flow_leaves_gitlab_absent() {
    let mut prompter = script([
        initial("github", false),
        github(),
        bundled_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(prompter.remaining(), 0, "every scripted answer should be used");
    assert!(run.failed.is_empty());
    assert_eq!(run.doc.scm, Some(ScmProvider::Github));
    assert_eq!(run.doc.github.as_ref().map(|g| g.app_id.as_str()), Some("4242"));
    assert!(run.doc.gitlab.is_none(), "GitLab section must be absent for GitHub");
    assert!(!prompter.was_asked("Enter the public URL for your GitLab instance (with trailing slash):"));
}

#[test]
fn test_gitlab_flow_leaves_github_absent() {
    let mut prompter = script([
        initial("gitlab", false),
        gitlab(),
        bundled_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(prompter.remaining(), 0);
    assert_eq!(run.doc.scm, Some(ScmProvider::Gitlab));
    assert!(run.doc.github.is_none(), "GitHub section must be absent for GitLab");
    assert_eq!(
        run.doc.gitlab.as_ref().map(|g| g.gitlab_instance.as_str()),
        Some("https://gitlab.example.com/")
    );
    assert!(!prompter.was_asked("GitHub App ID:"));
    assert!(run.doc.secret("private-key").is_none());
}

#[test]
fn test_github_app_guidance_shown_when_not_set_up() {
    let mut github_not_ready = github();
    github_not_ready[0] = Answer::No;

    let mut prompter = script([
        initial("github", false),
        github_not_ready,
        bundled_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(prompter.guidance_shown().len(), 1);
    assert!(prompter.guidance_shown()[0].contains("GitHub app"));
}

// ============================================================================
// OAuth
// ============================================================================

#[test]
fn test_oauth_disabled_skips_group_and_section() {
    let mut prompter = script([
        initial("github", false),
        github(),
        bundled_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert!(run.answers.oauth.is_none());
    assert!(run.doc.oauth.is_none());
    assert!(!run.doc.enable_oauth);
    assert!(!prompter.was_asked("Enter the OAuth App ID:"));
}

#[test]
fn test_oauth_for_github_has_no_base_url() {
    let mut prompter = script([
        initial("github", true),
        github(),
        oauth("github"),
        bundled_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    let oauth = run.doc.oauth.expect("OAuth section should be present");
    assert_eq!(oauth.client_id, "client-123");
    assert!(oauth.oauth_provider_base_url.is_empty());
    assert!(run.doc.enable_oauth);
}

#[test]
fn test_oauth_for_gitlab_asks_base_url() {
    let mut prompter = script([
        initial("gitlab", true),
        gitlab(),
        oauth("gitlab"),
        bundled_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(prompter.remaining(), 0);
    let oauth = run.doc.oauth.expect("OAuth section should be present");
    assert_eq!(oauth.oauth_provider_base_url, "https://gitlab.example.com");
}

#[test]
fn test_oauth_app_guidance_shown_when_not_created() {
    let mut oauth_not_ready = oauth("gitlab");
    oauth_not_ready[0] = Answer::No;

    let mut prompter = script([
        initial("gitlab", true),
        gitlab(),
        oauth_not_ready,
        bundled_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(prompter.remaining(), 0);
    assert_eq!(prompter.guidance_shown().len(), 1);
    assert!(prompter.guidance_shown()[0].contains("OAuth App"));
    let oauth = run.doc.oauth.expect("OAuth section should be present");
    assert_eq!(oauth.client_id, "client-123");
}

// ============================================================================
// Storage
// ============================================================================

#[test]
fn test_declining_custom_storage_uses_bundled_defaults() {
    let mut prompter = script([
        initial("github", false),
        github(),
        bundled_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(run.doc.s3.s3_url, DEFAULT_STORAGE_URL);
    assert_eq!(run.doc.s3.s3_region, "us-east-1");
    assert_eq!(run.doc.s3.s3_bucket, "pipeline");
    assert!(!run.doc.s3.s3_tls);
}

#[test]
fn test_custom_storage_values() {
    let mut prompter = script([
        initial("github", false),
        github(),
        custom_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(run.doc.s3.s3_url, "s3.amazonaws.com");
    assert_eq!(run.doc.s3.s3_region, "eu-west-1");
    assert_eq!(run.doc.s3.s3_bucket, "ofc-logs");
    assert!(run.doc.s3.s3_tls);
}

// ============================================================================
// TLS and DNS
// ============================================================================

#[test]
fn test_declining_tls_asks_nothing_further() {
    let mut prompter = script([
        initial("github", false),
        github(),
        bundled_storage(),
        dns("AWS Route 53"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    let last = prompter.asked().last().expect("questions were asked");
    assert_eq!(last.kind, PromptKind::Confirm);
    assert_eq!(last.message, "Would you like to enable TLS? (recommended)");

    assert!(!run.doc.tls);
    assert!(run.doc.tls_config.is_none());
}

/// Text prompts asked by the TLS group once TLS is enabled
fn tls_text_prompts(dns_service: Option<DnsService>, extra: Vec<Answer>) -> (usize, ProviderFields) {
    let catalog = Catalog::openfaas_cloud();
    let mut prompter = script([tls("prod"), extra]);

    let answers = ask_tls(&mut prompter, &catalog, dns_service, &InitDocument::default())
        .expect("TLS group should complete");
    assert_eq!(prompter.remaining(), 0);

    // The email address is always asked
    (prompter.count(PromptKind::Text) - 1, answers.provider_fields)
}

#[test]
fn test_clouddns_asks_one_extra_prompt() {
    let (extra, fields) = tls_text_prompts(
        Some(DnsService::CloudDns),
        vec![Answer::text("my-gcp-project")],
    );
    assert_eq!(extra, 1);
    assert_eq!(
        fields,
        ProviderFields::CloudDns {
            project_id: "my-gcp-project".to_string()
        }
    );
}

#[test]
fn test_route53_asks_two_extra_prompts() {
    let (extra, fields) = tls_text_prompts(
        Some(DnsService::Route53),
        vec![Answer::text("us-east-2"), Answer::text("AKIAEXAMPLE")],
    );
    assert_eq!(extra, 2);
    assert_eq!(
        fields,
        ProviderFields::Route53 {
            region: "us-east-2".to_string(),
            access_key_id: "AKIAEXAMPLE".to_string()
        }
    );
}

#[test]
fn test_digitalocean_asks_no_extra_prompts() {
    let (extra, fields) = tls_text_prompts(Some(DnsService::DigitalOcean), vec![]);
    assert_eq!(extra, 0);
    assert_eq!(fields, ProviderFields::None);
}

#[test]
fn test_full_tls_flow_with_route53() {
    let mut prompter = script([
        initial("github", false),
        github(),
        bundled_storage(),
        dns("AWS Route 53"),
        tls("staging"),
        vec![Answer::text("us-east-2"), Answer::text("AKIAEXAMPLE")],
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(prompter.remaining(), 0);
    assert!(run.doc.tls);
    let tls = run.doc.tls_config.as_ref().expect("TLS config should be present");
    assert_eq!(tls.email, EMAIL);
    assert_eq!(tls.issuer_type, IssuerType::Staging);
    assert_eq!(tls.dns_service, Some(DnsService::Route53));
    assert_eq!(tls.region, "us-east-2");
    assert_eq!(tls.access_key_id, "AKIAEXAMPLE");
    assert!(tls.project_id.is_empty());

    let secret = run
        .doc
        .secret("route53-credentials-secret")
        .expect("DNS credential secret should be written");
    assert_eq!(secret.namespace, "cert-manager");
    assert_eq!(secret.filters, vec!["route53_dns01".to_string()]);
    assert_eq!(secret.files[0].value_from, "/home/ofc/aws-route-53");
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_registry_without_trailing_slash_is_asked_again() {
    let mut first = initial("github", false);
    first.insert(2, Answer::text("docker.io/ofc"));

    let mut prompter = script([
        first,
        github(),
        bundled_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(prompter.rejections(), &[REGISTRY_SUFFIX_MESSAGE.to_string()]);
    assert_eq!(run.doc.registry, REGISTRY);
}

#[test]
fn test_email_without_at_sign_is_asked_again() {
    let catalog = Catalog::openfaas_cloud();
    let mut prompter = ScriptedPrompter::new([
        Answer::Yes,
        Answer::text("ops.example.com"),
        Answer::text(EMAIL),
        Answer::choice("prod"),
    ]);

    let answers = ask_tls(&mut prompter, &catalog, None, &InitDocument::default()).unwrap();

    assert_eq!(prompter.rejections(), &[EMAIL_MESSAGE.to_string()]);
    assert_eq!(answers.email, EMAIL);
}

// ============================================================================
// Prompt failures
// ============================================================================

#[test]
fn test_failed_groups_fall_back_and_flow_continues() {
    // Script ends after the initial group
    let mut prompter = script([initial("github", false)]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(
        run.failed,
        vec![Step::GitHub, Step::Storage, Step::Dns, Step::Tls]
    );
    assert_eq!(run.doc.root_domain, ROOT_DOMAIN);
    assert!(run.doc.github.is_some());
    assert!(run.doc.gitlab.is_none());
    assert_eq!(run.doc.s3.s3_url, DEFAULT_STORAGE_URL);
    assert!(run.answers.dns.is_none());
    assert!(!run.doc.tls);
}

#[test]
fn test_failed_initial_group_skips_scm_steps() {
    let mut prompter = ScriptedPrompter::new([]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert_eq!(run.failed.first(), Some(&Step::Initial));
    assert!(!run.failed.contains(&Step::GitHub));
    assert!(!run.failed.contains(&Step::GitLab));
    assert!(run.doc.scm.is_none());
    assert!(run.doc.github.is_none());
    assert!(run.doc.gitlab.is_none());
}

// ============================================================================
// Final configuration
// ============================================================================

#[test]
fn test_options_flow_defaults() {
    let mut prompter = ScriptedPrompter::new([
        Answer::No,
        Answer::blank(),
        Answer::No,
        Answer::No,
        Answer::blank(),
        Answer::Default,
        Answer::Default,
    ]);
    let run = run_flow(&mut prompter, OPTIONS_FLOW);

    assert_eq!(prompter.remaining(), 0);
    assert_eq!(run.doc.slack.as_ref().map(|s| s.url.as_str()), Some(DEFAULT_AUDIT_URL));
    assert_eq!(run.doc.openfaas_cloud_version, DEFAULT_VERSION);
    assert!(run.doc.network_policies);
    assert_eq!(run.doc.ingress, Some(IngressType::Loadbalancer));
    assert!(run.doc.customers_url.is_empty());
}

#[test]
fn test_options_flow_custom_values() {
    let mut prompter = ScriptedPrompter::new([
        Answer::Yes,
        Answer::text("https://hooks.slack.com/services/T000/B000/XXX"),
        Answer::text("https://example.com/CUSTOMERS"),
        Answer::Yes,
        Answer::Yes,
        Answer::text("0.9.8"),
        Answer::No,
        Answer::choice("host"),
    ]);
    let run = run_flow(&mut prompter, OPTIONS_FLOW);

    assert_eq!(prompter.remaining(), 0);
    assert_eq!(
        run.doc.slack.as_ref().map(|s| s.url.as_str()),
        Some("https://hooks.slack.com/services/T000/B000/XXX")
    );
    assert_eq!(run.doc.customers_url, "https://example.com/CUSTOMERS");
    assert!(run.doc.enable_dockerfile_lang);
    assert!(run.doc.scale_to_zero);
    assert_eq!(run.doc.openfaas_cloud_version, "0.9.8");
    assert!(!run.doc.network_policies);
    assert_eq!(run.doc.ingress, Some(IngressType::Host));
}

#[test]
fn test_install_flow_does_not_ask_final_options() {
    let mut prompter = script([
        initial("github", false),
        github(),
        bundled_storage(),
        dns("DigitalOcean"),
        tls_declined(),
    ]);
    let run = run_flow(&mut prompter, INSTALL_FLOW);

    assert!(run.answers.options.is_none());
    assert!(run.doc.slack.is_none());
    assert!(!prompter.was_asked("Choose which type of ingress to use:"));
}
