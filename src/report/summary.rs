//! Summary table of the written configuration

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::config::InitDocument;

/// Key values of a configuration document, ready for display
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigSummary {
    pub rows: Vec<(String, String)>,
}

fn or_unset(value: &str) -> String {
    if value.is_empty() {
        "(not set)".to_string()
    } else {
        value.to_string()
    }
}

fn on_off(enabled: bool) -> String {
    let label = if enabled { "enabled" } else { "disabled" };
    label.to_string()
}

impl ConfigSummary {
    pub fn from_document(doc: &InitDocument) -> Self {
        let mut rows = vec![
            (
                "Orchestration".to_string(),
                doc.orchestration.map(|o| o.to_string()).unwrap_or_else(|| or_unset("")),
            ),
            ("Root Domain".to_string(), or_unset(&doc.root_domain)),
            ("Registry".to_string(), or_unset(&doc.registry)),
            (
                "SCM".to_string(),
                doc.scm.map(|s| s.to_string()).unwrap_or_else(|| or_unset("")),
            ),
        ];

        if let Some(github) = &doc.github {
            rows.push(("GitHub App ID".to_string(), or_unset(&github.app_id)));
        }
        if let Some(gitlab) = &doc.gitlab {
            rows.push(("GitLab Instance".to_string(), or_unset(&gitlab.gitlab_instance)));
        }

        rows.push(("OAuth".to_string(), on_off(doc.enable_oauth)));
        rows.push(("Storage".to_string(), or_unset(&doc.s3.s3_url)));
        rows.push(("TLS".to_string(), on_off(doc.tls)));

        if let Some(tls) = &doc.tls_config {
            rows.push(("Issuer".to_string(), tls.issuer_type.to_string()));
            rows.push((
                "DNS Service".to_string(),
                tls.dns_service.map(|d| d.to_string()).unwrap_or_else(|| or_unset("")),
            ));
        }

        if !doc.openfaas_cloud_version.is_empty() {
            rows.push(("Version".to_string(), doc.openfaas_cloud_version.clone()));
        }
        rows.push(("Secrets".to_string(), doc.secrets.len().to_string()));

        Self { rows }
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CONFIGURATION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Setting").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        for (label, value) in &self.rows {
            let cell = match value.as_str() {
                "enabled" => Cell::new(value).fg(Color::Green),
                "disabled" | "(not set)" => Cell::new(value).fg(Color::Yellow),
                _ => Cell::new(value),
            };
            table.add_row(vec![Cell::new(label), cell]);
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
