//! Run orchestration and report rendering.

use crate::extract::{
    CLOUD_SECTION_MARKER, extract_html_statuses, extract_markdown_statuses,
    extract_pull_request_references,
};
use crate::reconcile::{
    DocumentLabels, PullRequestDelta, pull_request_findings, reconcile_pull_requests,
    reconcile_statuses,
};
use folio_kernel::{CheckKind, Document, Finding, ProjectRegistry, Severity, StatusMap};
use serde::Serialize;
use std::fmt::Write;

pub const CHECK_KIND: &str = "folio.consistency_check.v1";
pub const REPORT_SCHEMA: u64 = 1;

const CHECK_ORDER: [CheckKind; 2] = [CheckKind::PullRequests, CheckKind::DeploymentStatus];

/// Binary result of a run: warnings alone never fail it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn is_passed(self) -> bool {
        self == Self::Passed
    }

    /// Result token used in the JSON payload.
    pub fn result_token(self) -> &'static str {
        match self {
            Self::Passed => "accepted",
            Self::Failed => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestSummary {
    pub markdown: usize,
    pub html: usize,
    pub only_in_markdown: Vec<String>,
    pub only_in_html: Vec<String>,
}

/// Everything one run found. Owned by a single [`run_consistency_check`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyReport {
    markdown_label: String,
    html_label: String,
    pull_requests: PullRequestSummary,
    status_table_present: bool,
    html_section_found: bool,
    findings: Vec<Finding>,
}

/// Serializable view of a [`ConsistencyReport`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload<'a> {
    pub schema: u64,
    pub check_kind: &'static str,
    pub result: &'static str,
    pub markdown: &'a str,
    pub html: &'a str,
    pub pull_requests: &'a PullRequestSummary,
    pub status_table_present: bool,
    pub html_section_found: bool,
    pub findings: &'a [Finding],
    pub warnings: Vec<&'a str>,
    pub errors: Vec<&'a str>,
}

/// Run the PR-list check and the deployment-status check over two documents.
///
/// Every discrepancy is collected; neither check stops the other.
pub fn run_consistency_check(
    markdown: &Document,
    html: &Document,
    registry: &ProjectRegistry,
) -> ConsistencyReport {
    let labels = DocumentLabels {
        markdown: markdown.label(),
        html: html.label(),
    };
    let mut findings = Vec::new();

    let markdown_prs = extract_pull_request_references(markdown.text());
    let html_prs = extract_pull_request_references(html.text());
    let delta: PullRequestDelta = reconcile_pull_requests(&markdown_prs, &html_prs);
    tracing::debug!(
        markdown = markdown_prs.len(),
        html = html_prs.len(),
        only_markdown = delta.only_in_a.len(),
        only_html = delta.only_in_b.len(),
        "pull request references"
    );
    findings.extend(pull_request_findings(&delta, markdown_prs.len(), labels));

    let markdown_statuses = extract_markdown_statuses(markdown.text())
        .map(|statuses| known_only(statuses, registry, labels.markdown));
    let html_statuses = extract_html_statuses(html.text());
    let html_section_found = html_statuses.is_found();
    if !html_section_found {
        findings.push(Finding::warning(
            CheckKind::DeploymentStatus,
            format!(
                "Could not locate {CLOUD_SECTION_MARKER} section in {}; skipping status check",
                labels.html
            ),
        ));
    }
    let html_statuses = known_only(html_statuses.into_map(), registry, labels.html);
    findings.extend(reconcile_statuses(
        markdown_statuses.as_ref(),
        &html_statuses,
        registry,
        labels,
    ));

    ConsistencyReport {
        markdown_label: labels.markdown.to_string(),
        html_label: labels.html.to_string(),
        pull_requests: PullRequestSummary {
            markdown: markdown_prs.len(),
            html: html_prs.len(),
            only_in_markdown: delta.only_in_a.into_iter().collect(),
            only_in_html: delta.only_in_b.into_iter().collect(),
        },
        status_table_present: markdown_statuses.is_some(),
        html_section_found,
        findings,
    }
}

fn known_only(statuses: StatusMap, registry: &ProjectRegistry, source: &str) -> StatusMap {
    statuses
        .into_iter()
        .filter(|(key, _)| {
            let known = registry.contains(key);
            if !known {
                tracing::debug!(%key, source, "discarding status for unknown project");
            }
            known
        })
        .collect()
}

impl ConsistencyReport {
    pub fn outcome(&self) -> Outcome {
        if self.findings.iter().any(Finding::is_error) {
            Outcome::Failed
        } else {
            Outcome::Passed
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|finding| finding.is_warning())
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|finding| finding.is_error())
    }

    pub fn pull_requests(&self) -> &PullRequestSummary {
        &self.pull_requests
    }

    pub fn status_table_present(&self) -> bool {
        self.status_table_present
    }

    pub fn html_section_found(&self) -> bool {
        self.html_section_found
    }

    /// Render the human-readable report printed on stdout.
    pub fn render_text(&self) -> String {
        let mut output = String::new();
        for (idx, check) in CHECK_ORDER.iter().enumerate() {
            if idx > 0 {
                let _ = writeln!(output);
            }
            let _ = writeln!(output, "=== {} ===", check.title());
            for finding in self
                .findings
                .iter()
                .filter(|finding| finding.check == *check && finding.severity == Severity::Info)
            {
                let _ = writeln!(output, "  {finding}");
            }
        }

        let warnings: Vec<&Finding> = self.warnings().collect();
        if !warnings.is_empty() {
            let _ = writeln!(output, "\n=== Warnings ===");
            for warning in warnings {
                let _ = writeln!(output, "  {warning}");
            }
        }

        let errors: Vec<&Finding> = self.errors().collect();
        if !errors.is_empty() {
            let _ = writeln!(output, "\n=== Failures ===");
            for error in &errors {
                let _ = writeln!(output, "  {error}");
            }
            let _ = writeln!(
                output,
                "\nFAILED: {} error(s). {} and {} are out of sync.",
                errors.len(),
                self.markdown_label,
                self.html_label
            );
        } else {
            let _ = writeln!(
                output,
                "\nPASSED: {} and {} are consistent.",
                self.markdown_label, self.html_label
            );
        }
        output
    }

    pub fn payload(&self) -> ReportPayload<'_> {
        ReportPayload {
            schema: REPORT_SCHEMA,
            check_kind: CHECK_KIND,
            result: self.outcome().result_token(),
            markdown: &self.markdown_label,
            html: &self.html_label,
            pull_requests: &self.pull_requests,
            status_table_present: self.status_table_present,
            html_section_found: self.html_section_found,
            findings: &self.findings,
            warnings: self.warnings().map(|f| f.message.as_str()).collect(),
            errors: self.errors().map(|f| f.message.as_str()).collect(),
        }
    }
}
