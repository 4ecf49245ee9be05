//! Pure comparison of facts extracted from the two documents.

use folio_kernel::{CheckKind, Finding, ProjectRegistry, StatusMap};
use std::collections::BTreeSet;

/// Display names of the two documents, used in finding messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentLabels<'a> {
    pub markdown: &'a str,
    pub html: &'a str,
}

/// Pull-request URLs present on only one side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestDelta {
    pub only_in_a: BTreeSet<String>,
    pub only_in_b: BTreeSet<String>,
}

impl PullRequestDelta {
    pub fn is_empty(&self) -> bool {
        self.only_in_a.is_empty() && self.only_in_b.is_empty()
    }
}

pub fn reconcile_pull_requests(a: &BTreeSet<String>, b: &BTreeSet<String>) -> PullRequestDelta {
    PullRequestDelta {
        only_in_a: a.difference(b).cloned().collect(),
        only_in_b: b.difference(a).cloned().collect(),
    }
}

/// Findings for the PR-list check, with the markdown document as side A.
///
/// One error per one-sided URL in sorted order; a single info line when the
/// sets agree.
pub fn pull_request_findings(
    delta: &PullRequestDelta,
    markdown_count: usize,
    labels: DocumentLabels<'_>,
) -> Vec<Finding> {
    if delta.is_empty() {
        return vec![Finding::info(
            CheckKind::PullRequests,
            format!("PR lists match ({markdown_count} PRs in both files)"),
        )];
    }
    let only_markdown = delta.only_in_a.iter().map(|url| {
        Finding::error(
            CheckKind::PullRequests,
            format!(
                "PR in {} but missing from {}: {url}",
                labels.markdown, labels.html
            ),
        )
    });
    let only_html = delta.only_in_b.iter().map(|url| {
        Finding::error(
            CheckKind::PullRequests,
            format!(
                "PR in {} but missing from {}: {url}",
                labels.html, labels.markdown
            ),
        )
    });
    only_markdown.chain(only_html).collect()
}

/// Classify every known project's status across both documents.
///
/// `markdown == None` means the markdown document has no status table; the
/// comparison is skipped with a single info finding. Only registry keys are
/// looked up, so unknown labels in either map never surface.
pub fn reconcile_statuses(
    markdown: Option<&StatusMap>,
    html: &StatusMap,
    registry: &ProjectRegistry,
    labels: DocumentLabels<'_>,
) -> Vec<Finding> {
    let check = CheckKind::DeploymentStatus;
    let Some(markdown) = markdown else {
        return vec![Finding::info(
            check,
            format!(
                "{} has no cloud status table (statuses managed in {} only)",
                labels.markdown, labels.html
            ),
        )];
    };

    registry
        .iter()
        .map(|entry| {
            let label = entry.label.as_str();
            match (markdown.get(&entry.key), html.get(&entry.key)) {
                (None, None) => Finding::warning(
                    check,
                    format!("{label}: not found in either file's cloud section"),
                ),
                (None, Some(html_status)) => Finding::warning(
                    check,
                    format!(
                        "{label}: found in {} ({html_status}) but not in {} cloud table",
                        labels.html, labels.markdown
                    ),
                ),
                (Some(markdown_status), None) => Finding::warning(
                    check,
                    format!(
                        "{label}: found in {} ({markdown_status}) but not in {} cloud section",
                        labels.markdown, labels.html
                    ),
                ),
                (Some(markdown_status), Some(html_status)) if markdown_status != html_status => {
                    Finding::error(
                        check,
                        format!(
                            "{label}: {} says '{markdown_status}' but {} says '{html_status}'",
                            labels.markdown, labels.html
                        ),
                    )
                }
                (Some(markdown_status), Some(_)) => {
                    Finding::info(check, format!("{label} -> {markdown_status}"))
                }
            }
        })
        .collect()
}
