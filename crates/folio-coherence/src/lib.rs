//! Cross-document consistency checker.
//!
//! Compares a markdown page and an HTML page that are maintained by hand and
//! must agree on two facts: the set of linked pull requests, and the
//! deployment status of each known project. Disagreements become findings;
//! the run never stops early.

mod extract;
mod reconcile;
mod report;

pub use extract::{
    CLOUD_SECTION_END_MARKERS, CLOUD_SECTION_MARKER, HtmlStatuses, extract_html_statuses,
    extract_markdown_statuses, extract_pull_request_references, isolate_section,
};
pub use reconcile::{
    DocumentLabels, PullRequestDelta, pull_request_findings, reconcile_pull_requests,
    reconcile_statuses,
};
pub use report::{
    CHECK_KIND, ConsistencyReport, Outcome, PullRequestSummary, REPORT_SCHEMA, ReportPayload,
    run_consistency_check,
};
