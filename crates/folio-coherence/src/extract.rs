//! Targeted fact extraction from raw document text.
//!
//! Nothing here parses markdown or HTML. Each extractor looks for one narrow
//! shape and ignores everything else.

use folio_kernel::{DeploymentStatus, StatusMap, normalize};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Attribute that opens the deployment-status section of the HTML page.
pub const CLOUD_SECTION_MARKER: &str = r#"id="cloud""#;

/// Markers that close the deployment-status section, whichever comes first.
pub const CLOUD_SECTION_END_MARKERS: [&str; 2] = ["<section", "</main"];

/// Outcome of reading deployment statuses from the HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlStatuses {
    /// The cloud section exists; the map may legitimately be empty.
    Found(StatusMap),
    /// No bounded cloud section was found.
    SectionMissing,
}

impl HtmlStatuses {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Statuses to compare against; empty when the section is missing.
    pub fn into_map(self) -> StatusMap {
        match self {
            Self::Found(map) => map,
            Self::SectionMissing => StatusMap::new(),
        }
    }
}

fn pull_request_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"https://github\.com/[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+/pull/\d+")
            .expect("pull request regex must compile")
    })
}

fn markdown_status_row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\|\s*([^|]+?)\s*\|\s*(live|deprovisioned)[^|]*\|")
            .expect("markdown status row regex must compile")
    })
}

fn html_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<h3(?:\s[^>]*)?>([^<]+)</h3>").expect("html heading regex must compile")
    })
}

fn html_status_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Status:\s*(?i:(live|deprovisioned))\b")
            .expect("html status regex must compile")
    })
}

/// Every `https://github.com/<owner>/<repo>/pull/<n>` URL in `text`.
pub fn extract_pull_request_references(text: &str) -> BTreeSet<String> {
    pull_request_re()
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// Statuses from `| <label> | Live ... |` style table rows.
///
/// Returns `None` when no row matched at all, which means the document has no
/// status table. Unknown labels are kept; filtering is the caller's job.
pub fn extract_markdown_statuses(text: &str) -> Option<StatusMap> {
    let mut statuses = StatusMap::new();
    let mut rows = 0usize;
    for caps in markdown_status_row_re().captures_iter(text) {
        let (Some(label), Some(token)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Ok(status) = token.as_str().parse::<DeploymentStatus>() else {
            continue;
        };
        rows += 1;
        statuses.insert(normalize(label.as_str()), status);
    }
    tracing::debug!(rows, keys = statuses.len(), "markdown status rows");
    (rows > 0).then_some(statuses)
}

/// The text strictly between `start_marker` and the earliest following end marker.
///
/// `None` when the start marker is absent or no end marker follows it.
pub fn isolate_section<'a>(
    text: &'a str,
    start_marker: &str,
    end_markers: &[&str],
) -> Option<&'a str> {
    let start = text.find(start_marker)? + start_marker.len();
    let tail = &text[start..];
    let end = end_markers
        .iter()
        .filter_map(|marker| tail.find(marker))
        .min()?;
    Some(&tail[..end])
}

/// Statuses from the HTML cloud section.
///
/// Each `Status: Live|Deprovisioned` token is attributed to the nearest `<h3>`
/// heading before it, regardless of the markup in between. A heading takes
/// only its first status; later tokens under it are ignored.
pub fn extract_html_statuses(text: &str) -> HtmlStatuses {
    let Some(section) = isolate_section(text, CLOUD_SECTION_MARKER, &CLOUD_SECTION_END_MARKERS)
    else {
        tracing::debug!(marker = CLOUD_SECTION_MARKER, "html cloud section not found");
        return HtmlStatuses::SectionMissing;
    };

    let headings: Vec<(usize, &str)> = html_heading_re()
        .captures_iter(section)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = caps.get(1)?;
            Some((whole.end(), label.as_str()))
        })
        .collect();

    let mut statuses = StatusMap::new();
    let mut claimed = vec![false; headings.len()];
    for caps in html_status_re().captures_iter(section) {
        let (Some(whole), Some(token)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Ok(status) = token.as_str().parse::<DeploymentStatus>() else {
            continue;
        };
        let Some(idx) = headings
            .iter()
            .rposition(|(heading_end, _)| *heading_end <= whole.start())
        else {
            tracing::debug!(offset = whole.start(), "html status without a preceding heading");
            continue;
        };
        if claimed[idx] {
            tracing::debug!(
                offset = whole.start(),
                heading = headings[idx].1,
                "html status after an already matched heading"
            );
            continue;
        }
        claimed[idx] = true;
        statuses.insert(normalize(headings[idx].1), status);
    }
    tracing::debug!(
        headings = headings.len(),
        keys = statuses.len(),
        "html cloud section statuses"
    );
    HtmlStatuses::Found(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(label: &str) -> folio_kernel::ProjectKey {
        normalize(label)
    }

    #[test]
    fn pull_requests_collapse_duplicates() {
        let text = "\
- https://github.com/apache/arrow-rs/pull/6021 (merged)
- [again](https://github.com/apache/arrow-rs/pull/6021)
- https://github.com/tokio-rs/tokio.rs/pull/7
";
        let found = extract_pull_request_references(text);
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec![
                "https://github.com/apache/arrow-rs/pull/6021".to_string(),
                "https://github.com/tokio-rs/tokio.rs/pull/7".to_string(),
            ]
        );
    }

    #[test]
    fn pull_requests_require_full_shape() {
        let text = "\
https://github.com/apache/arrow-rs/pull/
https://github.com/apache/pull/12
http://github.com/apache/arrow-rs/pull/12
https://github.com/apache/arrow-rs/issues/12
https://github.com/apache/arrow rs/pull/12
";
        assert!(extract_pull_request_references(text).is_empty());
    }

    #[test]
    fn markdown_statuses_absent_without_rows() {
        let text = "# Portfolio\n\n| Project | Stack |\n|---|---|\n| cachekit | C11 |\n";
        assert_eq!(extract_markdown_statuses(text), None);
    }

    #[test]
    fn markdown_statuses_read_table_rows() {
        let text = "\
| Project | Status | Link |
|---|---|---|
| Retail Forecast Dashboard | Live | [demo](https://example.com) |
| **Feature Flag Platform** | deprovisioned (cost) | - |
| Telemetry Node | LIVE |
";
        let statuses = extract_markdown_statuses(text).expect("table present");
        assert_eq!(statuses.len(), 3);
        assert_eq!(
            statuses.get(&key("Retail Forecast Dashboard")),
            Some(&DeploymentStatus::Live)
        );
        assert_eq!(
            statuses.get(&key("Feature Flag Platform")),
            Some(&DeploymentStatus::Deprovisioned)
        );
        assert_eq!(statuses.get(&key("Telemetry Node")), Some(&DeploymentStatus::Live));
    }

    #[test]
    fn markdown_later_row_overrides_earlier() {
        let text = "| Workflow Orchestrator | Live |\n| Workflow Orchestrator | Deprovisioned |\n";
        let statuses = extract_markdown_statuses(text).expect("table present");
        assert_eq!(
            statuses.get(&key("Workflow Orchestrator")),
            Some(&DeploymentStatus::Deprovisioned)
        );
    }

    #[test]
    fn isolate_section_stops_at_earliest_end_marker() {
        let text = r#"<main><section id="cloud"><h3>A</h3></main><section id="next">"#;
        assert_eq!(
            isolate_section(text, CLOUD_SECTION_MARKER, &CLOUD_SECTION_END_MARKERS),
            Some("><h3>A</h3>")
        );
    }

    #[test]
    fn isolate_section_requires_both_markers() {
        assert_eq!(
            isolate_section("<main></main>", CLOUD_SECTION_MARKER, &CLOUD_SECTION_END_MARKERS),
            None
        );
        assert_eq!(
            isolate_section(
                r#"<div id="cloud"><h3>A</h3>"#,
                CLOUD_SECTION_MARKER,
                &CLOUD_SECTION_END_MARKERS
            ),
            None
        );
    }

    #[test]
    fn html_statuses_missing_section() {
        let text = r#"<main><section id="projects"><h3>A</h3>Status: Live</section></main>"#;
        assert_eq!(extract_html_statuses(text), HtmlStatuses::SectionMissing);
        assert!(extract_html_statuses(text).into_map().is_empty());
    }

    #[test]
    fn html_statuses_tolerate_intervening_markup() {
        let text = r#"<main>
<section id="cloud">
  <article class="card">
    <h3>Feature Flag Platform</h3>
    <p class="stack">Go, Redis,
       Postgres</p>
    <span class="badge">Status:
      Deprovisioned</span>
  </article>
  <article class="card">
    <h3 class="title">Workflow Orchestrator</h3>
    <p>Status: live</p>
  </article>
</section>
<section id="contact"><h3>Retail Forecast Dashboard</h3>Status: Live</section>
</main>"#;
        let HtmlStatuses::Found(statuses) = extract_html_statuses(text) else {
            panic!("cloud section should be found");
        };
        assert_eq!(statuses.len(), 2);
        assert_eq!(
            statuses.get(&key("Feature Flag Platform")),
            Some(&DeploymentStatus::Deprovisioned)
        );
        assert_eq!(
            statuses.get(&key("Workflow Orchestrator")),
            Some(&DeploymentStatus::Live)
        );
        assert_eq!(statuses.get(&key("Retail Forecast Dashboard")), None);
    }

    #[test]
    fn html_status_uses_nearest_preceding_heading() {
        let text = r#"<section id="cloud">
<h3>Streaming ETL Pipeline</h3><p>No status yet</p>
<h3>Retail Forecast Dashboard</h3><p>Status: Live</p>
</main>"#;
        let statuses = extract_html_statuses(text).into_map();
        assert_eq!(statuses.len(), 1);
        assert_eq!(
            statuses.get(&key("Retail Forecast Dashboard")),
            Some(&DeploymentStatus::Live)
        );
    }

    #[test]
    fn html_trailing_legend_does_not_override_card_status() {
        let text = r#"<section id="cloud">
<h3>Retail Forecast Dashboard</h3><p>Status: Live</p>
<p class="legend">Legend: Status: Deprovisioned means the stack was torn down.</p>
</section></main>"#;
        let statuses = extract_html_statuses(text).into_map();
        assert_eq!(statuses.len(), 1);
        assert_eq!(
            statuses.get(&key("Retail Forecast Dashboard")),
            Some(&DeploymentStatus::Live)
        );
    }

    #[test]
    fn html_found_section_may_be_empty() {
        let text = r#"<section id="cloud"><p>Status: Live</p></section></main>"#;
        assert_eq!(
            extract_html_statuses(text),
            HtmlStatuses::Found(StatusMap::new())
        );
    }
}
