//! Findings emitted by a consistency run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a finding.
///
/// Only [`Severity::Error`] fails a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Which of the two checks produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    PullRequests,
    DeploymentStatus,
}

impl CheckKind {
    /// Section title used in the text report.
    pub fn title(self) -> &'static str {
        match self {
            Self::PullRequests => "PR List",
            Self::DeploymentStatus => "Cloud Deployment Statuses",
        }
    }
}

/// One detected fact about the pair of documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub check: CheckKind,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn info(check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            check,
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            check,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            check,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Info => write!(f, "OK: {}", self.message),
            Severity::Warning => write!(f, "WARN:  {}", self.message),
            Severity::Error => write!(f, "ERROR: {}", self.message),
        }
    }
}
