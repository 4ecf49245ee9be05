//! Deployment status values.

use crate::project::ProjectKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Statuses reported by one document, keyed by normalized project.
pub type StatusMap = BTreeMap<ProjectKey, DeploymentStatus>;

/// Whether a tracked project is currently deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentStatus {
    Live,
    Deprovisioned,
}

impl DeploymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Deprovisioned => "deprovisioned",
        }
    }
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "deprovisioned" => Ok(Self::Deprovisioned),
            other => Err(format!(
                "unknown deployment status: {other:?} (expected live or deprovisioned)"
            )),
        }
    }
}
