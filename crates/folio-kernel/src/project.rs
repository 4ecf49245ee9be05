//! Project keys and the closed registry of known projects.
//!
//! Both documents name projects by human-readable labels that drift in
//! punctuation, casing and markup. [`normalize`] collapses a label to a
//! [`ProjectKey`], which is the join key between documents. Only keys present
//! in the [`ProjectRegistry`] take part in the status check.

use crate::error::FolioError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Labels of the projects tracked when no registry file is configured.
pub const BUILTIN_PROJECT_LABELS: [&str; 4] = [
    "Retail Forecast Dashboard",
    "Feature Flag Platform",
    "Workflow Orchestrator",
    "Streaming ETL Pipeline",
];

/// Normalized project identifier: lowercase ASCII letters and digits only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectKey(String);

impl ProjectKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalize a display label into a [`ProjectKey`].
///
/// Lowercases, then drops every character that is not an ASCII letter or
/// digit. Idempotent: `normalize(normalize(x).as_str()) == normalize(x)`.
pub fn normalize(label: &str) -> ProjectKey {
    ProjectKey(
        label
            .chars()
            .flat_map(char::to_lowercase)
            .filter(char::is_ascii_alphanumeric)
            .collect(),
    )
}

/// One known project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub key: ProjectKey,
    pub label: String,
}

/// Ordered, duplicate-free set of known projects.
///
/// Iteration follows declaration order so reports are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRegistry {
    entries: Vec<ProjectEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    #[serde(default)]
    project: Vec<RegistryFileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFileEntry {
    label: String,
}

impl ProjectRegistry {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PROJECT_LABELS
                .iter()
                .map(|label| ProjectEntry {
                    key: normalize(label),
                    label: (*label).to_string(),
                })
                .collect(),
        }
    }

    /// Build a registry from display labels, rejecting empty and colliding keys.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, FolioError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut seen = BTreeSet::new();
        for (idx, raw) in labels.into_iter().enumerate() {
            let label = raw.as_ref().trim();
            if label.is_empty() {
                return Err(FolioError::Registry(format!(
                    "project[{idx}]: non-empty label required"
                )));
            }
            let key = normalize(label);
            if key.is_empty() {
                return Err(FolioError::Registry(format!(
                    "project[{idx}]: label {label:?} has no letters or digits"
                )));
            }
            if !seen.insert(key.clone()) {
                return Err(FolioError::Registry(format!(
                    "project[{idx}]: label {label:?} duplicates key {key:?}",
                    key = key.as_str()
                )));
            }
            entries.push(ProjectEntry {
                key,
                label: label.to_string(),
            });
        }
        if entries.is_empty() {
            return Err(FolioError::Registry(
                "at least one [[project]] entry required".to_string(),
            ));
        }
        Ok(Self { entries })
    }

    /// Parse a registry from TOML text of the form `[[project]] label = "..."`.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, FolioError> {
        let parsed: RegistryFile =
            toml::from_str(text).map_err(|source| FolioError::ParseRegistry {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_labels(parsed.project.iter().map(|row| row.label.as_str()))
    }

    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let text = fs::read_to_string(path).map_err(|source| FolioError::ReadRegistry {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    pub fn contains(&self, key: &ProjectKey) -> bool {
        self.entries.iter().any(|entry| &entry.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectEntry> {
        self.entries.iter()
    }
}
