//! # Folio Kernel
//!
//! Shared vocabulary for checking that two hand-maintained documents (a
//! markdown page and an HTML page) describe the same facts.
//!
//! This crate holds no matching logic. It defines what a document, a project
//! key, a deployment status and a finding are, and how the closed set of known
//! projects is configured.
//!
//! ## Architecture
//!
//! ```text
//! Document              ← Raw text of one source (markdown or HTML)
//!     │
//! ProjectKey            ← normalize(label): lowercase, ASCII alphanumerics only
//!     │
//! ProjectRegistry       ← Closed, ordered set of known projects
//!     │
//! DeploymentStatus      ← live | deprovisioned
//!     │
//! Finding               ← (check, severity, message) emitted by a run
//! ```

pub mod document;
pub mod error;
pub mod finding;
pub mod project;
pub mod status;

pub use document::Document;
pub use error::FolioError;
pub use finding::{CheckKind, Finding, Severity};
pub use project::{ProjectEntry, ProjectKey, ProjectRegistry, normalize};
pub use status::{DeploymentStatus, StatusMap};
