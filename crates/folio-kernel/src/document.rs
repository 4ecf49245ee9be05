//! Input documents.

use crate::error::FolioError;
use std::fs;
use std::path::Path;

/// Raw text of one source, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    label: String,
    text: String,
}

impl Document {
    /// Wrap text that did not come from disk.
    pub fn from_text(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Read a document from disk.
    ///
    /// A missing file is reported as [`FolioError::DocumentMissing`] so callers
    /// can tell "not found" apart from other read failures.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        if !path.is_file() {
            return Err(FolioError::DocumentMissing {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|source| FolioError::ReadDocument {
            path: path.to_path_buf(),
            source,
        })?;
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { label, text })
    }

    /// Display name used in report messages (the file name for loaded documents).
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(prefix: &str) -> PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "folio-kernel-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        path
    }

    #[test]
    fn load_reads_text_and_labels_by_file_name() {
        let dir = scratch_dir("load");
        let path = dir.join("README.md");
        fs::write(&path, "# Portfolio\n").expect("write readme");

        let doc = Document::load(&path).expect("load");
        assert_eq!(doc.label(), "README.md");
        assert_eq!(doc.text(), "# Portfolio\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = scratch_dir("missing");
        let path = dir.join("index.html");

        let err = Document::load(&path).expect_err("missing file");
        assert!(matches!(err, FolioError::DocumentMissing { .. }));
        assert!(err.to_string().ends_with("index.html not found"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_treats_directory_as_missing() {
        let dir = scratch_dir("dir");
        let err = Document::load(&dir).expect_err("directory");
        assert!(matches!(err, FolioError::DocumentMissing { .. }));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_text_keeps_label_and_text() {
        let doc = Document::from_text("index.html", "<main></main>");
        assert_eq!(doc.label(), "index.html");
        assert_eq!(doc.text(), "<main></main>");
    }
}
