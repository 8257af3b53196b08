//! # backend-toggle
//!
//! Toggle a Terraform/OpenTofu configuration file between local state and a
//! fixed S3 state backend.
//!
//! The file is edited structurally: its `terraform` block loses any existing
//! `backend` block and, in `s3` mode, gains the fixed `backend "s3"` block.
//! Comments, spacing and unrelated blocks are written back as they were.
//!
//! ## Example
//!
//! ```rust,no_run
//! use backend_toggle::{BackendToggle, Mode};
//!
//! fn main() -> anyhow::Result<()> {
//!     let outcome = BackendToggle::new(Mode::S3).run("providers.tf")?;
//!     println!("{}", outcome.switch_message());
//!     Ok(())
//! }
//! ```

// Note: README is not included as doc to avoid doctest failures
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod cli;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use config::S3Backend;
pub use document::Document;
pub use error::{BackendToggleError, Result};
pub use types::{EditOutcome, Mode};

use std::path::Path;

/// Orchestrates the read, edit and write steps for one file.
///
/// The steps are also exposed individually ([`Document::load`],
/// [`BackendToggle::apply`], [`Document::save`]) for callers that report
/// progress between them.
#[derive(Debug, Clone)]
pub struct BackendToggle {
    mode: Mode,
    backend: S3Backend,
}

impl BackendToggle {
    /// Create a toggle that switches files to `mode`.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            backend: S3Backend::default(),
        }
    }

    /// The mode this toggle applies.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Edit an already loaded document in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the document has no `terraform` block.
    pub fn apply(&self, doc: &mut Document) -> Result<EditOutcome> {
        editor::apply(doc, self.mode, &self.backend)
    }

    /// Load the file at `path`, edit it and write it back in place.
    ///
    /// The file is only written once every earlier step has succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not valid HCL
    /// - There is no top-level `terraform` block
    /// - The file cannot be written
    pub fn run<P: AsRef<Path>>(&self, path: P) -> Result<EditOutcome> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), mode = %self.mode, "Toggling backend");

        let mut doc = Document::load(path)?;
        let outcome = self.apply(&mut doc)?;
        doc.save()?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_creation() {
        let toggle = BackendToggle::new(Mode::Local);
        assert_eq!(toggle.mode(), Mode::Local);
    }

    #[test]
    fn test_run_leaves_file_untouched_on_missing_terraform_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.tf");
        let content = "resource \"null_resource\" \"this\" {}\n";
        std::fs::write(&path, content).unwrap();

        let err = BackendToggle::new(Mode::S3).run(&path).unwrap_err();

        assert!(err.file_untouched());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_run_writes_s3_backend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.tf");
        std::fs::write(&path, "terraform {\n  required_version = \">= 1.0\"\n}\n").unwrap();

        let outcome = BackendToggle::new(Mode::S3).run(&path).unwrap();
        assert!(!outcome.removed_existing());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("backend \"s3\""));
        assert!(written.contains("\"deductive-ai-iac\""));
    }
}
