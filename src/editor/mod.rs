//! Structural edits of the `terraform` block.
//!
//! Editing is a single conditional mutation of the parsed document:
//!
//! 1. find the first top-level `terraform` block
//! 2. remove its first nested `backend` block, whatever the label
//! 3. in `s3` mode, append the fixed `backend "s3"` block
//!
//! # Example
//!
//! ```rust
//! use backend_toggle::document::Document;
//! use backend_toggle::editor;
//! use backend_toggle::config::S3Backend;
//! use backend_toggle::types::Mode;
//!
//! let mut doc = Document::parse("terraform {\n  required_version = \">= 1.0\"\n}\n", "providers.tf")?;
//! let outcome = editor::apply(&mut doc, Mode::S3, &S3Backend::default())?;
//! assert!(!outcome.removed_existing());
//! assert!(doc.render().contains("backend \"s3\""));
//! # Ok::<(), backend_toggle::BackendToggleError>(())
//! ```

mod block;

pub use block::{expand_oneline, find_block_mut, remove_first_block, s3_backend_block};

use crate::config::S3Backend;
use crate::document::Document;
use crate::error::Result;
use crate::types::{EditOutcome, Mode};

/// Identifier of the top-level Terraform settings block.
pub const TERRAFORM_BLOCK: &str = "terraform";

/// Identifier of the state backend block nested in `terraform`.
pub const BACKEND_BLOCK: &str = "backend";

/// Apply `mode` to the document's `terraform` block.
///
/// Any nested block named `backend` is treated as the backend declaration,
/// regardless of its label.
///
/// # Errors
///
/// Returns `MissingTerraformBlock` if the document has no top-level
/// `terraform` block. The document is not modified in that case.
pub fn apply(doc: &mut Document, mode: Mode, backend: &S3Backend) -> Result<EditOutcome> {
    let path = doc.path().to_path_buf();

    let Some(terraform) = find_block_mut(doc.body_mut(), TERRAFORM_BLOCK) else {
        return Err(crate::err!(MissingTerraformBlock { file: path }));
    };

    let removed = remove_first_block(&mut terraform.body, BACKEND_BLOCK)
        .map(|block| block.labels.first().map(|label| label.as_str().to_string()));

    if let Some(label) = &removed {
        tracing::info!(
            path = %path.display(),
            label = label.as_deref().unwrap_or(""),
            "Removed existing backend block"
        );
    }

    if mode == Mode::S3 {
        expand_oneline(&mut terraform.body);
        terraform.body.push(s3_backend_block(backend));
    }

    tracing::info!(path = %path.display(), mode = %mode, "Backend switched");

    Ok(EditOutcome { mode, removed })
}
