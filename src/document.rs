//! Loading, parsing and writing back a single HCL document.
//!
//! The document keeps the concrete syntax of the file (comments, spacing,
//! ordering) via `hcl::edit`, so writing it back only changes what was
//! edited in between.

use crate::error::{BackendToggleError, Result};

use hcl::edit::parser;
use hcl::edit::structure::Body;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Permissions of a newly created configuration file.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// An editable HCL document bound to the file it was read from.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    body: Body,
}

impl Document {
    /// Read and parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `Read` if the file cannot be opened or read, and `HclParse`
    /// if its content is not valid UTF-8 or not valid HCL.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Reading file");

        let bytes = std::fs::read(path)
            .map_err(|e| BackendToggleError::read(path, e, file!(), line!()))?;

        let content = String::from_utf8(bytes).map_err(|e| crate::err!(HclParse {
            file: path.to_path_buf(),
            message: format!("file is not valid UTF-8: {e}"),
            line: None,
            column: None,
        }))?;

        Self::parse(&content, path)
    }

    /// Parse `content` as an HCL body. `path` is only used in diagnostics
    /// and as the target of [`Document::save`].
    ///
    /// # Errors
    ///
    /// Returns `HclParse` with the parser's diagnostic text and the 1-based
    /// line and column of the first syntax error.
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let body = parser::parse_body(content).map_err(|e| {
            let location = e.location();
            BackendToggleError::hcl_parse(
                path.clone(),
                e.to_string(),
                Some(location.line()),
                Some(location.column()),
                file!(),
                line!(),
            )
        })?;

        tracing::debug!(
            path = %path.display(),
            structures = body.len(),
            "Parsed HCL document"
        );

        Ok(Self { path, body })
    }

    /// The file this document was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mutable access to the top-level body.
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Serialize the document back to HCL text.
    #[must_use]
    pub fn render(&self) -> String {
        self.body.to_string()
    }

    /// Overwrite the original file with the rendered document.
    ///
    /// The write is not atomic: a failure part way through leaves whatever
    /// the operating system managed to write.
    ///
    /// # Errors
    ///
    /// Returns `Write` if the file cannot be opened for writing or the write
    /// does not complete.
    pub fn save(&self) -> Result<()> {
        let rendered = self.render();

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let mut file = options
            .open(&self.path)
            .map_err(|e| BackendToggleError::write(&self.path, e, file!(), line!()))?;
        file.write_all(rendered.as_bytes())
            .map_err(|e| BackendToggleError::write(&self.path, e, file!(), line!()))?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = rendered.len(),
            "File written"
        );

        Ok(())
    }
}
