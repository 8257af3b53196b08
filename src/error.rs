//! Error types for backend-toggle.
//!
//! Every failure in the pipeline is fatal, so the hierarchy is flat: one
//! variant per stage that can fail. Each variant carries the context of the
//! failure plus the source location where it was raised.
//!
//! # Error Categories
//!
//! - **Usage errors**: an unrecognized backend mode
//! - **IO errors**: reading or writing the configuration file
//! - **Structure errors**: HCL syntax errors, missing `terraform` block
//!
//! # Example
//!
//! ```rust
//! use backend_toggle::error::{BackendToggleError, Result};
//!
//! fn read(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).map_err(|e| BackendToggleError::Read {
//!         path: path.into(),
//!         source: e,
//!         src_path: file!(),
//!         src_line: line!(),
//!     })
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Macro to create errors with automatic source location tracking.
///
/// Usage:
/// ```ignore
/// return Err(err!(MissingTerraformBlock { file: path.to_path_buf() }));
/// ```
#[macro_export]
macro_rules! err {
    ($variant:ident { $($field:ident: $value:expr),* $(,)? }) => {
        $crate::error::BackendToggleError::$variant {
            $($field: $value,)*
            src_path: file!(),
            src_line: line!(),
        }
    };
}

/// A specialized Result type for backend-toggle operations.
pub type Result<T> = std::result::Result<T, BackendToggleError>;

/// The main error type for backend-toggle.
#[derive(Error, Debug)]
pub enum BackendToggleError {
    // =========================================================================
    // Usage Errors
    // =========================================================================
    /// The requested backend mode is not one of the supported values.
    #[error("Mode must be 'local' or 's3', got '{value}'")]
    InvalidMode {
        /// The rejected mode string
        value: String,
    },

    // =========================================================================
    // I/O Errors
    // =========================================================================
    /// The configuration file could not be read.
    #[error("Error reading file '{path}' ({src_path}:{src_line}): {source}")]
    Read {
        /// The file being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// The edited configuration could not be written back.
    #[error("Error writing file '{path}' ({src_path}:{src_line}): {source}")]
    Write {
        /// The file being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    // =========================================================================
    // HCL Structure Errors
    // =========================================================================
    /// HCL parsing error.
    #[error("Error parsing HCL in '{file}' \n\t({src_path}:{src_line}): {message}")]
    HclParse {
        /// The file being parsed
        file: PathBuf,
        /// Diagnostic text from the parser
        message: String,
        /// Line number (if available)
        line: Option<usize>,
        /// Column number (if available)
        column: Option<usize>,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },

    /// The document has no top-level `terraform` block to edit.
    #[error("No terraform block found in '{file}' ({src_path}:{src_line})")]
    MissingTerraformBlock {
        /// The file that was searched
        file: PathBuf,
        /// Source file path
        src_path: &'static str,
        /// Source line number
        src_line: u32,
    },
}

impl BackendToggleError {
    /// Creates a `Read` error.
    #[must_use]
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error, src_path: &'static str, src_line: u32) -> Self {
        Self::Read { path: path.into(), source, src_path, src_line }
    }

    /// Creates a `Write` error.
    #[must_use]
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error, src_path: &'static str, src_line: u32) -> Self {
        Self::Write { path: path.into(), source, src_path, src_line }
    }

    /// Creates an `HclParse` error.
    #[must_use]
    pub fn hcl_parse(file: PathBuf, message: String, line: Option<usize>, column: Option<usize>, src_path: &'static str, src_line: u32) -> Self {
        Self::HclParse { file, message, line, column, src_path, src_line }
    }

    /// Returns true if the failure happened before the file was modified.
    ///
    /// Only a failed write can leave the file in a partially written state.
    #[must_use]
    pub fn file_untouched(&self) -> bool {
        !matches!(self, Self::Write { .. })
    }

    /// Returns the appropriate exit code for the error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied => 13,
            Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => 14,
            Self::InvalidMode { .. } => 2,
            _ => 1, // Generic unhandled error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let missing = BackendToggleError::read("a.tf", io::Error::from(io::ErrorKind::NotFound), file!(), line!());
        assert_eq!(missing.exit_code(), 14);

        let denied = BackendToggleError::write("a.tf", io::Error::from(io::ErrorKind::PermissionDenied), file!(), line!());
        assert_eq!(denied.exit_code(), 13);

        let no_block = crate::err!(MissingTerraformBlock { file: PathBuf::from("a.tf") });
        assert_eq!(no_block.exit_code(), 1);

        let mode = BackendToggleError::InvalidMode { value: "gcs".to_string() };
        assert_eq!(mode.exit_code(), 2);
    }

    #[test]
    fn test_messages_carry_stage_prefix() {
        let read = BackendToggleError::read("providers.tf", io::Error::from(io::ErrorKind::NotFound), file!(), line!());
        assert!(read.to_string().starts_with("Error reading file 'providers.tf'"));

        let parse = BackendToggleError::hcl_parse(PathBuf::from("providers.tf"), "unexpected token".to_string(), Some(1), Some(3), file!(), line!());
        let message = parse.to_string();
        assert!(message.starts_with("Error parsing HCL in 'providers.tf'"));
        assert!(message.ends_with("unexpected token"));

        let no_block = crate::err!(MissingTerraformBlock { file: PathBuf::from("providers.tf") });
        assert!(no_block.to_string().starts_with("No terraform block found"));

        let mode = BackendToggleError::InvalidMode { value: "azure".to_string() };
        assert_eq!(mode.to_string(), "Mode must be 'local' or 's3', got 'azure'");
    }

    #[test]
    fn test_io_source_is_chained() {
        use std::error::Error as _;

        let write = BackendToggleError::write("a.tf", io::Error::new(io::ErrorKind::Other, "disk full"), file!(), line!());
        assert!(!write.file_untouched());
        assert_eq!(write.source().map(ToString::to_string).as_deref(), Some("disk full"));
    }
}
