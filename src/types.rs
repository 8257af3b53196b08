//! Core data types used throughout backend-toggle.

use crate::error::BackendToggleError;
use std::fmt::Display;
use std::str::FromStr;

/// The state backend a Terraform configuration should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No backend block; Terraform keeps state in a local file
    Local,
    /// The fixed S3 backend block
    S3,
}

impl Mode {
    /// Returns the command-line spelling of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::S3 => "s3",
        }
    }
}

impl FromStr for Mode {
    type Err = BackendToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "s3" => Ok(Self::S3),
            other => Err(BackendToggleError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a single edit did to the `terraform` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The mode that was applied
    pub mode: Mode,

    /// The label of the backend block that was removed, if one was.
    ///
    /// `Some(None)` means an unlabeled `backend` block was removed.
    pub removed: Option<Option<String>>,
}

impl EditOutcome {
    /// Returns true if an existing backend block was removed.
    #[must_use]
    pub const fn removed_existing(&self) -> bool {
        self.removed.is_some()
    }

    /// Human-readable confirmation of the switch.
    #[must_use]
    pub const fn switch_message(&self) -> &'static str {
        match self.mode {
            Mode::Local => "Switched to local backend",
            Mode::S3 => "Switched to S3 backend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("local", Mode::Local ; "local")]
    #[test_case("s3", Mode::S3 ; "s3")]
    fn test_parse_mode(input: &str, expected: Mode) {
        assert_eq!(input.parse::<Mode>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[test_case("gcs" ; "other backend")]
    #[test_case("azure" ; "azure")]
    #[test_case("S3" ; "wrong case")]
    #[test_case("" ; "empty")]
    fn test_parse_invalid_mode(input: &str) {
        let err = input.parse::<Mode>().unwrap_err();
        assert!(err.to_string().contains("Mode must be 'local' or 's3'"));
    }

    #[test]
    fn test_switch_message() {
        let outcome = EditOutcome { mode: Mode::S3, removed: Some(Some("s3".to_string())) };
        assert!(outcome.removed_existing());
        assert_eq!(outcome.switch_message(), "Switched to S3 backend");

        let outcome = EditOutcome { mode: Mode::Local, removed: None };
        assert!(!outcome.removed_existing());
        assert_eq!(outcome.switch_message(), "Switched to local backend");
    }
}
