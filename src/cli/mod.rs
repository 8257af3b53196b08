//! Command-line interface module.
//!
//! Two positional arguments select the file and the backend mode:
//!
//! ```bash
//! # Switch to the S3 backend
//! backend-toggle providers.tf s3
//!
//! # Switch back to local state
//! backend-toggle providers.tf local
//! ```

use crate::types::Mode;
use clap::Parser;
use std::path::PathBuf;

/// backend-toggle - switch a Terraform configuration between local and S3 state.
#[derive(Parser, Debug)]
#[command(
    name = "backend-toggle",
    author,
    version,
    about = "Switch a Terraform configuration between local and S3 state backends",
    long_about = "backend-toggle edits the terraform block of an HCL file in place: it removes \
                  any existing backend block and, in s3 mode, adds the fixed S3 backend. \
                  Everything else in the file is written back unchanged."
)]
pub struct Cli {
    /// Path to the Terraform file holding the terraform block (e.g. providers.tf)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Backend mode: 'local' or 's3'
    #[arg(value_name = "local|s3")]
    pub mode: Mode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parsing() {
        // Verify CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::parse_from(["backend-toggle", "providers.tf", "s3"]);
        assert_eq!(cli.file, PathBuf::from("providers.tf"));
        assert_eq!(cli.mode, Mode::S3);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::parse_from(["backend-toggle", "-vv", "--quiet", "providers.tf", "local"]);
        assert_eq!(cli.mode, Mode::Local);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_invalid_mode() {
        let err = Cli::try_parse_from(["backend-toggle", "providers.tf", "gcs"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Mode must be 'local' or 's3'"));
    }

    #[test]
    fn test_missing_mode() {
        let err = Cli::try_parse_from(["backend-toggle", "providers.tf"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("<local|s3>"));
    }

    #[test]
    fn test_extra_argument() {
        let err = Cli::try_parse_from(["backend-toggle", "providers.tf", "s3", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
