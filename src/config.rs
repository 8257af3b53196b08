//! Backend settings written by backend-toggle.
//!
//! The S3 backend is fixed: the same bucket, key, region and encryption
//! flag are written every time, in this order:
//!
//! ```hcl
//! terraform {
//!   backend "s3" {
//!     bucket  = "deductive-ai-iac"
//!     key     = "terraform.tfstate"
//!     region  = "us-west-1"
//!     encrypt = true
//!   }
//! }
//! ```

/// A literal value of a backend attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
    /// Quoted string literal
    String(&'static str),
    /// Boolean literal
    Bool(bool),
}

/// Settings of the `backend "s3"` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Backend {
    /// State bucket name.
    pub bucket: &'static str,

    /// Object key of the state file inside the bucket.
    pub key: &'static str,

    /// AWS region of the bucket.
    pub region: &'static str,

    /// Enable server-side encryption of the state object.
    pub encrypt: bool,
}

impl Default for S3Backend {
    fn default() -> Self {
        Self {
            bucket: "deductive-ai-iac",
            key: "terraform.tfstate",
            region: "us-west-1",
            encrypt: true,
        }
    }
}

impl S3Backend {
    /// Label of the backend block.
    pub const LABEL: &'static str = "s3";

    /// Attributes of the backend block in the order they are written.
    #[must_use]
    pub fn attributes(&self) -> [(&'static str, SettingValue); 4] {
        [
            ("bucket", SettingValue::String(self.bucket)),
            ("key", SettingValue::String(self.key)),
            ("region", SettingValue::String(self.region)),
            ("encrypt", SettingValue::Bool(self.encrypt)),
        ]
    }
}
