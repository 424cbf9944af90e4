//! Waitlist signup record.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_source() -> String {
    "marketing".to_string()
}

/// A waitlist signup. Write-only: no lifecycle beyond creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WaitlistEntry {
    /// Contact email (validated before persistence)
    #[validate(email)]
    pub email: String,

    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Origin of the signup
    #[serde(default = "default_source")]
    pub source: String,
}

impl WaitlistEntry {
    /// Create a new entry with the default source.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            source: default_source(),
        }
    }
}
