use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a standards set (a catalog scoped by subject and grade)
pub type StandardsSetId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandardError {
    #[error("standard code must not be empty")]
    MissingCode,
    #[error("standard description must not be empty (code {0})")]
    MissingDescription(String),
}

// ============================================================================
// Standard
// ============================================================================

/// Curriculum standard: a code/description pair taken from a standards set.
///
/// The same record is used for catalog entries and for standards attached to
/// a unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Standard {
    pub code: String,
    pub description: String,
}

impl Standard {
    /// Build a standard, rejecting blank fields. Surrounding whitespace is trimmed.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, StandardError> {
        let code = code.into().trim().to_string();
        let description = description.into().trim().to_string();
        if code.is_empty() {
            return Err(StandardError::MissingCode);
        }
        if description.is_empty() {
            return Err(StandardError::MissingDescription(code));
        }
        Ok(Self { code, description })
    }

    /// Check a record that arrived through deserialization
    pub fn validate(&self) -> Result<(), StandardError> {
        if self.code.trim().is_empty() {
            return Err(StandardError::MissingCode);
        }
        if self.description.trim().is_empty() {
            return Err(StandardError::MissingDescription(self.code.clone()));
        }
        Ok(())
    }
}

// ============================================================================
// Standards set
// ============================================================================

/// Named collection of standards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardsSet {
    pub id: StandardsSetId,
    pub name: String,
    #[serde(rename = "subjectName")]
    pub subject_name: String,
    pub grade: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_keeps_both_fields() {
        let s = Standard::new(" RL.5.1 ", " Quote accurately from a text ").unwrap();
        assert_eq!(s.code, "RL.5.1");
        assert_eq!(s.description, "Quote accurately from a text");
    }

    #[test]
    fn new_rejects_blank_code() {
        assert_eq!(Standard::new("  ", "desc"), Err(StandardError::MissingCode));
    }

    #[test]
    fn new_rejects_blank_description() {
        assert_eq!(
            Standard::new("A1", ""),
            Err(StandardError::MissingDescription("A1".into()))
        );
    }

    #[test]
    fn validate_catches_deserialized_blank_fields() {
        let s: Standard = serde_json::from_str(r#"{"code":"","description":"x"}"#).unwrap();
        assert!(s.validate().is_err());
    }
}
