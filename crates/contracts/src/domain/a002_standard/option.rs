//! Select options built from catalog entries.
//!
//! The multi-select shows `"<code> - <description>"` labels and keeps the code
//! as the option value. Committing a selection turns options back into
//! [`Standard`] records.

use super::aggregate::Standard;
use serde::{Deserialize, Serialize};

pub const CODE_DESCRIPTION_DELIMITER: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardOption {
    /// Position in the catalog the option was built from (used for striping)
    pub index: usize,
    /// Standard code
    pub value: String,
    /// `"<code> - <description>"`
    pub label: String,
}

impl StandardOption {
    pub fn from_standard(index: usize, standard: &Standard) -> Self {
        Self {
            index,
            value: standard.code.clone(),
            label: format!(
                "{}{}{}",
                standard.code, CODE_DESCRIPTION_DELIMITER, standard.description
            ),
        }
    }

    /// Options for a whole catalog, in catalog order
    pub fn options_for(catalog: &[Standard]) -> Vec<Self> {
        catalog
            .iter()
            .enumerate()
            .map(|(index, standard)| Self::from_standard(index, standard))
            .collect()
    }

    pub fn code(&self) -> &str {
        &self.value
    }

    /// Description part of the label.
    ///
    /// Everything after the leading `"<code> - "` belongs to the description,
    /// so descriptions that contain the delimiter survive intact.
    pub fn description(&self) -> &str {
        let prefixed = self
            .label
            .strip_prefix(self.value.as_str())
            .and_then(|rest| rest.strip_prefix(CODE_DESCRIPTION_DELIMITER));
        match prefixed {
            Some(description) => description,
            None => self
                .label
                .split_once(CODE_DESCRIPTION_DELIMITER)
                .map(|(_, description)| description)
                .unwrap_or_default(),
        }
    }

    /// The catalog entry this option was built from, text unchanged
    pub fn to_standard(&self) -> Standard {
        Standard {
            code: self.value.clone(),
            description: self.description().to_string(),
        }
    }

    /// Case-insensitive match of the query against code or description.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.label.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn std(code: &str, description: &str) -> Standard {
        Standard::new(code, description).unwrap()
    }

    #[test]
    fn options_follow_catalog_order_and_label_format() {
        let catalog = vec![std("A1", "d1"), std("B2", "d2")];
        let options = StandardOption::options_for(&catalog);

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].index, 0);
        assert_eq!(options[0].value, "A1");
        assert_eq!(options[0].label, "A1 - d1");
        assert_eq!(options[1].label, "B2 - d2");
    }

    #[test]
    fn description_keeps_embedded_delimiter() {
        let option = StandardOption::from_standard(0, &std("W.3.2", "Write texts - informative"));
        assert_eq!(option.description(), "Write texts - informative");
        assert_eq!(
            option.to_standard(),
            std("W.3.2", "Write texts - informative")
        );
    }

    #[test]
    fn description_falls_back_to_first_delimiter() {
        let option = StandardOption {
            index: 0,
            value: "X".into(),
            label: "Other - text".into(),
        };
        assert_eq!(option.description(), "text");
    }

    #[test]
    fn to_standard_returns_catalog_entry_verbatim() {
        let entry = Standard {
            code: "A1".into(),
            description: " d1 ".into(),
        };
        let option = StandardOption::from_standard(0, &entry);
        assert_eq!(option.to_standard(), entry);
    }

    #[test]
    fn matches_code_or_description_ignoring_case() {
        let option = StandardOption::from_standard(0, &std("RL.5.1", "Quote accurately"));
        assert!(option.matches("rl.5"));
        assert!(option.matches("QUOTE"));
        assert!(option.matches("   "));
        assert!(!option.matches("math"));
    }
}
