use serde::{Deserialize, Serialize};

/// Subjects shown as dashboard columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Ela,
    Math,
    Science,
    SocialStudies,
}

impl Subject {
    /// Stable code stored with the unit
    pub fn code(&self) -> &'static str {
        match self {
            Subject::Ela => "ela",
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::SocialStudies => "social-studies",
        }
    }

    /// Human readable name, also used as `Unit::subject_name`
    pub fn display_name(&self) -> &'static str {
        match self {
            Subject::Ela => "ELA",
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::SocialStudies => "Social Studies",
        }
    }

    /// Dashboard column order
    pub fn all() -> Vec<Subject> {
        vec![
            Subject::Ela,
            Subject::Math,
            Subject::Science,
            Subject::SocialStudies,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ela" => Some(Subject::Ela),
            "math" => Some(Subject::Math),
            "science" => Some(Subject::Science),
            "social-studies" => Some(Subject::SocialStudies),
            _ => None,
        }
    }

    /// Resolve a subject from its display name (case-insensitive)
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|s| s.display_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_resolve_back_to_subjects() {
        for subject in Subject::all() {
            assert_eq!(Subject::from_code(subject.code()), Some(subject));
        }
        assert_eq!(Subject::from_code("art"), None);
    }

    #[test]
    fn display_name_lookup_ignores_case_and_padding() {
        assert_eq!(
            Subject::from_display_name(" social studies "),
            Some(Subject::SocialStudies)
        );
        assert_eq!(Subject::from_display_name("ela"), Some(Subject::Ela));
        assert_eq!(Subject::from_display_name("History"), None);
    }
}
