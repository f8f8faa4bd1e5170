//! Planning data of a unit and the mutations the unit page performs on it.

use crate::domain::a002_standard::Standard;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    Formative,
    Summative,
}

impl AssessmentKind {
    pub fn title(&self) -> &'static str {
        match self {
            AssessmentKind::Formative => "Formative Assessment",
            AssessmentKind::Summative => "Summative Assessment",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitPlanning {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub objectives: Vec<String>,
    /// Attached standards. Position is the only identity a row has.
    pub standards: Vec<Standard>,
    pub formative_assessments: Vec<String>,
    pub summative_assessments: Vec<String>,
}

impl UnitPlanning {
    // === Standards ===

    /// Append entries to the attached standards, keeping their order.
    /// Codes already attached are not filtered out.
    pub fn set_standards<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = Standard>,
    {
        let before = self.standards.len();
        self.standards.extend(entries);
        self.standards.len() - before
    }

    /// Remove the standard at `index`; out-of-range indexes leave the list untouched.
    pub fn remove_standard(&mut self, index: usize) -> Option<Standard> {
        if index < self.standards.len() {
            Some(self.standards.remove(index))
        } else {
            None
        }
    }

    /// Positional removal that only applies while `index` still holds `code`.
    pub fn remove_standard_if(&mut self, index: usize, code: &str) -> Option<Standard> {
        match self.standards.get(index) {
            Some(standard) if standard.code == code => self.remove_standard(index),
            _ => None,
        }
    }

    // === Objectives / assessments ===

    pub fn add_objective(&mut self, text: &str) -> bool {
        push_trimmed(&mut self.objectives, text)
    }

    pub fn remove_objective(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.objectives, index)
    }

    pub fn assessments(&self, kind: AssessmentKind) -> &[String] {
        match kind {
            AssessmentKind::Formative => &self.formative_assessments,
            AssessmentKind::Summative => &self.summative_assessments,
        }
    }

    pub fn add_assessment(&mut self, kind: AssessmentKind, text: &str) -> bool {
        push_trimmed(self.assessments_mut(kind), text)
    }

    pub fn remove_assessment(&mut self, kind: AssessmentKind, index: usize) -> Option<String> {
        remove_at(self.assessments_mut(kind), index)
    }

    fn assessments_mut(&mut self, kind: AssessmentKind) -> &mut Vec<String> {
        match kind {
            AssessmentKind::Formative => &mut self.formative_assessments,
            AssessmentKind::Summative => &mut self.summative_assessments,
        }
    }

    /// Both dates set and end before start
    pub fn has_inverted_dates(&self) -> bool {
        inverted(self.start_date, self.end_date)
    }

    /// Sets the start date unless it would fall after the end date.
    /// Returns false and leaves the planning unchanged when refused.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) -> bool {
        if inverted(date, self.end_date) {
            return false;
        }
        self.start_date = date;
        true
    }

    /// Sets the end date unless it would fall before the start date.
    pub fn set_end_date(&mut self, date: Option<NaiveDate>) -> bool {
        if inverted(self.start_date, date) {
            return false;
        }
        self.end_date = date;
        true
    }
}

fn inverted(start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    matches!((start, end), (Some(start), Some(end)) if end < start)
}

fn push_trimmed(items: &mut Vec<String>, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    items.push(text.to_string());
    true
}

fn remove_at(items: &mut Vec<String>, index: usize) -> Option<String> {
    if index < items.len() {
        Some(items.remove(index))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn std(code: &str) -> Standard {
        Standard::new(code, format!("{code} description")).unwrap()
    }

    fn codes(planning: &UnitPlanning) -> Vec<&str> {
        planning.standards.iter().map(|s| s.code.as_str()).collect()
    }

    #[test]
    fn set_standards_appends_in_order() {
        let mut planning = UnitPlanning {
            standards: vec![std("X0")],
            ..Default::default()
        };
        let added = planning.set_standards(vec![std("A1"), std("B2")]);
        assert_eq!(added, 2);
        assert_eq!(codes(&planning), vec!["X0", "A1", "B2"]);
    }

    #[test]
    fn set_standards_keeps_duplicate_codes() {
        let mut planning = UnitPlanning::default();
        planning.set_standards(vec![std("A1")]);
        planning.set_standards(vec![std("A1")]);
        assert_eq!(codes(&planning), vec!["A1", "A1"]);
    }

    #[test]
    fn remove_standard_removes_exactly_one_position() {
        let mut planning = UnitPlanning {
            standards: vec![std("A1"), std("B2"), std("C3")],
            ..Default::default()
        };
        assert_eq!(planning.remove_standard(1), Some(std("B2")));
        assert_eq!(codes(&planning), vec!["A1", "C3"]);
        assert_eq!(planning.remove_standard(0), Some(std("A1")));
        assert_eq!(codes(&planning), vec!["C3"]);
    }

    #[test]
    fn remove_standard_out_of_range_is_a_no_op() {
        let mut planning = UnitPlanning {
            standards: vec![std("A1"), std("B2")],
            ..Default::default()
        };
        assert_eq!(planning.remove_standard(2), None);
        assert_eq!(planning.remove_standard(usize::MAX), None);
        assert_eq!(codes(&planning), vec!["A1", "B2"]);

        let mut empty = UnitPlanning::default();
        assert_eq!(empty.remove_standard(0), None);
    }

    #[test]
    fn guarded_removal_skips_shifted_rows() {
        let mut planning = UnitPlanning {
            standards: vec![std("A1"), std("B2")],
            ..Default::default()
        };
        // Row 1 showed B2, but A1 was removed meanwhile.
        planning.remove_standard(0);
        assert_eq!(planning.remove_standard_if(1, "B2"), None);
        assert_eq!(planning.remove_standard_if(0, "A1"), None);
        assert_eq!(planning.remove_standard_if(0, "B2"), Some(std("B2")));
        assert!(planning.standards.is_empty());
    }

    #[test]
    fn list_editors_ignore_blank_text() {
        let mut planning = UnitPlanning::default();
        assert!(!planning.add_objective("   "));
        assert!(planning.add_objective(" Compare fractions "));
        assert_eq!(planning.objectives, vec!["Compare fractions"]);

        assert!(planning.add_assessment(AssessmentKind::Summative, "Unit test"));
        assert!(planning.assessments(AssessmentKind::Formative).is_empty());
        assert_eq!(
            planning.remove_assessment(AssessmentKind::Summative, 0),
            Some("Unit test".to_string())
        );
        assert_eq!(planning.remove_assessment(AssessmentKind::Summative, 0), None);
    }

    #[test]
    fn planning_json_uses_camel_case_and_defaults() {
        let planning: UnitPlanning = serde_json::from_str(
            r#"{"startDate":"2024-09-03","standards":[{"code":"A1","description":"d1"}]}"#,
        )
        .unwrap();
        assert_eq!(planning.start_date, NaiveDate::from_ymd_opt(2024, 9, 3));
        assert_eq!(planning.end_date, None);
        assert_eq!(codes(&planning), vec!["A1"]);
        assert!(planning.objectives.is_empty());
    }

    #[test]
    fn inverted_dates_are_detected() {
        let planning = UnitPlanning {
            start_date: NaiveDate::from_ymd_opt(2024, 10, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 9, 1),
            ..Default::default()
        };
        assert!(planning.has_inverted_dates());
        assert!(!UnitPlanning::default().has_inverted_dates());
    }

    #[test]
    fn date_setters_refuse_inversion() {
        let sep = NaiveDate::from_ymd_opt(2024, 9, 1);
        let oct = NaiveDate::from_ymd_opt(2024, 10, 1);
        let mut planning = UnitPlanning::default();

        assert!(planning.set_end_date(sep));
        assert!(!planning.set_start_date(oct));
        assert_eq!(planning.start_date, None);

        assert!(planning.set_start_date(sep));
        assert!(!planning.set_end_date(NaiveDate::from_ymd_opt(2024, 8, 1)));
        assert_eq!(planning.end_date, sep);

        // clearing either side is always allowed
        assert!(planning.set_end_date(None));
        assert!(planning.set_start_date(oct));
        assert!(!planning.has_inverted_dates());
    }
}
