use contracts::domain::a001_unit::Unit;
use contracts::enums::Subject;

/// Units of one subject ordered by unit number
pub fn units_for_subject(units: &[Unit], subject: Subject) -> Vec<Unit> {
    let mut matching: Vec<Unit> = units
        .iter()
        .filter(|u| Subject::from_display_name(&u.subject_name) == Some(subject))
        .cloned()
        .collect();
    matching.sort_by_key(|u| u.number);
    matching
}

/// Suggested number for the next unit of a subject
pub fn next_unit_number(units: &[Unit], subject: Subject) -> i32 {
    units
        .iter()
        .filter(|u| Subject::from_display_name(&u.subject_name) == Some(subject))
        .map(|u| u.number)
        .max()
        .unwrap_or(0)
        + 1
}

pub fn empty_column_text(subject: Subject) -> String {
    format!(
        "You don’t have any {name} units yet! Add an {name} unit to get started.",
        name = subject.display_name()
    )
}

pub fn add_unit_label(subject: Subject) -> String {
    format!("Add {} Unit", subject.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_unit::UnitDto;

    fn unit(subject: &str, number: i32) -> Unit {
        Unit::new_for_insert(&UnitDto {
            number,
            title: format!("{} {}", subject, number),
            subject_name: subject.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn units_are_grouped_and_sorted() {
        let units = vec![unit("Math", 3), unit("ELA", 1), unit("Math", 1), unit("math", 2)];

        let math: Vec<_> = units_for_subject(&units, Subject::Math)
            .into_iter()
            .map(|u| u.number)
            .collect();

        assert_eq!(math, vec![1, 2, 3]);
        assert_eq!(units_for_subject(&units, Subject::Science).len(), 0);
    }

    #[test]
    fn next_number_follows_highest() {
        let units = vec![unit("Science", 1), unit("Science", 4), unit("ELA", 9)];
        assert_eq!(next_unit_number(&units, Subject::Science), 5);
        assert_eq!(next_unit_number(&units, Subject::SocialStudies), 1);
    }

    #[test]
    fn column_texts() {
        assert_eq!(
            empty_column_text(Subject::Ela),
            "You don’t have any ELA units yet! Add an ELA unit to get started."
        );
        assert_eq!(add_unit_label(Subject::SocialStudies), "Add Social Studies Unit");
    }
}
