//! Demo standards sets used to populate an empty database.

use contracts::domain::a002_standard::{Standard, StandardError, StandardsSet};
use contracts::enums::Subject;

const GRADE_5_READING_LITERATURE: &[(&str, &str)] = &[
    ("RL.5.1", "Quote accurately from a text when explaining what the text says explicitly and when drawing inferences from the text."),
    ("RL.5.2", "Determine a theme of a story, drama, or poem from details in the text, including how characters respond to challenges."),
    ("RL.5.3", "Compare and contrast two or more characters, settings, or events in a story or drama, drawing on specific details in the text."),
    ("RL.5.4", "Determine the meaning of words and phrases as they are used in a text, including figurative language such as metaphors and similes."),
    ("RL.5.5", "Explain how a series of chapters, scenes, or stanzas fits together to provide the overall structure of a particular story, drama, or poem."),
    ("RL.5.6", "Describe how a narrator's or speaker's point of view influences how events are described."),
];

const GRADE_5_FRACTIONS: &[(&str, &str)] = &[
    ("5.NF.A.1", "Add and subtract fractions with unlike denominators (including mixed numbers) by replacing given fractions with equivalent fractions."),
    ("5.NF.A.2", "Solve word problems involving addition and subtraction of fractions referring to the same whole."),
    ("5.NF.B.3", "Interpret a fraction as division of the numerator by the denominator (a/b = a ÷ b)."),
    ("5.NF.B.4", "Apply and extend previous understandings of multiplication to multiply a fraction or whole number by a fraction."),
    ("5.NF.B.6", "Solve real world problems involving multiplication of fractions and mixed numbers."),
    ("5.NF.B.7", "Apply and extend previous understandings of division to divide unit fractions by whole numbers and whole numbers by unit fractions."),
];

const GRADE_5_LIFE_SCIENCE: &[(&str, &str)] = &[
    ("5-LS1-1", "Support an argument that plants get the materials they need for growth chiefly from air and water."),
    ("5-LS2-1", "Develop a model to describe the movement of matter among plants, animals, decomposers, and the environment."),
];

fn catalog(entries: &[(&str, &str)]) -> Result<Vec<Standard>, StandardError> {
    entries
        .iter()
        .map(|(code, description)| Standard::new(*code, *description))
        .collect()
}

pub fn demo_sets() -> Result<Vec<(StandardsSet, Vec<Standard>)>, StandardError> {
    Ok(vec![
        (
            StandardsSet {
                id: 1,
                name: "CCSS ELA Reading: Literature".into(),
                subject_name: Subject::Ela.display_name().into(),
                grade: Some("5".into()),
            },
            catalog(GRADE_5_READING_LITERATURE)?,
        ),
        (
            StandardsSet {
                id: 2,
                name: "CCSS Math Number & Operations: Fractions".into(),
                subject_name: Subject::Math.display_name().into(),
                grade: Some("5".into()),
            },
            catalog(GRADE_5_FRACTIONS)?,
        ),
        (
            StandardsSet {
                id: 3,
                name: "NGSS Life Science".into(),
                subject_name: Subject::Science.display_name().into(),
                grade: Some("5".into()),
            },
            catalog(GRADE_5_LIFE_SCIENCE)?,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_sets_have_unique_ids_and_codes() {
        let sets = demo_sets().unwrap();
        let ids: HashSet<_> = sets.iter().map(|(set, _)| set.id).collect();
        assert_eq!(ids.len(), sets.len());

        for (set, catalog) in &sets {
            assert!(!catalog.is_empty(), "set {} is empty", set.name);
            let codes: HashSet<_> = catalog.iter().map(|s| s.code.as_str()).collect();
            assert_eq!(codes.len(), catalog.len(), "duplicate code in {}", set.name);
        }
    }

    #[test]
    fn demo_sets_belong_to_known_subjects() {
        for (set, _) in demo_sets().unwrap() {
            assert!(Subject::from_display_name(&set.subject_name).is_some());
        }
    }
}
