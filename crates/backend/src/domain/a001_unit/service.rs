use super::repository;
use contracts::domain::a001_unit::{Unit, UnitDto, UnitError, UnitId, UnitPlanning};
use contracts::domain::a002_standard::Standard;
use contracts::enums::Subject;
use thiserror::Error;

/// Failures the HTTP layer maps to distinct status codes
#[derive(Debug, Error)]
pub enum UnitServiceError {
    #[error("unit {0} not found")]
    NotFound(UnitId),
    #[error("validation failed: {0}")]
    Validation(#[from] UnitError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub async fn create(dto: UnitDto) -> Result<UnitId, UnitServiceError> {
    let mut aggregate = Unit::new_for_insert(&dto);
    aggregate.validate()?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    tracing::info!(
        "Created unit {} ({} {}: {})",
        id,
        aggregate.subject_name,
        aggregate.number,
        aggregate.title
    );
    Ok(id)
}

/// Overwrite a unit with the state sent by the client
pub async fn update(id: UnitId, dto: UnitDto) -> Result<(), UnitServiceError> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(UnitServiceError::NotFound(id))?;

    aggregate.update(&dto);
    aggregate.validate()?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    tracing::info!(
        "Updated unit {} (version {}, {} standards)",
        id,
        aggregate.metadata.version,
        aggregate.planning.standards.len()
    );
    Ok(())
}

pub async fn delete(id: UnitId) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: UnitId) -> anyhow::Result<Option<Unit>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Unit>> {
    repository::list_all().await
}

/// Insert demo units when the table is empty
pub async fn insert_demo_data_if_empty() -> anyhow::Result<()> {
    if repository::count_all().await? > 0 {
        return Ok(());
    }

    for dto in demo_units() {
        create(dto).await.map_err(anyhow::Error::from)?;
    }
    tracing::info!("Inserted demo units");
    Ok(())
}

fn demo_units() -> Vec<UnitDto> {
    let poetry_standards = vec![Standard {
        code: "RL.5.4".into(),
        description: "Determine the meaning of words and phrases as they are used in a text, including figurative language such as metaphors and similes.".into(),
    }];

    vec![
        UnitDto {
            id: None,
            number: 1,
            title: "Poetry and Figurative Language".into(),
            subject_name: Subject::Ela.display_name().into(),
            set_id: Some(1),
            planning: UnitPlanning {
                objectives: vec!["Identify metaphors and similes in poems".into()],
                standards: poetry_standards,
                ..Default::default()
            },
        },
        UnitDto {
            id: None,
            number: 1,
            title: "Adding and Subtracting Fractions".into(),
            subject_name: Subject::Math.display_name().into(),
            set_id: Some(2),
            planning: UnitPlanning::default(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_units_are_valid() {
        for dto in demo_units() {
            let unit = Unit::new_for_insert(&dto);
            assert!(unit.validate().is_ok(), "invalid demo unit {}", unit.title);
            assert!(Subject::from_display_name(&unit.subject_name).is_some());
        }
    }
}
