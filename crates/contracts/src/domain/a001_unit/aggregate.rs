use super::planning::UnitPlanning;
use crate::domain::a002_standard::{StandardError, StandardsSetId};
use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub i64);

impl UnitId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for UnitId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(UnitId::new)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unit number must be positive")]
    InvalidNumber,
    #[error("unit title must not be empty")]
    MissingTitle,
    #[error("unit subject must not be empty")]
    MissingSubject,
    #[error("unit end date is before its start date")]
    InvertedDates,
    #[error("invalid standard at position {index}: {source}")]
    InvalidStandard {
        index: usize,
        #[source]
        source: StandardError,
    },
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Course segment planned by a teacher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub number: i32,
    pub title: String,
    #[serde(rename = "subjectName")]
    pub subject_name: String,
    /// Standards set the unit picks its standards from
    #[serde(rename = "setId")]
    pub set_id: Option<StandardsSetId>,
    #[serde(default)]
    pub planning: UnitPlanning,
    #[serde(default)]
    pub metadata: EntityMetadata,
}

impl Unit {
    /// New unit that has not been stored yet (id is assigned by the database)
    pub fn new_for_insert(dto: &UnitDto) -> Self {
        Self {
            id: UnitId::new(0),
            number: dto.number,
            title: dto.title.trim().to_string(),
            subject_name: dto.subject_name.trim().to_string(),
            set_id: dto.set_id,
            planning: dto.planning.clone(),
            metadata: EntityMetadata::new(),
        }
    }

    /// Apply editable fields from a DTO
    pub fn update(&mut self, dto: &UnitDto) {
        self.number = dto.number;
        self.title = dto.title.trim().to_string();
        self.subject_name = dto.subject_name.trim().to_string();
        self.set_id = dto.set_id;
        self.planning = dto.planning.clone();
    }

    pub fn validate(&self) -> Result<(), UnitError> {
        if self.number <= 0 {
            return Err(UnitError::InvalidNumber);
        }
        if self.title.trim().is_empty() {
            return Err(UnitError::MissingTitle);
        }
        if self.subject_name.trim().is_empty() {
            return Err(UnitError::MissingSubject);
        }
        if self.planning.has_inverted_dates() {
            return Err(UnitError::InvertedDates);
        }
        for (index, standard) in self.planning.standards.iter().enumerate() {
            standard
                .validate()
                .map_err(|source| UnitError::InvalidStandard { index, source })?;
        }
        Ok(())
    }

    /// Hook before every write
    pub fn before_write(&mut self) {
        self.metadata.record_write(chrono::Utc::now());
    }

    pub fn to_dto(&self) -> UnitDto {
        UnitDto {
            id: Some(self.id),
            number: self.number,
            title: self.title.clone(),
            subject_name: self.subject_name.clone(),
            set_id: self.set_id,
            planning: self.planning.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for creating or updating a unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitDto {
    pub id: Option<UnitId>,
    pub number: i32,
    pub title: String,
    #[serde(rename = "subjectName")]
    pub subject_name: String,
    #[serde(rename = "setId")]
    pub set_id: Option<StandardsSetId>,
    #[serde(default)]
    pub planning: UnitPlanning,
}
