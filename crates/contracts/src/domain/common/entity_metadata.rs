use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bookkeeping columns shared by stored aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
    /// Number of writes since creation
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        Self::created_at(Utc::now())
    }

    pub fn created_at(at: DateTime<Utc>) -> Self {
        Self {
            created_at: at,
            updated_at: at,
            is_deleted: false,
            version: 0,
        }
    }

    /// Stamps a write at `at`; `updated_at` never moves backwards
    pub fn record_write(&mut self, at: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(at);
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn writes_bump_version_and_timestamp() {
        let mut meta = EntityMetadata::created_at(at(8));
        meta.record_write(at(9));
        meta.record_write(at(10));

        assert_eq!(meta.version, 2);
        assert_eq!(meta.created_at, at(8));
        assert_eq!(meta.updated_at, at(10));
    }

    #[test]
    fn updated_at_is_monotonic() {
        let mut meta = EntityMetadata::created_at(at(8));
        meta.record_write(at(8) - Duration::hours(1));
        assert_eq!(meta.updated_at, at(8));
        assert_eq!(meta.version, 1);
    }
}
