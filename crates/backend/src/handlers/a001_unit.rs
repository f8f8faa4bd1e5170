use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_unit::{Unit, UnitDto, UnitId};
use contracts::domain::common::AggregateId;
use serde_json::json;

use crate::domain::a001_unit::service::{self, UnitServiceError};

fn parse_id(id: &str) -> Result<UnitId, StatusCode> {
    UnitId::from_string(id).map_err(|e| {
        tracing::warn!("Rejected unit id '{}': {}", id, e);
        StatusCode::BAD_REQUEST
    })
}

fn status_for(error: &UnitServiceError) -> StatusCode {
    match error {
        UnitServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        UnitServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        UnitServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /api/unit
pub async fn list_all() -> Result<Json<Vec<Unit>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list units: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/unit/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Unit>, StatusCode> {
    let id = parse_id(&id)?;
    match service::get_by_id(id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load unit {}: {e:#}", id);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/unit
pub async fn create(Json(dto): Json<UnitDto>) -> Result<Json<serde_json::Value>, StatusCode> {
    match service::create(dto).await {
        Ok(id) => Ok(Json(json!({ "id": id.value() }))),
        Err(e) => {
            tracing::error!("Failed to create unit: {e:#}");
            Err(status_for(&e))
        }
    }
}

/// PUT /api/unit/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<UnitDto>,
) -> Result<StatusCode, StatusCode> {
    let id = parse_id(&id)?;
    if dto.id.is_some_and(|body_id| body_id != id) {
        tracing::warn!("Unit id mismatch: path {} body {:?}", id, dto.id);
        return Err(StatusCode::BAD_REQUEST);
    }
    match service::update(id, dto).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            tracing::error!("Failed to update unit {}: {e:#}", id);
            Err(status_for(&e))
        }
    }
}

/// DELETE /api/unit/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let id = parse_id(&id)?;
    match service::delete(id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete unit {}: {e:#}", id);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_unit::UnitError;

    #[test]
    fn parse_id_accepts_numbers_only() {
        assert_eq!(parse_id("12"), Ok(UnitId(12)));
        assert_eq!(parse_id("twelve"), Err(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn service_errors_map_to_status_codes() {
        assert_eq!(
            status_for(&UnitServiceError::NotFound(UnitId(1))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&UnitServiceError::Validation(UnitError::MissingTitle)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&UnitServiceError::Storage(anyhow::anyhow!("disk full"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
