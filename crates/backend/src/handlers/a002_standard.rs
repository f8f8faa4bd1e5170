use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_standard::{Standard, StandardsSet};
use contracts::domain::common::AggregateId;

use crate::domain::a002_standard::service;

/// GET /api/standard/sets
pub async fn list_sets() -> Result<Json<Vec<StandardsSet>>, StatusCode> {
    match service::list_sets().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list standards sets: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/standard/set/:set_id
pub async fn list_by_set_id(Path(set_id): Path<String>) -> Result<Json<Vec<Standard>>, StatusCode> {
    let set_id = i64::from_string(&set_id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match service::list_by_set_id(set_id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load standards for set {}: {e:#}", set_id);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/standard/testdata
pub async fn insert_test_data() -> StatusCode {
    match service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Failed to insert demo standards: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
