use crate::shared::api_utils::api_url;
use contracts::domain::a001_unit::{Unit, UnitDto, UnitId};
use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: i64,
}

pub async fn fetch_units() -> Result<Vec<Unit>, String> {
    let response = Request::get(&api_url("/api/unit"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_unit(id: UnitId) -> Result<Unit, String> {
    let response = Request::get(&api_url(&format!("/api/unit/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Err(format!("Unit {} not found", id));
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_unit(dto: &UnitDto) -> Result<UnitId, String> {
    let response = Request::post(&api_url("/api/unit"))
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let created: CreatedResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(UnitId::new(created.id))
}

/// Replaces the stored unit with `dto` (`PUT /api/unit/{id}`).
///
/// The caller decides what success and failure mean for the user.
pub async fn save_unit(id: UnitId, dto: &UnitDto) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/unit/{}", id)))
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    match response.status() {
        200..=299 => Ok(()),
        404 => Err(format!("Unit {} not found", id)),
        422 => Err(format!("Unit {} was rejected as invalid", id)),
        status => Err(format!("HTTP error: {}", status)),
    }
}
