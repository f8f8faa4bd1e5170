use crate::shared::api_utils::api_url;
use contracts::domain::a002_standard::{Standard, StandardsSet, StandardsSetId};
use gloo_net::http::Request;

/// Ordered catalog of one standards set (`GET /api/standard/set/{set_id}`)
pub async fn fetch_standards_by_set_id(set_id: StandardsSetId) -> Result<Vec<Standard>, String> {
    let url = api_url(&format!("/api/standard/set/{}", set_id));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Err(format!("Standards set {} not found", set_id));
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// All standards sets, used by the unit creation form
pub async fn fetch_sets() -> Result<Vec<StandardsSet>, String> {
    let response = Request::get(&api_url("/api/standard/sets"))
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
