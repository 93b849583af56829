use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::api::AppState;

fn site_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Site not found" })),
    )
}

/// Kicks off the full backup → screenshot → update workflow. Responds as soon
/// as the parent log exists; progress is observed via `/api/logs`.
pub async fn run_maintenance(
    State(state): State<AppState>,
    Path(site_id): Path<u64>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let site = state.store.get_site(site_id).ok_or_else(site_not_found)?;
    let log = state.workflows.start_maintenance(&site);
    Ok(Json(
        json!({ "message": "Maintenance started", "logId": log.id }),
    ))
}

pub async fn run_backup(
    State(state): State<AppState>,
    Path(site_id): Path<u64>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let site = state.store.get_site(site_id).ok_or_else(site_not_found)?;
    let log = state.workflows.start_backup(&site);
    Ok(Json(json!({ "message": "Backup started", "logId": log.id })))
}
