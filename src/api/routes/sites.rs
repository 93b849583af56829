use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::api::models::CreateSiteRequest;
use crate::api::AppState;
use crate::models::SitePatch;

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Site not found" })),
    )
}

pub async fn list_sites(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.store.list_sites()))
}

pub async fn get_site(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.store.get_site(id) {
        Some(site) => Ok(Json(json!(site))),
        None => Err(not_found()),
    }
}

pub async fn create_site(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let req: CreateSiteRequest = serde_json::from_value(body).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid site data" })),
        )
    })?;

    let new_site = req.validate().map_err(|errors| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid site data", "errors": errors })),
        )
    })?;

    let site = state.store.create_site(new_site);
    Ok((StatusCode::CREATED, Json(json!(site))))
}

pub async fn update_site(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let patch: SitePatch = serde_json::from_value(body).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid site data" })),
        )
    })?;

    match state.store.update_site(id, patch) {
        Some(site) => Ok(Json(json!(site))),
        None => Err(not_found()),
    }
}

pub async fn delete_site(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if state.store.delete_site(id) {
        Ok(Json(json!({ "message": "Site deleted successfully" })))
    } else {
        Err(not_found())
    }
}
