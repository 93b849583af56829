use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::dashboard;

pub async fn get_stats(State(state): State<AppState>) -> Json<Value> {
    Json(json!(dashboard::compute_stats(&state.store)))
}
