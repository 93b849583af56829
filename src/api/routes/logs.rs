use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::api::models::LogsQuery;
use crate::api::AppState;

pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Json<Value> {
    Json(json!(state.store.list_logs(query.site_id)))
}
