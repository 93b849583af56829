use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::api::models::GenerateReportRequest;
use crate::api::AppState;
use crate::models::NewReport;

pub async fn list_reports(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.store.list_reports()))
}

/// Records a report artifact. The file path is synthetic, no file is
/// rendered; downstream tooling owns turning these records into documents.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(req): Json<GenerateReportRequest>,
) -> (StatusCode, Json<Value>) {
    let report = state.store.create_report(NewReport {
        file_path: format!("/reports/{}-{}.pdf", req.kind, Utc::now().timestamp_millis()),
        name: req.name,
        kind: req.kind.clone(),
        description: req.description,
    });

    (StatusCode::CREATED, Json(json!(report)))
}
