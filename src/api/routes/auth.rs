use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::api::auth::{clear_session_cookie, session_cookie, CurrentUser};
use crate::api::models::LoginRequest;
use crate::api::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let invalid = || {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
    };

    let user = state
        .store
        .get_user_by_username(&req.username)
        .ok_or_else(invalid)?;

    // bcrypt comparison; a malformed stored hash counts as a failed login
    if !bcrypt::verify(&req.password, &user.password_hash).unwrap_or(false) {
        return Err(invalid());
    }

    let token = state.sessions.create(user.id);
    Ok((
        [(header::SET_COOKIE, session_cookie(&token))],
        Json(json!({ "user": user.profile() })),
    ))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    if !state.sessions.destroy(&user.token) {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Logout failed" })),
        ));
    }

    Ok((
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(json!({ "message": "Logged out successfully" })),
    ))
}

pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // a session can outlive its user only if the store was rebuilt
    let user = state.store.get_user(user.id).ok_or((
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "User not found" })),
    ))?;

    Ok(Json(json!({ "user": user.profile() })))
}
