use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde_json::json;

use super::AppState;

pub const SESSION_COOKIE: &str = "fleet_session";

/// Authenticated identity attached to the request by `require_session`.
/// Handlers pull it back out with `Extension<CurrentUser>`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: u64,
    pub token: String,
}

/// Session gate for everything except login and health. A missing or stale
/// cookie yields the same 401 body the UI already understands.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    let token = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(session_token);

    let unauthorized = || {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Authentication required" })),
        )
    };

    let token = token.ok_or_else(unauthorized)?;
    let user_id = state.sessions.resolve(&token).ok_or_else(unauthorized)?;

    request.extensions_mut().insert(CurrentUser { id: user_id, token });
    Ok(next.run(request).await)
}

/// Extracts the session token from a `Cookie` header value.
fn session_token(cookie_header: &str) -> Option<String> {
    cookie_header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0")
}
