use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use hubsite::models::SiteContent;
use hubsite::security;
use hubsite::storage::{load_content, save_content as persist_content};
use hubsite::store::{LoginRequest, LoginResponse, SaveResponse};
use tracing::{info, warn};

use crate::routes::AppState;

pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Response {
    if request.username == state.credentials.username
        && request.password == state.credentials.password
    {
        let token = state.sessions.issue().await;
        info!("api login succeeded");
        (
            [(header::SET_COOKIE, security::session_cookie(&token))],
            Json(LoginResponse {
                success: true,
                message: None,
            }),
        )
            .into_response()
    } else {
        warn!("api login rejected for user {}", request.username);
        (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse {
                success: false,
                message: Some("Invalid username or password".to_string()),
            }),
        )
            .into_response()
    }
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = security::token_from_headers(&headers) {
        state.sessions.revoke(&token).await;
    }
    (
        [(header::SET_COOKIE, security::expired_session_cookie())],
        StatusCode::OK,
    )
        .into_response()
}

pub async fn get_content(
    State(state): State<AppState>,
) -> Result<Json<SiteContent>, (StatusCode, String)> {
    load_content(&state.content_path)
        .await
        .map(Json)
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))
}

/// Full replace of the stored document. Requires a live session cookie.
pub async fn save_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(content): Json<SiteContent>,
) -> Response {
    let authenticated = match security::token_from_headers(&headers) {
        Some(token) => state.sessions.contains(&token).await,
        None => false,
    };
    if !authenticated {
        return (
            StatusCode::UNAUTHORIZED,
            Json(SaveResponse {
                success: false,
                error: Some("Authentication required".to_string()),
            }),
        )
            .into_response();
    }

    match persist_content(&state.content_path, &content).await {
        Ok(()) => {
            info!("site content replaced via api");
            Json(SaveResponse {
                success: true,
                error: None,
            })
            .into_response()
        }
        Err(message) => {
            warn!("api save failed: {message}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveResponse {
                    success: false,
                    error: Some(message),
                }),
            )
                .into_response()
        }
    }
}
