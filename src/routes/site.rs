use axum::{extract::State, http::StatusCode, response::Html};
use hubsite::storage::load_content;

use crate::routes::AppState;
use crate::views::site::{render_hub_page, render_impressum_page, render_privacy_page};

pub async fn hub_page(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    let content = load_content(&state.content_path)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    Ok(Html(render_hub_page(&content)))
}

pub async fn impressum_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let content = load_content(&state.content_path)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    Ok(Html(render_impressum_page(&content)))
}

pub async fn privacy_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let content = load_content(&state.content_path)
        .await
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))?;
    Ok(Html(render_privacy_page(&content)))
}
