use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use hubsite::editor::{self, ButtonDraft};
use hubsite::panel::AdminPanel;
use hubsite::security;
use hubsite::sync::ContentForm;
use tracing::{info, warn};

use crate::forms::{EditTabQuery, LoginForm};
use crate::routes::AppState;
use crate::views::admin::{render_button_form, render_edit_page, render_login_page};

pub async fn admin_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if is_authorized(&state, &headers).await {
        Redirect::to("/admin/edit").into_response()
    } else {
        Html(render_login_page(None)).into_response()
    }
}

pub async fn login_action(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Response {
    let mut panel = state.panel.lock().await;
    match panel.login(&form.username, &form.password).await {
        Ok(()) => {
            let token = state.sessions.issue().await;
            (
                [(header::SET_COOKIE, security::session_cookie(&token))],
                Redirect::to("/admin/edit"),
            )
                .into_response()
        }
        Err(err) => {
            warn!("admin login failed: {err}");
            Html(render_login_page(Some(&err.to_string()))).into_response()
        }
    }
}

pub async fn logout_action(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = security::token_from_headers(&headers) {
        state.sessions.revoke(&token).await;
    }

    let mut panel = state.panel.lock().await;
    match panel.logout().await {
        Ok(()) => (
            [(header::SET_COOKIE, security::expired_session_cookie())],
            Redirect::to("/"),
        )
            .into_response(),
        Err(err) => {
            warn!("logout failed: {err}");
            Html(edit_page_html(&panel, Some("buttons"), Some(&err.to_string()), false))
                .into_response()
        }
    }
}

pub async fn edit_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EditTabQuery>,
) -> Response {
    if !is_authorized(&state, &headers).await {
        return Redirect::to("/admin").into_response();
    }

    let panel = state.panel.lock().await;
    Html(edit_page_html(&panel, query.tab.as_deref(), None, false)).into_response()
}

pub async fn save_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ContentForm>,
) -> Response {
    if !is_authorized(&state, &headers).await {
        return Redirect::to("/admin").into_response();
    }

    let mut panel = state.panel.lock().await;
    match panel.save(&form).await {
        Ok(()) => Html(edit_page_html(&panel, None, Some("Erfolgreich gespeichert!"), true))
            .into_response(),
        Err(err) => {
            warn!("save failed: {err}");
            // Keep what the owner typed on screen; only the session stays
            // on the previous document.
            Html(render_edit_page(
                &form,
                &panel.session().content().hub_buttons,
                panel.controls(),
                None,
                Some(&err.to_string()),
                false,
            ))
            .into_response()
        }
    }
}

pub async fn new_button_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !is_authorized(&state, &headers).await {
        return Redirect::to("/admin").into_response();
    }

    let mut panel = state.panel.lock().await;
    let draft = editor::begin_create(panel.session_mut());
    Html(render_button_form(&draft, "Neuer Button")).into_response()
}

pub async fn edit_button_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(index): Path<usize>,
) -> Response {
    if !is_authorized(&state, &headers).await {
        return Redirect::to("/admin").into_response();
    }

    let mut panel = state.panel.lock().await;
    match editor::begin_edit(panel.session_mut(), index) {
        Ok(draft) => Html(render_button_form(&draft, "Button bearbeiten")).into_response(),
        Err(err) => Html(edit_page_html(
            &panel,
            Some("buttons"),
            Some(&err.to_string()),
            false,
        ))
        .into_response(),
    }
}

pub async fn save_button_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(draft): Form<ButtonDraft>,
) -> Response {
    if !is_authorized(&state, &headers).await {
        return Redirect::to("/admin").into_response();
    }

    let mut panel = state.panel.lock().await;
    match editor::commit(panel.session_mut(), &draft) {
        Ok(()) => Redirect::to("/admin/edit?tab=buttons").into_response(),
        Err(err) => Html(edit_page_html(
            &panel,
            Some("buttons"),
            Some(&err.to_string()),
            false,
        ))
        .into_response(),
    }
}

pub async fn cancel_button_action(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !is_authorized(&state, &headers).await {
        return Redirect::to("/admin").into_response();
    }

    let mut panel = state.panel.lock().await;
    editor::cancel(panel.session_mut());
    Redirect::to("/admin/edit?tab=buttons").into_response()
}

pub async fn delete_button_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(index): Path<usize>,
) -> Response {
    if !is_authorized(&state, &headers).await {
        return Redirect::to("/admin").into_response();
    }

    let mut panel = state.panel.lock().await;
    match editor::delete(panel.session_mut(), index) {
        Ok(removed) => {
            info!("hub button '{}' removed", removed.name_de);
            Redirect::to("/admin/edit?tab=buttons").into_response()
        }
        Err(err) => Html(edit_page_html(
            &panel,
            Some("buttons"),
            Some(&err.to_string()),
            false,
        ))
        .into_response(),
    }
}

async fn is_authorized(state: &AppState, headers: &HeaderMap) -> bool {
    match security::token_from_headers(headers) {
        Some(token) => state.sessions.contains(&token).await,
        None => false,
    }
}

fn edit_page_html(
    panel: &AdminPanel,
    tab: Option<&str>,
    message: Option<&str>,
    saved: bool,
) -> String {
    let form = ContentForm::from_content(panel.session().content());
    render_edit_page(
        &form,
        &panel.session().content().hub_buttons,
        panel.controls(),
        tab,
        message,
        saved,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::HeaderValue;
    use hubsite::models::SiteContent;
    use hubsite::security::{Credentials, SessionTokens};
    use hubsite::store::{AuthError, ContentStore, NetworkError, SaveError};
    use tokio::sync::Mutex;

    struct RejectingStore;

    #[async_trait::async_trait]
    impl ContentStore for RejectingStore {
        async fn login(&self, _username: &str, _password: &str) -> Result<(), AuthError> {
            Ok(())
        }

        async fn logout(&self) -> Result<(), NetworkError> {
            Ok(())
        }

        async fn fetch_content(&self) -> Result<SiteContent, NetworkError> {
            Ok(SiteContent::default())
        }

        async fn save_content(&self, _content: &SiteContent) -> Result<(), SaveError> {
            Err(SaveError::Rejected("kaputte Platte".to_string()))
        }
    }

    async fn body_text(response: Response) -> String {
        use axum::body::HttpBody;

        let mut body = response.into_body();
        let mut text = String::new();
        while let Some(chunk) = body.data().await {
            let chunk = chunk.expect("body read failed");
            text.push_str(&String::from_utf8_lossy(&chunk));
        }
        text
    }

    #[tokio::test]
    async fn failed_save_keeps_the_typed_values_on_screen() {
        let mut panel = AdminPanel::new(Arc::new(RejectingStore), SiteContent::default());
        panel.login("owner", "secret").await.expect("login failed");
        let state = AppState {
            panel: Arc::new(Mutex::new(panel)),
            sessions: SessionTokens::new(),
            credentials: Credentials {
                username: "owner".to_string(),
                password: "secret".to_string(),
            },
            content_path: std::path::PathBuf::from("content.json"),
        };
        let token = state.sessions.issue().await;
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{}={token}", security::SESSION_COOKIE))
                .expect("cookie header"),
        );

        let mut form = ContentForm::default();
        form.name = "Getippter Name".to_string();

        let response = save_action(State(state.clone()), headers, Form(form)).await;
        let html = body_text(response).await;

        assert!(html.contains(r#"value="Getippter Name""#));
        assert!(html.contains("kaputte Platte"));

        let panel = state.panel.lock().await;
        assert_eq!(panel.session().content().name, "");
    }
}
