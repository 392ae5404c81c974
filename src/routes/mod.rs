pub mod admin;
pub mod api;
pub mod health;
pub mod site;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use hubsite::models::SiteContent;
use hubsite::panel::AdminPanel;
use hubsite::security::{self, Credentials, SessionTokens};
use hubsite::storage;
use hubsite::store::{ContentStore, FileContentStore, HttpContentStore};
use tokio::sync::Mutex;
use tower_http::services::ServeDir;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub panel: Arc<Mutex<AdminPanel>>,
    pub sessions: SessionTokens,
    pub credentials: Credentials,
    pub content_path: PathBuf,
}

pub fn build_router(state: AppState) -> Router {
    let web_dir = web_dir();
    Router::new()
        .route("/", get(site::hub_page))
        .route("/impressum", get(site::impressum_page))
        .route("/datenschutz", get(site::privacy_page))
        .route("/admin", get(admin::admin_page))
        .route("/admin/login", post(admin::login_action))
        .route("/admin/logout", post(admin::logout_action))
        .route("/admin/edit", get(admin::edit_page))
        .route("/admin/save", post(admin::save_action))
        .route("/admin/buttons/new", get(admin::new_button_page))
        .route("/admin/buttons/:index/edit", get(admin::edit_button_page))
        .route("/admin/buttons/save", post(admin::save_button_action))
        .route("/admin/buttons/cancel", post(admin::cancel_button_action))
        .route("/admin/buttons/:index/delete", post(admin::delete_button_action))
        .route("/api/login", post(api::login))
        .route("/api/logout", post(api::logout))
        .route("/api/content", get(api::get_content).post(api::save_content))
        .route("/health", get(health::health))
        .nest_service("/web", ServeDir::new(web_dir))
        .with_state(state)
}

pub async fn default_state() -> AppState {
    let (credentials, created) = security::load_or_create_credentials()
        .await
        .expect("failed to prepare admin credentials");
    if created {
        info!(
            "generated admin credentials at {}",
            security::credentials_path().display()
        );
    }

    let content_path = storage::content_path();
    let store: Arc<dyn ContentStore> = match std::env::var("HUBSITE_REMOTE_URL") {
        Ok(url) => {
            info!("admin panel edits remote instance at {url}");
            Arc::new(HttpContentStore::new(&url).expect("invalid HUBSITE_REMOTE_URL"))
        }
        Err(_) => Arc::new(FileContentStore::new(
            content_path.clone(),
            credentials.clone(),
        )),
    };

    let initial = match store.fetch_content().await {
        Ok(content) => content,
        Err(err) => {
            warn!("failed to load site content: {err}");
            SiteContent::default()
        }
    };

    AppState {
        panel: Arc::new(Mutex::new(AdminPanel::new(store, initial))),
        sessions: SessionTokens::new(),
        credentials,
        content_path,
    }
}

fn web_dir() -> PathBuf {
    std::env::var("HUBSITE_WEB_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("web"))
}
