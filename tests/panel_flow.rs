use std::sync::Arc;

use hubsite::editor;
use hubsite::models::SiteContent;
use hubsite::panel::AdminPanel;
use hubsite::store::{AuthError, ContentStore, NetworkError, SaveError};
use hubsite::sync::ContentForm;
use tokio::sync::Mutex;

struct MockStore {
    stored: Mutex<SiteContent>,
    accept_login: bool,
    reject_save: Option<String>,
}

impl MockStore {
    fn with_content(content: SiteContent) -> Arc<Self> {
        Arc::new(Self {
            stored: Mutex::new(content),
            accept_login: true,
            reject_save: None,
        })
    }

    fn rejecting_logins() -> Arc<Self> {
        Arc::new(Self {
            stored: Mutex::new(SiteContent::default()),
            accept_login: false,
            reject_save: None,
        })
    }

    fn rejecting_saves(message: &str) -> Arc<Self> {
        Arc::new(Self {
            stored: Mutex::new(SiteContent::default()),
            accept_login: true,
            reject_save: Some(message.to_string()),
        })
    }
}

#[async_trait::async_trait]
impl ContentStore for MockStore {
    async fn login(&self, _username: &str, _password: &str) -> Result<(), AuthError> {
        if self.accept_login {
            Ok(())
        } else {
            Err(AuthError::Rejected("Invalid username or password".to_string()))
        }
    }

    async fn logout(&self) -> Result<(), NetworkError> {
        Ok(())
    }

    async fn fetch_content(&self) -> Result<SiteContent, NetworkError> {
        Ok(self.stored.lock().await.clone())
    }

    async fn save_content(&self, content: &SiteContent) -> Result<(), SaveError> {
        if let Some(message) = &self.reject_save {
            return Err(SaveError::Rejected(message.clone()));
        }
        *self.stored.lock().await = content.clone();
        Ok(())
    }
}

#[tokio::test]
async fn failed_login_leaves_panel_untouched() {
    let store = MockStore::rejecting_logins();
    let mut panel = AdminPanel::new(store, SiteContent::default());

    let result = panel.login("owner", "wrong").await;

    assert!(matches!(result, Err(AuthError::Rejected(_))));
    assert!(!panel.authenticated());
    let controls = panel.controls();
    assert!(controls.login_visible);
    assert!(!controls.edit_visible);
    assert!(!controls.logout_visible);
}

#[tokio::test]
async fn successful_login_refreshes_content_from_store() {
    let mut remote = SiteContent::default();
    remote.name = "Remote".to_string();
    let store = MockStore::with_content(remote);

    let mut stale = SiteContent::default();
    stale.name = "Stale".to_string();
    let mut panel = AdminPanel::new(store, stale);

    panel.login("owner", "secret").await.expect("login failed");

    assert!(panel.authenticated());
    assert_eq!(panel.session().content().name, "Remote");
    let controls = panel.controls();
    assert!(!controls.login_visible);
    assert!(controls.edit_visible);
    assert!(controls.logout_visible);
}

#[tokio::test]
async fn save_replaces_session_and_store_with_the_submitted_document() {
    let store = MockStore::with_content(SiteContent::default());
    let mut panel = AdminPanel::new(store.clone(), SiteContent::default());
    panel.login("owner", "secret").await.expect("login failed");

    let mut form = ContentForm::from_content(panel.session().content());
    form.name = "Updated".to_string();
    panel.save(&form).await.expect("save failed");

    let expected = form.collect(&SiteContent::default());
    assert_eq!(panel.session().content(), &expected);
    assert_eq!(*store.stored.lock().await, expected);

    // A later refresh fetches the identical document back.
    panel.refresh().await.expect("refresh failed");
    assert_eq!(panel.session().content(), &expected);
}

#[tokio::test]
async fn rejected_save_leaves_the_session_untouched() {
    let store = MockStore::rejecting_saves("disk full");
    let mut panel = AdminPanel::new(store, SiteContent::default());
    panel.login("owner", "secret").await.expect("login failed");

    let before = panel.session().content().clone();
    let mut form = ContentForm::from_content(&before);
    form.name = "Updated".to_string();
    let result = panel.save(&form).await;

    assert_eq!(result, Err(SaveError::Rejected("disk full".to_string())));
    assert_eq!(panel.session().content(), &before);
}

#[tokio::test]
async fn logout_reinitializes_the_whole_session() {
    let store = MockStore::with_content(SiteContent::default());
    let mut panel = AdminPanel::new(store, SiteContent::default());
    panel.login("owner", "secret").await.expect("login failed");

    let _draft = editor::begin_create(panel.session_mut());
    panel.logout().await.expect("logout failed");

    assert!(!panel.authenticated());
    assert_eq!(panel.session().editing_target(), None);
    let controls = panel.controls();
    assert!(controls.login_visible);
    assert!(!controls.edit_visible);
    assert!(!controls.logout_visible);
}
