use std::sync::Arc;

use tracing::{info, warn};

use crate::models::SiteContent;
use crate::session::SessionState;
use crate::store::{AuthError, ContentStore, NetworkError, SaveError};
use crate::sync::ContentForm;

/// Visibility of the three admin controls. Logged out: only the login
/// control; logged in: edit and logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelControls {
    pub login_visible: bool,
    pub edit_visible: bool,
    pub logout_visible: bool,
}

impl Default for PanelControls {
    fn default() -> Self {
        Self {
            login_visible: true,
            edit_visible: false,
            logout_visible: false,
        }
    }
}

impl PanelControls {
    fn logged_in() -> Self {
        Self {
            login_visible: false,
            edit_visible: true,
            logout_visible: true,
        }
    }
}

/// The content-editing session: session state plus the auth and save flows
/// against a content store. Store failures never escape as panics; every
/// operation returns the error for the presentation layer to display.
pub struct AdminPanel {
    store: Arc<dyn ContentStore>,
    session: SessionState,
    controls: PanelControls,
}

impl AdminPanel {
    pub fn new(store: Arc<dyn ContentStore>, initial: SiteContent) -> Self {
        Self {
            store,
            session: SessionState::new(initial),
            controls: PanelControls::default(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn controls(&self) -> PanelControls {
        self.controls
    }

    pub fn authenticated(&self) -> bool {
        self.session.authenticated()
    }

    /// Logs in against the store. On success the working copy is refreshed
    /// from the store, so content cached before the login boundary is never
    /// trusted. On failure nothing changes.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        self.store.login(username, password).await?;
        self.session.set_authenticated(true);
        self.controls = PanelControls::logged_in();

        match self.store.fetch_content().await {
            Ok(content) => self.session.replace(content),
            Err(err) => warn!("content refresh after login failed: {err}"),
        }

        info!("admin login succeeded");
        Ok(())
    }

    /// Logs out and reinitializes the whole session: logged-out controls,
    /// editing target cleared, working copy reset to the stored snapshot.
    pub async fn logout(&mut self) -> Result<(), NetworkError> {
        self.store.logout().await?;
        self.session.set_authenticated(false);
        self.session.clear_editing_target();
        self.controls = PanelControls::default();

        match self.store.fetch_content().await {
            Ok(content) => self.session.replace(content),
            Err(err) => warn!("content refresh after logout failed: {err}"),
        }

        info!("admin logged out");
        Ok(())
    }

    /// Replaces the working copy with the stored document.
    pub async fn refresh(&mut self) -> Result<(), NetworkError> {
        let content = self.store.fetch_content().await?;
        self.session.replace(content);
        Ok(())
    }

    /// Collects the form into a full document and pushes it to the store.
    /// Only on success does the working copy change; a rejected or failed
    /// save leaves the session untouched.
    pub async fn save(&mut self, form: &ContentForm) -> Result<(), SaveError> {
        let updated = form.collect(self.session.content());
        self.store.save_content(&updated).await?;
        self.session.replace(updated);
        info!("site content saved");
        Ok(())
    }
}
