use crate::models::SiteContent;

/// Target of the hub-button staging form: a new button to append, or an
/// existing one addressed by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTarget {
    New,
    At(usize),
}

/// In-memory working copy of the site content plus transient editing state.
///
/// The editing target is cleared on every structural change of the button
/// list (and on `replace`), so it can never point at a position that has
/// shifted out from under it.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    content: SiteContent,
    authenticated: bool,
    editing_target: Option<ButtonTarget>,
}

impl SessionState {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content,
            authenticated: false,
            editing_target: None,
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut SiteContent {
        &mut self.content
    }

    /// Replaces the working copy wholesale. No validation is performed;
    /// callers supply a complete document.
    pub fn replace(&mut self, content: SiteContent) {
        self.content = content;
        self.editing_target = None;
    }

    pub fn authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    pub fn editing_target(&self) -> Option<ButtonTarget> {
        self.editing_target
    }

    pub fn set_editing_target(&mut self, target: ButtonTarget) {
        self.editing_target = Some(target);
    }

    pub fn clear_editing_target(&mut self) {
        self.editing_target = None;
    }
}
