use serde::{Deserialize, Serialize};

use crate::models::{derive_button_id, HubButton, DEFAULT_BUTTON_ICON};
use crate::session::{ButtonTarget, SessionState};

/// Staging form for a hub button. English name and description are copied
/// from the German fields at commit time; there is no separate translation
/// step in this flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ButtonDraft {
    #[serde(default)]
    pub name_de: String,
    #[serde(default)]
    pub desc_de: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    IndexOutOfRange { index: usize, len: usize },
    NothingStaged,
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorError::IndexOutOfRange { index, len } => {
                write!(f, "button index {index} out of range (list has {len} entries)")
            }
            EditorError::NothingStaged => write!(f, "no button edit in progress"),
        }
    }
}

impl std::error::Error for EditorError {}

/// Starts staging a new button. The draft starts empty apart from the
/// default icon.
pub fn begin_create(session: &mut SessionState) -> ButtonDraft {
    session.set_editing_target(ButtonTarget::New);
    ButtonDraft {
        icon: DEFAULT_BUTTON_ICON.to_string(),
        ..ButtonDraft::default()
    }
}

/// Starts editing the button at `index`, loading it into a fresh draft.
pub fn begin_edit(session: &mut SessionState, index: usize) -> Result<ButtonDraft, EditorError> {
    let buttons = &session.content().hub_buttons;
    let button = buttons.get(index).ok_or(EditorError::IndexOutOfRange {
        index,
        len: buttons.len(),
    })?;
    let draft = ButtonDraft {
        name_de: button.name_de.clone(),
        desc_de: button.desc_de.clone(),
        url: button.url.clone(),
        icon: button.icon.clone(),
    };
    session.set_editing_target(ButtonTarget::At(index));
    Ok(draft)
}

/// Commits the staged draft: appends when creating, replaces in place when
/// editing. Clears the editing target either way.
pub fn commit(session: &mut SessionState, draft: &ButtonDraft) -> Result<(), EditorError> {
    let target = session.editing_target().ok_or(EditorError::NothingStaged)?;
    let button = button_from_draft(draft);
    match target {
        ButtonTarget::New => session.content_mut().hub_buttons.push(button),
        ButtonTarget::At(index) => {
            let len = session.content().hub_buttons.len();
            let slot = session
                .content_mut()
                .hub_buttons
                .get_mut(index)
                .ok_or(EditorError::IndexOutOfRange { index, len })?;
            *slot = button;
        }
    }
    session.clear_editing_target();
    Ok(())
}

/// Discards the staged draft; the list is unchanged.
pub fn cancel(session: &mut SessionState) {
    session.clear_editing_target();
}

/// Removes the button at `index` unconditionally. Confirmation is the
/// presentation layer's job.
pub fn delete(session: &mut SessionState, index: usize) -> Result<HubButton, EditorError> {
    let len = session.content().hub_buttons.len();
    if index >= len {
        return Err(EditorError::IndexOutOfRange { index, len });
    }
    let removed = session.content_mut().hub_buttons.remove(index);
    session.clear_editing_target();
    Ok(removed)
}

pub fn button_from_draft(draft: &ButtonDraft) -> HubButton {
    HubButton {
        id: derive_button_id(&draft.name_de),
        name_de: draft.name_de.clone(),
        name_en: draft.name_de.clone(),
        desc_de: draft.desc_de.clone(),
        desc_en: draft.desc_de.clone(),
        url: draft.url.clone(),
        icon: draft.icon.clone(),
    }
}
