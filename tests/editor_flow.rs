use hubsite::editor::{self, ButtonDraft, EditorError};
use hubsite::models::{HubButton, SiteContent};
use hubsite::session::SessionState;

fn content_with_buttons(names: &[&str]) -> SiteContent {
    let mut content = SiteContent::default();
    for name in names {
        content.hub_buttons.push(HubButton {
            id: name.to_string(),
            name_de: name.to_string(),
            name_en: name.to_string(),
            url: format!("https://example.org/{name}"),
            icon: "study".to_string(),
            ..HubButton::default()
        });
    }
    content
}

#[test]
fn create_then_commit_appends_one_button_with_derived_fields() {
    let mut session = SessionState::new(content_with_buttons(&["Blog"]));

    let mut draft = editor::begin_create(&mut session);
    assert_eq!(draft.icon, "study");
    draft.name_de = "Test".to_string();
    draft.url = "https://x.io".to_string();

    editor::commit(&mut session, &draft).expect("commit failed");

    let buttons = &session.content().hub_buttons;
    assert_eq!(buttons.len(), 2);
    let added = &buttons[1];
    assert_eq!(added.id, "Test");
    assert_eq!(added.name_de, "Test");
    assert_eq!(added.name_en, "Test");
    assert_eq!(added.url, "https://x.io");
    assert_eq!(added.icon, "study");
    assert_eq!(session.editing_target(), None);
}

#[test]
fn commit_derives_id_from_name_with_whitespace() {
    let mut session = SessionState::new(SiteContent::default());

    let mut draft = editor::begin_create(&mut session);
    draft.name_de = "Mein Blog".to_string();
    draft.desc_de = "Gedanken".to_string();
    editor::commit(&mut session, &draft).expect("commit failed");

    let added = &session.content().hub_buttons[0];
    assert_eq!(added.id, "MeinBlog");
    assert_eq!(added.desc_en, "Gedanken");
}

#[test]
fn edit_then_commit_replaces_only_the_target() {
    let mut session = SessionState::new(content_with_buttons(&["One", "Two", "Three"]));

    let mut draft = editor::begin_edit(&mut session, 1).expect("begin_edit failed");
    assert_eq!(draft.name_de, "Two");
    draft.name_de = "Zwei".to_string();
    editor::commit(&mut session, &draft).expect("commit failed");

    let buttons = &session.content().hub_buttons;
    assert_eq!(buttons.len(), 3);
    assert_eq!(buttons[0].name_de, "One");
    assert_eq!(buttons[1].name_de, "Zwei");
    assert_eq!(buttons[1].id, "Zwei");
    assert_eq!(buttons[2].name_de, "Three");
}

#[test]
fn delete_removes_element_and_preserves_order() {
    let mut session = SessionState::new(content_with_buttons(&["One", "Two", "Three", "Four"]));

    let removed = editor::delete(&mut session, 1).expect("delete failed");

    assert_eq!(removed.name_de, "Two");
    let names: Vec<&str> = session
        .content()
        .hub_buttons
        .iter()
        .map(|button| button.name_de.as_str())
        .collect();
    assert_eq!(names, vec!["One", "Three", "Four"]);
}

#[test]
fn cancel_discards_draft_and_leaves_list_unchanged() {
    let mut session = SessionState::new(content_with_buttons(&["One"]));

    let _draft = editor::begin_edit(&mut session, 0).expect("begin_edit failed");
    editor::cancel(&mut session);

    assert_eq!(session.editing_target(), None);
    assert_eq!(session.content().hub_buttons.len(), 1);
    assert_eq!(session.content().hub_buttons[0].name_de, "One");
}

#[test]
fn begin_edit_out_of_range_fails() {
    let mut session = SessionState::new(content_with_buttons(&["One"]));

    let result = editor::begin_edit(&mut session, 5);

    assert_eq!(result, Err(EditorError::IndexOutOfRange { index: 5, len: 1 }));
    assert_eq!(session.editing_target(), None);
}

#[test]
fn delete_out_of_range_fails() {
    let mut session = SessionState::new(content_with_buttons(&["One"]));

    let result = editor::delete(&mut session, 1);

    assert_eq!(result, Err(EditorError::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(session.content().hub_buttons.len(), 1);
}

#[test]
fn commit_without_staging_fails() {
    let mut session = SessionState::new(SiteContent::default());

    let result = editor::commit(&mut session, &ButtonDraft::default());

    assert_eq!(result, Err(EditorError::NothingStaged));
    assert!(session.content().hub_buttons.is_empty());
}

#[test]
fn structural_mutations_clear_a_stale_editing_target() {
    let mut session = SessionState::new(content_with_buttons(&["One", "Two"]));

    let _draft = editor::begin_edit(&mut session, 1).expect("begin_edit failed");
    editor::delete(&mut session, 0).expect("delete failed");

    // The position the draft pointed at no longer exists; a commit now must
    // be refused instead of landing on the wrong element.
    assert_eq!(session.editing_target(), None);
    let result = editor::commit(&mut session, &ButtonDraft::default());
    assert_eq!(result, Err(EditorError::NothingStaged));
}
