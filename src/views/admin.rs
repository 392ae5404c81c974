use hubsite::editor::ButtonDraft;
use hubsite::models::HubButton;
use hubsite::panel::PanelControls;
use hubsite::sync::ContentForm;

use crate::views::helpers::{current_datetime, hidden_input, input_field, notice, textarea_field};
use crate::views::layout::{breadcrumb, render_layout};

pub fn render_login_page(error: Option<&str>) -> String {
    let content = format!(
        r#"<h1 class="h3 mb-3">Admin Login</h1>
        {error}
        <form method="post" action="/admin/login">
          {username}
          {password}
          <button class="btn btn-primary" type="submit">Login</button>
        </form>"#,
        error = notice(error, false),
        username = input_field("Benutzername", "username", ""),
        password = password_field("Passwort", "password"),
    );

    render_layout("Admin Login", "admin", vec![breadcrumb("Admin", None)], &content)
}

/// The tabbed edit page. Whatever tab is active, the form always carries
/// every editable field (hidden where not shown), so a save always submits
/// the complete document. The logout button follows the panel's control
/// visibility.
pub fn render_edit_page(
    form: &ContentForm,
    buttons: &[HubButton],
    controls: PanelControls,
    tab: Option<&str>,
    message: Option<&str>,
    saved: bool,
) -> String {
    let active_tab = tab.unwrap_or("profil");
    let tabs = format!(
        r#"<ul class="nav nav-tabs mb-3">
          <li class="nav-item"><a class="nav-link {profil}" href="/admin/edit?tab=profil">Profil</a></li>
          <li class="nav-item"><a class="nav-link {buttons}" href="/admin/edit?tab=buttons">Hub-Buttons</a></li>
          <li class="nav-item"><a class="nav-link {impressum}" href="/admin/edit?tab=impressum">Impressum</a></li>
          <li class="nav-item"><a class="nav-link {datenschutz}" href="/admin/edit?tab=datenschutz">Datenschutz</a></li>
        </ul>"#,
        profil = active_class(active_tab, "profil"),
        buttons = active_class(active_tab, "buttons"),
        impressum = active_class(active_tab, "impressum"),
        datenschutz = active_class(active_tab, "datenschutz"),
    );

    let button_list = if active_tab == "buttons" {
        render_button_list(buttons)
    } else {
        String::new()
    };

    let reload_script = if saved {
        r#"<script>
          setTimeout(() => { window.location = '/admin/edit'; }, 1500);
        </script>"#
    } else {
        ""
    };

    let logout = if controls.logout_visible {
        r#"<form method="post" action="/admin/logout">
            <button class="btn btn-secondary" type="submit">Logout</button>
          </form>"#
    } else {
        ""
    };

    let content = format!(
        r#"<div class="d-flex justify-content-between">
          <h1 class="h3 mb-3">Inhalte bearbeiten</h1>
          {logout}
        </div>
        {message}
        {tabs}
        {button_list}
        <form method="post" action="/admin/save">
          {fields}
          <button class="btn btn-primary" type="submit">Speichern</button>
        </form>
        <p class="text-muted mt-3">Stand: {datetime}</p>
        {reload_script}"#,
        message = notice(message, saved),
        tabs = tabs,
        button_list = button_list,
        fields = render_form_fields(form, active_tab),
        datetime = current_datetime(),
        reload_script = reload_script,
    );

    render_layout(
        "Inhalte bearbeiten",
        "admin",
        vec![breadcrumb("Admin", Some("/admin".to_string())), breadcrumb("Bearbeiten", None)],
        &content,
    )
}

pub fn render_button_form(draft: &ButtonDraft, title: &str) -> String {
    let content = format!(
        r#"<h1 class="h3 mb-3">{title}</h1>
        <form method="post" action="/admin/buttons/save">
          {name_de}
          {desc_de}
          {url}
          {icon}
          <button class="btn btn-primary" type="submit">Übernehmen</button>
        </form>
        <form method="post" action="/admin/buttons/cancel" class="mt-2">
          <button class="btn btn-secondary" type="submit">Abbrechen</button>
        </form>
        <p class="text-muted mt-3">Der englische Name und die englische Beschreibung werden aus den deutschen Feldern übernommen.</p>"#,
        title = html_escape::encode_text(title),
        name_de = input_field("Name (DE)", "name_de", &draft.name_de),
        desc_de = input_field("Beschreibung (DE)", "desc_de", &draft.desc_de),
        url = input_field("URL", "url", &draft.url),
        icon = input_field("Icon", "icon", &draft.icon),
    );

    render_layout(
        title,
        "admin",
        vec![
            breadcrumb("Admin", Some("/admin".to_string())),
            breadcrumb("Hub-Buttons", Some("/admin/edit?tab=buttons".to_string())),
            breadcrumb(title, None),
        ],
        &content,
    )
}

fn render_button_list(buttons: &[HubButton]) -> String {
    let entries = buttons
        .iter()
        .enumerate()
        .map(|(index, button)| {
            format!(
                r#"<div class="card mb-2 p-3">
                  <div class="d-flex justify-content-between align-items-center">
                    <div>
                      <strong>{name}</strong>
                      <p class="text-muted mb-0">{url}</p>
                    </div>
                    <div class="d-flex gap-2">
                      <a class="btn btn-sm btn-primary" href="/admin/buttons/{index}/edit">Bearbeiten</a>
                      <form method="post" action="/admin/buttons/{index}/delete"
                            onsubmit="return confirm('Button wirklich löschen?');">
                        <button class="btn btn-sm btn-danger" type="submit">Löschen</button>
                      </form>
                    </div>
                  </div>
                </div>"#,
                name = html_escape::encode_text(&button.name_de),
                url = html_escape::encode_text(&button.url),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="mb-3">
          {entries}
          <a class="btn btn-success w-100" href="/admin/buttons/new">+ Neuer Button</a>
          <p class="text-muted mt-2">Änderungen an der Liste werden erst mit "Speichern" übernommen.</p>
        </div>"#,
    )
}

fn render_form_fields(form: &ContentForm, active_tab: &str) -> String {
    let fields: [(&str, &str, &str, &str, bool); 18] = [
        ("profil", "Name", "name", &form.name, false),
        ("profil", "E-Mail", "email", &form.email, false),
        ("profil", "Adresse", "address", &form.address, false),
        ("profil", "Untertitel (DE)", "subtitle_de", &form.subtitle_de, false),
        ("profil", "Status (DE)", "status_de", &form.status_de, false),
        ("profil", "Alter", "age", &form.age, false),
        ("profil", "Vibe", "vibe", &form.vibe, false),
        ("profil", "Ort", "location", &form.location, false),
        ("profil", "GitHub URL", "github_url", &form.github_url, false),
        ("profil", "Instagram URL", "instagram_url", &form.instagram_url, false),
        ("impressum", "Firma / Name", "impressum_company", &form.impressum_company, false),
        ("impressum", "Adresszeile 1", "impressum_address_line1", &form.impressum_address_line1, false),
        ("impressum", "Adresszeile 2", "impressum_address_line2", &form.impressum_address_line2, false),
        ("impressum", "Land", "impressum_country", &form.impressum_country, false),
        ("impressum", "E-Mail", "impressum_email", &form.impressum_email, false),
        ("datenschutz", "Einleitung (DE)", "privacy_intro_de", &form.privacy_intro_de, true),
        ("datenschutz", "Datenverarbeitung (DE)", "privacy_data_processing_de", &form.privacy_data_processing_de, true),
        ("datenschutz", "Server-Logs (DE)", "privacy_server_logs_de", &form.privacy_server_logs_de, true),
    ];

    fields
        .iter()
        .map(|(tab, label, name, value, multiline)| {
            if *tab == active_tab {
                if *multiline {
                    textarea_field(label, name, value, 4)
                } else {
                    input_field(label, name, value)
                }
            } else {
                hidden_input(name, value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn active_class(active_tab: &str, tab: &str) -> &'static str {
    if active_tab == tab {
        "active"
    } else {
        ""
    }
}

fn password_field(label: &str, name: &str) -> String {
    format!(
        r#"<div class="mb-3">
            <label class="form-label" for="{name}">{label}</label>
            <input class="form-control" type="password" id="{name}" name="{name}">
          </div>"#,
        label = html_escape::encode_text(label),
        name = html_escape::encode_text(name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in_controls() -> PanelControls {
        PanelControls {
            login_visible: false,
            edit_visible: true,
            logout_visible: true,
        }
    }

    #[test]
    fn edit_page_renders_the_given_form_values() {
        let mut form = ContentForm::default();
        form.name = "Getippter Name".to_string();
        form.status_de = r#"Er sagte "hallo""#.to_string();

        let html = render_edit_page(&form, &[], logged_in_controls(), None, None, false);

        assert!(html.contains(r#"value="Getippter Name""#));
        assert!(html.contains(r#"value="Er sagte &quot;hallo&quot;""#));
    }

    #[test]
    fn logout_button_follows_control_visibility() {
        let form = ContentForm::default();

        let visible = render_edit_page(&form, &[], logged_in_controls(), None, None, false);
        assert!(visible.contains("/admin/logout"));

        let hidden = render_edit_page(&form, &[], PanelControls::default(), None, None, false);
        assert!(!hidden.contains("/admin/logout"));
    }
}
