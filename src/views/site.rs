use hubsite::models::SiteContent;

use crate::views::layout::{breadcrumb, render_layout};

pub fn render_hub_page(content: &SiteContent) -> String {
    let buttons = content
        .hub_buttons
        .iter()
        .map(|button| {
            format!(
                r#"<a class="hub-button" href="{url}">
                  <span class="hub-button-icon" data-icon="{icon}"></span>
                  <span class="hub-button-name">{name}</span>
                  <span class="hub-button-desc">{desc}</span>
                </a>"#,
                url = html_escape::encode_double_quoted_attribute(&button.url),
                icon = html_escape::encode_double_quoted_attribute(&button.icon),
                name = html_escape::encode_text(&button.name_de),
                desc = html_escape::encode_text(&button.desc_de),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let status = if content.status_de.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="hub-status">{status}</p>"#,
            status = html_escape::encode_text(&content.status_de),
        )
    };

    let details = [
        ("Alter", &content.age),
        ("Vibe", &content.vibe),
        ("Ort", &content.location),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| {
        format!(
            "<li><strong>{label}:</strong> {value}</li>",
            value = html_escape::encode_text(value),
        )
    })
    .collect::<Vec<_>>()
    .join("\n");

    let socials = [
        ("GitHub", &content.github_url),
        ("Instagram", &content.instagram_url),
    ]
    .iter()
    .filter(|(_, url)| !url.is_empty())
    .map(|(label, url)| {
        format!(
            r#"<a class="hub-social" href="{url}">{label}</a>"#,
            url = html_escape::encode_double_quoted_attribute(url),
        )
    })
    .collect::<Vec<_>>()
    .join("\n");

    let page = format!(
        r#"<div class="hub">
          <h1 class="hub-name">{name}</h1>
          <p class="hub-subtitle">{subtitle}</p>
          {status}
          <ul class="hub-details">{details}</ul>
          <div class="hub-buttons">{buttons}</div>
          <div class="hub-socials">{socials}</div>
        </div>"#,
        name = html_escape::encode_text(&content.name),
        subtitle = html_escape::encode_text(&content.subtitle_de),
    );

    render_layout("Hub", "hub", vec![], &page)
}

pub fn render_impressum_page(content: &SiteContent) -> String {
    let impressum = &content.impressum;
    let page = format!(
        r#"<h1 class="h3 mb-3">Impressum</h1>
        <p>{company}<br>{address_line1}<br>{address_line2}<br>{country}</p>
        <p>E-Mail: {email}</p>
        <p>Verantwortlich für den Inhalt: {responsible}</p>"#,
        company = html_escape::encode_text(&impressum.company),
        address_line1 = html_escape::encode_text(&impressum.address_line1),
        address_line2 = html_escape::encode_text(&impressum.address_line2),
        country = html_escape::encode_text(&impressum.country),
        email = html_escape::encode_text(&impressum.email),
        responsible = html_escape::encode_text(&impressum.responsible),
    );

    render_layout(
        "Impressum",
        "impressum",
        vec![breadcrumb("Impressum", None)],
        &page,
    )
}

pub fn render_privacy_page(content: &SiteContent) -> String {
    let privacy = &content.privacy;
    let page = format!(
        r#"<h1 class="h3 mb-3">Datenschutz</h1>
        <section>
          <p>{intro_de}</p>
          <h2 class="h5">Datenverarbeitung</h2>
          <p>{data_processing_de}</p>
          <h2 class="h5">Server-Logs</h2>
          <p>{server_logs_de}</p>
        </section>
        <hr>
        <section lang="en">
          <h2 class="h5">Privacy (English)</h2>
          <p>{intro_en}</p>
          <p>{data_processing_en}</p>
          <p>{server_logs_en}</p>
        </section>"#,
        intro_de = html_escape::encode_text(&privacy.intro_de),
        data_processing_de = html_escape::encode_text(&privacy.data_processing_de),
        server_logs_de = html_escape::encode_text(&privacy.server_logs_de),
        intro_en = html_escape::encode_text(&privacy.intro_en),
        data_processing_en = html_escape::encode_text(&privacy.data_processing_en),
        server_logs_en = html_escape::encode_text(&privacy.server_logs_en),
    );

    render_layout(
        "Datenschutz",
        "datenschutz",
        vec![breadcrumb("Datenschutz", None)],
        &page,
    )
}
