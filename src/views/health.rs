use crate::views::layout::{breadcrumb, render_layout};

pub fn health_html() -> String {
    let content = r#"<h1 class="h3 mb-3">Status</h1>
        <p class="text-success">Der Server läuft.</p>"#;
    render_layout(
        "Status",
        "hub",
        vec![breadcrumb("Status", None)],
        content,
    )
}
