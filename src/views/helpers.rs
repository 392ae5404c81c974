pub fn input_field(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<div class="mb-3">
            <label class="form-label" for="{name}">{label}</label>
            <input class="form-control" id="{name}" name="{name}" value="{value}">
          </div>"#,
        label = html_escape::encode_text(label),
        name = html_escape::encode_text(name),
        value = html_escape::encode_double_quoted_attribute(value),
    )
}

pub fn textarea_field(label: &str, name: &str, value: &str, rows: usize) -> String {
    format!(
        r#"<div class="mb-3">
            <label class="form-label" for="{name}">{label}</label>
            <textarea class="form-control" id="{name}" name="{name}" rows="{rows}">{value}</textarea>
          </div>"#,
        label = html_escape::encode_text(label),
        name = html_escape::encode_text(name),
        value = html_escape::encode_text(value),
    )
}

pub fn hidden_input(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{name}" value="{value}">"#,
        name = html_escape::encode_text(name),
        value = html_escape::encode_double_quoted_attribute(value),
    )
}

pub fn notice(message: Option<&str>, success: bool) -> String {
    let Some(message) = message else {
        return String::new();
    };
    let class = if success { "text-success" } else { "text-danger" };
    format!(
        r#"<p class="{class}">{message}</p>"#,
        message = html_escape::encode_text(message),
    )
}

pub fn current_datetime() -> String {
    let format = time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
        .unwrap_or_else(|_| time::format_description::parse("[year]-[month]-[day]").expect("format"));
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    now.format(&format).unwrap_or_else(|_| "n/a".to_string())
}
