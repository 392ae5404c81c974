use std::path::{Path, PathBuf};

use crate::models::SiteContent;

pub fn base_dir() -> PathBuf {
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("hubsite");
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("hubsite");
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config").join("hubsite");
    }
    PathBuf::from("hubsite-data")
}

pub fn content_path() -> PathBuf {
    base_dir().join("content.json")
}

/// Loads the site content document. A missing file is not an error; it
/// loads as the default (empty) document.
pub async fn load_content(path: &Path) -> Result<SiteContent, String> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => {
            serde_json::from_str(&contents).map_err(|err| format!("failed to parse content: {err}"))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(SiteContent::default()),
        Err(err) => Err(format!("failed to read content: {err}")),
    }
}

/// Replaces the stored document wholesale. Writes to a temp file first and
/// renames it into place so a crashed save never leaves a torn document.
pub async fn save_content(path: &Path, content: &SiteContent) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|err| format!("failed to create content dir: {err}"))?;
    }

    let data = serde_json::to_string_pretty(content)
        .map_err(|err| format!("failed to serialize content: {err}"))?;

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, data)
        .await
        .map_err(|err| format!("failed to write temp content: {err}"))?;

    if tokio::fs::metadata(path).await.is_ok() {
        tokio::fs::remove_file(path)
            .await
            .map_err(|err| format!("failed to remove old content: {err}"))?;
    }

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|err| format!("failed to move content into place: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HubButton, PRIVACY_INTRO_EN};

    #[tokio::test]
    async fn missing_file_loads_default_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("content.json");

        let content = load_content(&path).await.expect("load failed");

        assert_eq!(content, SiteContent::default());
        assert_eq!(content.privacy.intro_en, PRIVACY_INTRO_EN);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("content.json");

        let mut content = SiteContent::default();
        content.name = "Owner".to_string();
        content.hub_buttons.push(HubButton {
            id: "Blog".to_string(),
            name_de: "Blog".to_string(),
            name_en: "Blog".to_string(),
            url: "https://example.org".to_string(),
            ..HubButton::default()
        });

        save_content(&path, &content).await.expect("save failed");
        let loaded = load_content(&path).await.expect("load failed");

        assert_eq!(loaded, content);
    }

    #[tokio::test]
    async fn save_overwrites_existing_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("content.json");

        let mut first = SiteContent::default();
        first.name = "First".to_string();
        save_content(&path, &first).await.expect("save failed");

        let mut second = SiteContent::default();
        second.name = "Second".to_string();
        save_content(&path, &second).await.expect("save failed");

        let loaded = load_content(&path).await.expect("load failed");
        assert_eq!(loaded.name, "Second");
    }
}
