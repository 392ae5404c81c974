use hubsite::models::SiteContent;
use hubsite::security::Credentials;
use hubsite::store::{AuthError, ContentStore, FileContentStore};

fn owner_credentials() -> Credentials {
    Credentials {
        username: "owner".to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn login_checks_owner_credentials() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileContentStore::new(dir.path().join("content.json"), owner_credentials());

    store.login("owner", "secret").await.expect("login failed");

    let result = store.login("owner", "wrong").await;
    assert!(matches!(result, Err(AuthError::Rejected(_))));
}

#[tokio::test]
async fn save_then_fetch_round_trips_through_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileContentStore::new(dir.path().join("content.json"), owner_credentials());

    let mut content = SiteContent::default();
    content.name = "Owner".to_string();
    content.subtitle_de = "Untertitel".to_string();
    store.save_content(&content).await.expect("save failed");

    let fetched = store.fetch_content().await.expect("fetch failed");
    assert_eq!(fetched, content);
}

#[tokio::test]
async fn fetch_from_fresh_store_yields_default_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileContentStore::new(dir.path().join("content.json"), owner_credentials());

    let fetched = store.fetch_content().await.expect("fetch failed");
    assert_eq!(fetched, SiteContent::default());
}
