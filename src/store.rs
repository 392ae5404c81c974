use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::SiteContent;
use crate::security::Credentials;
use crate::storage;

/// Transport or parse failure while talking to the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkError(pub String);

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "connection error: {}", self.0)
    }
}

impl std::error::Error for NetworkError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The store rejected the credentials; carries the store's message.
    Rejected(String),
    Network(NetworkError),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::Rejected(message) => write!(f, "{message}"),
            AuthError::Network(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AuthError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The store refused the document; carries the server-supplied message.
    Rejected(String),
    Network(NetworkError),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Rejected(message) => write!(f, "{message}"),
            SaveError::Network(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SaveError {}

/// Session-based authentication plus a single-document content resource.
/// Saving replaces the whole document; there is no partial update.
#[async_trait::async_trait]
pub trait ContentStore: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<(), AuthError>;
    async fn logout(&self) -> Result<(), NetworkError>;
    async fn fetch_content(&self) -> Result<SiteContent, NetworkError>;
    async fn save_content(&self, content: &SiteContent) -> Result<(), SaveError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Client for a remote hubsite instance speaking the `/api` wire contract.
/// The session cookie issued by the login endpoint lives in the client's
/// cookie jar.
pub struct HttpContentStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpContentStore {
    pub fn new(base_url: &str) -> Result<Self, NetworkError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|err| NetworkError(format!("failed to build http client: {err}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait::async_trait]
impl ContentStore for HttpContentStore {
    async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.url("/api/login"))
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(|err| AuthError::Network(NetworkError(format!("request failed: {err}"))))?;

        let status = response.status();
        let body: LoginResponse = response.json().await.map_err(|err| {
            AuthError::Network(NetworkError(format!("failed to read response: {err}")))
        })?;

        if status.is_success() && body.success {
            Ok(())
        } else {
            Err(AuthError::Rejected(
                body.message.unwrap_or_else(|| "login rejected".to_string()),
            ))
        }
    }

    async fn logout(&self) -> Result<(), NetworkError> {
        let response = self
            .client
            .post(self.url("/api/logout"))
            .send()
            .await
            .map_err(|err| NetworkError(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(NetworkError(format!(
                "request failed: status {}",
                response.status()
            )));
        }
        Ok(())
    }

    async fn fetch_content(&self) -> Result<SiteContent, NetworkError> {
        let response = self
            .client
            .get(self.url("/api/content"))
            .send()
            .await
            .map_err(|err| NetworkError(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(NetworkError(format!(
                "request failed: status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|err| NetworkError(format!("failed to read response: {err}")))
    }

    async fn save_content(&self, content: &SiteContent) -> Result<(), SaveError> {
        let response = self
            .client
            .post(self.url("/api/content"))
            .json(content)
            .send()
            .await
            .map_err(|err| SaveError::Network(NetworkError(format!("request failed: {err}"))))?;

        let body: SaveResponse = response.json().await.map_err(|err| {
            SaveError::Network(NetworkError(format!("failed to read response: {err}")))
        })?;

        if body.success {
            Ok(())
        } else {
            Err(SaveError::Rejected(
                body.error.unwrap_or_else(|| "save rejected".to_string()),
            ))
        }
    }
}

/// Store backed by the local content file, used when the bundled server
/// edits its own site. Login checks the owner credentials; the session
/// itself is tracked by the caller.
pub struct FileContentStore {
    content_path: PathBuf,
    credentials: Credentials,
}

impl FileContentStore {
    pub fn new(content_path: PathBuf, credentials: Credentials) -> Self {
        Self {
            content_path,
            credentials,
        }
    }
}

#[async_trait::async_trait]
impl ContentStore for FileContentStore {
    async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username == self.credentials.username && password == self.credentials.password {
            Ok(())
        } else {
            Err(AuthError::Rejected(
                "Invalid username or password".to_string(),
            ))
        }
    }

    async fn logout(&self) -> Result<(), NetworkError> {
        Ok(())
    }

    async fn fetch_content(&self) -> Result<SiteContent, NetworkError> {
        storage::load_content(&self.content_path)
            .await
            .map_err(NetworkError)
    }

    async fn save_content(&self, content: &SiteContent) -> Result<(), SaveError> {
        storage::save_content(&self.content_path, content)
            .await
            .map_err(|message| SaveError::Network(NetworkError(message)))
    }
}
