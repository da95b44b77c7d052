use super::SyncClient;
use crate::error::{NoteboardError, Result};
use crate::model::{Note, NoteDraft, NoteId};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON-over-HTTP client for a notes collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpSyncClient {
    client: Client,
    base_url: String,
}

impl HttpSyncClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Sends one request and returns the raw body of a successful response.
    async fn send(
        &self,
        method: Method,
        url: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Vec<u8>> {
        debug!(%method, url, "sending request");

        let transport = |source: reqwest::Error| NoteboardError::Transport {
            method: method.clone(),
            url: url.to_string(),
            source,
        };

        let response = build(self.client.request(method.clone(), url))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NoteboardError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        debug!(%method, url, status = status.as_u16(), "request succeeded");
        Ok(body.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<T> {
        let body = self.send(method.clone(), url, build).await?;
        serde_json::from_slice(&body).map_err(|source| NoteboardError::Decode {
            method,
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl SyncClient for HttpSyncClient {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        self.send_json(Method::GET, &self.base_url, |req| req).await
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note> {
        self.send_json(Method::POST, &self.base_url, |req| req.json(draft))
            .await
    }

    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> Result<Note> {
        self.send_json(Method::PUT, &self.note_url(id), |req| req.json(draft))
            .await
    }

    async fn delete_note(&self, id: NoteId) -> Result<()> {
        self.send(Method::DELETE, &self.note_url(id), |req| req)
            .await
            .map(|_| ())
    }
}
