//! Typed HTTP client for the notekeep REST API.
use crate::backend::NoteBackend;
use crate::errors::RequestError;
use crate::{Note, NoteDraft, NoteID};
use futures::future::BoxFuture;
use reqwest::{Client, Response};
use serde::Deserialize;

/// Body of the list response.
///
/// The backend sends `null` (or nothing) instead of an empty array when there are no notes.
#[derive(Debug, Deserialize)]
struct ListResponse {
    data: Option<Vec<Note>>,
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl Default for HttpBackend {
    fn default() -> Self {
        HttpBackend::new(super::DEFAULT_BASE_URL)
    }
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        HttpBackend {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn note_url(&self, id: NoteID) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

fn check_status(response: Response) -> Result<Response, RequestError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RequestError::Status(status.as_u16()))
    }
}

impl NoteBackend for HttpBackend {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Note>, RequestError>> {
        Box::pin(async move {
            let response = self.client.get(self.collection_url()).send().await?;
            let body: ListResponse = check_status(response)?.json().await?;
            Ok(body.data.unwrap_or_default())
        })
    }

    fn create(&self, draft: NoteDraft) -> BoxFuture<'_, Result<(), RequestError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(self.collection_url())
                .json(&draft)
                .send()
                .await?;
            check_status(response)?;
            Ok(())
        })
    }

    fn update(&self, id: NoteID, draft: NoteDraft) -> BoxFuture<'_, Result<(), RequestError>> {
        Box::pin(async move {
            let response = self.client.put(self.note_url(id)).json(&draft).send().await?;
            check_status(response)?;
            Ok(())
        })
    }

    fn delete(&self, id: NoteID) -> BoxFuture<'_, Result<(), RequestError>> {
        Box::pin(async move {
            let response = self.client.delete(self.note_url(id)).send().await?;
            check_status(response)?;
            Ok(())
        })
    }
}
