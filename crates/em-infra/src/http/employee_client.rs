//! REST client for the employee records API.
//!
//! Routes, relative to the configured base URL:
//!
//! | Operation       | Request                   |
//! |-----------------|---------------------------|
//! | `create_record` | `POST /employees`         |
//! | `update_record` | `PUT /employees/{id}`     |
//! | `fetch_record`  | `GET /employees/{id}`     |
//! | `fetch_all`     | `GET /employees`          |
//! | `delete_record` | `DELETE /employees/{id}`  |

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use em_core::config::ApiConfig;
use em_core::employee::{EmployeeDraft, EmployeeRecord};
use em_core::ids::EmployeeId;
use em_core::ports::{EmployeeTransportPort, TransportError};

pub struct HttpEmployeeTransport {
    client: Client,
    base_url: String,
}

impl HttpEmployeeTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> Result<Url, TransportError> {
        self.endpoint(None)
    }

    /// The id always lands in a single percent-encoded path segment.
    fn record_url(&self, id: &EmployeeId) -> Result<Url, TransportError> {
        // dot segments are dropped or resolved by URL parsing, so no request
        // could reach them
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(TransportError::NotFound(id.to_string()));
        }
        self.endpoint(Some(id))
    }

    fn endpoint(&self, id: Option<&EmployeeId>) -> Result<Url, TransportError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            TransportError::Transport(format!("invalid API base URL {}: {e}", self.base_url))
        })?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                TransportError::Transport(format!("API base URL {} cannot carry a path", self.base_url))
            })?;
            segments.pop_if_empty().push("employees");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, TransportError> {
        let response = request.send().await.map_err(request_error)?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "employee API responded");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        warn!(status = status.as_u16(), %message, "employee API rejected request");
        if status == StatusCode::NOT_FOUND {
            Err(TransportError::NotFound(message))
        } else {
            Err(TransportError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TransportError> {
        response
            .json::<T>()
            .await
            .map_err(|e| TransportError::Transport(format!("invalid response body: {e}")))
    }

    /// Write endpoints may answer with the stored record or with a bare
    /// acknowledgement; the latter falls back to the submitted values.
    async fn saved_record(
        response: Response,
        id: Option<&EmployeeId>,
        draft: &EmployeeDraft,
    ) -> EmployeeRecord {
        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<EmployeeRecord>(&text) {
            Ok(record) if !record.employee_name.is_empty() => EmployeeRecord {
                id: record.id.or_else(|| id.cloned()),
                ..record
            },
            _ => EmployeeRecord::from_draft(id.cloned(), draft.clone()),
        }
    }
}

fn request_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Transport(format!("request timed out: {err}"))
    } else {
        TransportError::Transport(err.to_string())
    }
}

/// Prefers a `message` or `error` field of a JSON body, then the raw body,
/// then the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string()
}

#[async_trait]
impl EmployeeTransportPort for HttpEmployeeTransport {
    async fn create_record(&self, draft: &EmployeeDraft) -> Result<EmployeeRecord, TransportError> {
        let response = self
            .send(self.client.post(self.collection_url()?).json(draft))
            .await?;
        Ok(Self::saved_record(response, None, draft).await)
    }

    async fn update_record(
        &self,
        id: &EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<EmployeeRecord, TransportError> {
        let response = self
            .send(self.client.put(self.record_url(id)?).json(draft))
            .await?;
        Ok(Self::saved_record(response, Some(id), draft).await)
    }

    async fn fetch_record(&self, id: &EmployeeId) -> Result<EmployeeRecord, TransportError> {
        let response = self
            .send(self.client.get(self.record_url(id)?))
            .await
            .map_err(|err| match err {
                TransportError::NotFound(_) => TransportError::NotFound(id.to_string()),
                other => other,
            })?;
        Self::decode(response).await
    }

    async fn fetch_all(&self) -> Result<Vec<EmployeeRecord>, TransportError> {
        let response = self.send(self.client.get(self.collection_url()?)).await?;
        Self::decode(response).await
    }

    async fn delete_record(&self, id: &EmployeeId) -> Result<(), TransportError> {
        self.send(self.client.delete(self.record_url(id)?)).await?;
        Ok(())
    }
}
