//! Reqwest-backed record gateway adapter.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP error mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::complaint::Complaint;
use crate::domain::feedback::Feedback;
use crate::domain::ports::{RecordGateway, RecordGatewayError};

const COMPLAINTS_RESOURCE: &str = "complaints";
const FEEDBACKS_RESOURCE: &str = "feedbacks";

/// Record gateway performing HTTP requests against one base endpoint.
///
/// The collection resources live directly under the base URL:
/// `<base>/complaints` and `<base>/feedbacks`, `GET` to fetch and `POST` to
/// save; saves answer with the stored record.
pub struct HttpRecordGateway {
    client: Client,
    complaints_url: Url,
    feedbacks_url: Url,
}

impl HttpRecordGateway {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RecordGatewayError::Transport`] when the base URL cannot
    /// address the collection resources or the client cannot be built.
    pub fn new(base: &Url, timeout: Duration) -> Result<Self, RecordGatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| RecordGatewayError::transport(error.to_string()))?;
        Ok(Self {
            client,
            complaints_url: resource_url(base, COMPLAINTS_RESOURCE)?,
            feedbacks_url: resource_url(base, FEEDBACKS_RESOURCE)?,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &Url) -> Result<T, RecordGatewayError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response).await
    }

    async fn save<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        url: &Url,
        body: &B,
    ) -> Result<T, RecordGatewayError> {
        let response = self
            .client
            .post(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response).await
    }
}

#[async_trait]
impl RecordGateway for HttpRecordGateway {
    async fn fetch_complaints(&self) -> Result<Vec<Complaint>, RecordGatewayError> {
        self.fetch(&self.complaints_url).await
    }

    async fn fetch_feedbacks(&self) -> Result<Vec<Feedback>, RecordGatewayError> {
        self.fetch(&self.feedbacks_url).await
    }

    async fn save_complaint(
        &self,
        complaint: &Complaint,
    ) -> Result<Complaint, RecordGatewayError> {
        self.save(&self.complaints_url, complaint).await
    }

    async fn save_feedback(&self, feedback: &Feedback) -> Result<Feedback, RecordGatewayError> {
        self.save(&self.feedbacks_url, feedback).await
    }
}

fn resource_url(base: &Url, resource: &str) -> Result<Url, RecordGatewayError> {
    // Url::join treats a base without a trailing slash as a file; normalise
    // so `…/api` and `…/api/` address the same collections.
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    base.join(resource).map_err(|error| {
        RecordGatewayError::transport(format!("cannot address {resource}: {error}"))
    })
}

async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RecordGatewayError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    serde_json::from_slice(body.as_ref())
        .map_err(|error| RecordGatewayError::decode(format!("invalid JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> RecordGatewayError {
    if error.is_timeout() {
        RecordGatewayError::timeout(error.to_string())
    } else {
        RecordGatewayError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RecordGatewayError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        "no response body".to_owned()
    } else {
        preview
    };
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            RecordGatewayError::timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => RecordGatewayError::rejected(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
