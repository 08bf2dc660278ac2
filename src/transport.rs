//! Transport collaborator: moves one encoded request to the exchange and
//! hands back the raw reply.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://api.betfair.com/exchange";

/// Failure reported by a [`Transport`].
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The exchange answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid header value for {name}")]
    InvalidHeader { name: &'static str },

    /// Failure from a transport that is not HTTP based.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Decode the exchange's structured error payload from a status error.
    ///
    /// Returns `None` for any other failure or when the body is not an
    /// API-NG fault.
    pub fn api_exception(&self) -> Option<ApiNgException> {
        match self {
            TransportError::Status { body, .. } => ApiNgException::from_body(body),
            _ => None,
        }
    }
}

/// Error detail the exchange embeds in failed replies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNgException {
    pub error_code: String,
    #[serde(default)]
    pub error_details: Option<String>,
    #[serde(default, rename = "requestUUID")]
    pub request_uuid: Option<String>,
}

#[derive(Deserialize)]
struct Fault {
    detail: FaultDetail,
}

#[derive(Deserialize)]
struct FaultDetail {
    #[serde(rename = "APINGException")]
    exception: ApiNgException,
}

impl ApiNgException {
    /// Accepts both the bare exception and the `{"detail":{"APINGException":..}}`
    /// fault wrapper.
    pub fn from_body(body: &str) -> Option<Self> {
        if let Ok(fault) = serde_json::from_str::<Fault>(body) {
            return Some(fault.detail.exception);
        }
        serde_json::from_str(body).ok()
    }
}

/// Sends an encoded request for `method` within `service_group` and returns
/// the raw response body.
///
/// Implementations own connectivity, authentication headers and status
/// handling. Concurrent use of one session is as safe as the transport is.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(
        &self,
        service_group: &str,
        method: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError>;
}

/// HTTP transport for the exchange's JSON REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(
        endpoint: impl Into<String>,
        app_key: &str,
        session_token: &str,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-application"),
            HeaderValue::from_str(app_key)
                .map_err(|_| TransportError::InvalidHeader { name: "X-Application" })?,
        );
        headers.insert(
            HeaderName::from_static("x-authentication"),
            HeaderValue::from_str(session_token)
                .map_err(|_| TransportError::InvalidHeader { name: "X-Authentication" })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// e.g. `https://api.betfair.com/exchange/betting/rest/v1.0/listEvents/`
    pub fn url(&self, service_group: &str, method: &str) -> String {
        format!(
            "{}/{}/rest/v1.0/{}/",
            self.endpoint.trim_end_matches('/'),
            service_group,
            method
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn invoke(
        &self,
        service_group: &str,
        method: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError> {
        let url = self.url(service_group, method);
        debug!(%url, "POST");

        let response = self.client.post(&url).body(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }
}
