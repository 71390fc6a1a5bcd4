use crate::config::{is_truthy, PurgeOptions};
use crate::error::{CoreError, CoreResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub const DEFAULT_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// A single purge call, fully resolved and ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct PurgeRequest {
    pub method: Method,
    pub url: String,
    /// Lowercased header names; caller overrides already applied.
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

impl PurgeRequest {
    pub fn from_options(api_base: &str, opts: &PurgeOptions) -> CoreResult<Self> {
        let (token, zone_id) = opts.validate()?;

        let mut headers = BTreeMap::new();
        headers.insert("authorization".to_string(), format!("Bearer {token}"));
        headers.insert("content-type".to_string(), "application/json".to_string());
        for (name, value) in &opts.headers {
            headers.insert(name.to_ascii_lowercase(), value.clone());
        }

        let request = Self {
            method: Method::POST,
            url: format!(
                "{}/zones/{}/purge_cache",
                api_base.trim_end_matches('/'),
                zone_id
            ),
            headers,
            body: opts.body.clone(),
        };
        request.header_map()?;
        Ok(request)
    }

    fn header_map(&self) -> CoreResult<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| CoreError::InvalidHeader(format!("`{name}`: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| CoreError::InvalidHeader(format!("value of `{name}`: {e}")))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurgeResponseBody {
    pub success: bool,
    pub errors: Option<Value>,
}

impl PurgeResponseBody {
    /// Reads `success` with loose truthiness; `errors` is kept verbatim.
    pub fn from_value(value: &Value) -> Self {
        Self {
            success: value.get("success").is_some_and(is_truthy),
            errors: value.get("errors").cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurgeResponse {
    pub status: u16,
    pub body: PurgeResponseBody,
}

impl PurgeResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status) && self.body.success
    }

    /// Pretty JSON of the status and provider errors, for warning lines.
    pub fn failure_report(&self) -> String {
        let report = json!({
            "status": self.status,
            "errors": self.body.errors,
        });
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| report.to_string())
    }
}

/// Sends purge requests. One call, one request: nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct PurgeClient {
    http: Client,
    api_base: String,
}

impl PurgeClient {
    pub fn new() -> CoreResult<Self> {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    pub fn with_api_base(api_base: impl Into<String>) -> CoreResult<Self> {
        let http = Client::builder().use_rustls_tls().build()?;
        Ok(Self {
            http,
            api_base: api_base.into(),
        })
    }

    pub fn build_request(&self, opts: &PurgeOptions) -> CoreResult<PurgeRequest> {
        PurgeRequest::from_options(&self.api_base, opts)
    }

    pub async fn purge(&self, opts: &PurgeOptions) -> CoreResult<PurgeResponse> {
        let request = self.build_request(opts)?;
        self.send(&request).await
    }

    pub async fn send(&self, request: &PurgeRequest) -> CoreResult<PurgeResponse> {
        let headers = request.header_map()?;
        let payload = serde_json::to_vec(&request.body)?;

        tracing::debug!(url = %request.url, "sending purge request");
        let response = self
            .http
            .request(request.method.clone(), &request.url)
            .headers(headers)
            .body(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|source| CoreError::MalformedResponse { status, source })?;
        let body = PurgeResponseBody::from_value(&value);
        tracing::debug!(status, success = body.success, "purge response received");

        Ok(PurgeResponse { status, body })
    }
}
