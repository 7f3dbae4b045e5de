//! Luraph API client implementation
//!
//! The client owns the credential and a `reqwest::Client` handle and
//! exposes the four API operations. All calls are a single round trip;
//! polling cadence, deadlines and cancellation belong to the caller.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{Method, Response, StatusCode};
use serde_json::{Value, json};
use url::Url;

use crate::error::{ApiError, LuraphError, Result};
use crate::types::{
    LuraphDownloadResponse, LuraphJobStatusResponse, LuraphNewJobResponse, LuraphNodesResponse,
    LuraphOptionList,
};
use crate::utils::extract_filename;

/// Production endpoint of the Luraph API
const DEFAULT_BASE_URL: &str = "https://api.lura.ph/v1/";

/// Authentication header attached to every request
const API_KEY_HEADER: &str = "Luraph-API-Key";

/// Message of the error entry synthesized when a failed response has no
/// structured `errors` array
const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Filename used when a download response yields no usable
/// `Content-Disposition` filename
const DEFAULT_RESULT_NAME: &str = "script-obfuscated.lua";

/// Client for the Luraph obfuscation API
///
/// Holds only immutable state (credential, base URL) plus a
/// `reqwest::Client` handle, so one instance can drive any number of
/// concurrent calls without locking. No responses are cached and no
/// retries are performed.
///
/// The API key is never logged; the `Debug` representation omits it.
pub struct Luraph {
    base_url: Url,
    api_key: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for Luraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The credential is deliberately omitted
        f.debug_struct("Luraph")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl Luraph {
    /// Create a client for the production endpoint
    ///
    /// The key is not validated locally; a missing or revoked key shows
    /// up as a structured API error on the first call.
    pub fn new(api_key: impl Into<String>) -> Self {
        #[allow(clippy::expect_used)]
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default endpoint is a valid URL");
        Self {
            base_url,
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client against a different endpoint
    ///
    /// Intended for tests and staging deployments. `base_url` should end
    /// with a `/` so relative API paths resolve underneath it.
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        })
    }

    /// List the available obfuscation nodes
    ///
    /// `recommended_id` is `None` when the server marks no node as
    /// stable; callers must handle that case explicitly instead of
    /// falling back to an arbitrary node.
    pub async fn get_nodes(&self) -> Result<LuraphNodesResponse> {
        let value = self
            .request_json("obfuscate/nodes", Method::GET, None)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Submit a script for obfuscation
    ///
    /// The script text is always base64-encoded before transmission,
    /// even when it already looks encoded; the server decodes exactly
    /// one layer, so re-submitting a downloaded result double-encodes
    /// as expected. Option values are not validated client-side --
    /// invalid combinations come back as an [`ApiError`] from the
    /// server.
    pub async fn create_new_job(
        &self,
        node: &str,
        script: &str,
        file_name: &str,
        options: &LuraphOptionList,
        use_tokens: bool,
        enforce_settings: bool,
    ) -> Result<LuraphNewJobResponse> {
        let body = json!({
            "node": node,
            "script": BASE64.encode(script.as_bytes()),
            "fileName": file_name,
            "options": options,
            "useTokens": use_tokens,
            "enforceSettings": enforce_settings,
        });

        let value = self
            .request_json("obfuscate/new", Method::POST, Some(&body))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Poll the status of a job once
    ///
    /// The API exposes exactly two states: absence of an error string is
    /// success. There is no separate "still running" signal, and this
    /// client does not invent one. Callers wanting to block until
    /// completion own their own loop-with-delay around this call.
    pub async fn get_job_status(&self, job_id: &str) -> Result<LuraphJobStatusResponse> {
        let value = self
            .request_json(&format!("obfuscate/status/{}", job_id), Method::GET, None)
            .await?;

        let error = value
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string);

        Ok(LuraphJobStatusResponse {
            success: error.is_none(),
            error,
        })
    }

    /// Download the obfuscated result of a completed job
    ///
    /// Uses the raw response mode: the body is consumed as text, never
    /// parsed as JSON. The filename comes from the `Content-Disposition`
    /// header and falls back to `script-obfuscated.lua`.
    pub async fn download_result(&self, job_id: &str) -> Result<LuraphDownloadResponse> {
        let response = self
            .request_raw(&format!("obfuscate/download/{}", job_id))
            .await?;

        let file_name = response
            .headers()
            .get("content-disposition")
            .and_then(|value| value.to_str().ok())
            .and_then(extract_filename)
            .unwrap_or_else(|| DEFAULT_RESULT_NAME.to_string());

        let data = response.text().await?;

        Ok(LuraphDownloadResponse { file_name, data })
    }

    /// Issue an authenticated request and return the parsed JSON body
    ///
    /// An empty success body parses as an empty object. Server-sent
    /// warnings are surfaced via `tracing` without altering the value.
    async fn request_json(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value> {
        let response = self.send(path, method, body).await?;
        let (status, value) = read_lenient(response).await?;
        emit_warnings(&value);

        if status.is_success() {
            Ok(value)
        } else {
            Err(classify_failure(value).into())
        }
    }

    /// Issue an authenticated GET and return the unconsumed response
    ///
    /// Required for artifact downloads, where parsing the payload as
    /// JSON would corrupt it. Failed statuses still go through the
    /// normal error classification.
    async fn request_raw(&self, path: &str) -> Result<Response> {
        let response = self.send(path, Method::GET, None).await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let (_, value) = read_lenient(response).await?;
        emit_warnings(&value);
        Err(classify_failure(value).into())
    }

    /// Build and send one request with the credential header attached
    async fn send(&self, path: &str, method: Method, body: Option<&Value>) -> Result<Response> {
        let url = self.base_url.join(path)?;

        let mut request = self
            .client
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(body) = body {
            // Serializes the body and sets Content-Type: application/json
            request = request.json(body);
        }

        Ok(request.send().await?)
    }
}

/// Read a response body leniently
///
/// Empty bodies become an empty JSON object, so endpoints that return no
/// payload never produce a spurious parse failure. A non-JSON body on a
/// failed status is kept as a raw string so it can travel inside the
/// synthesized error entry; on a successful status it is a real error.
async fn read_lenient(response: Response) -> Result<(StatusCode, Value)> {
    let status = response.status();
    let text = response.text().await?;

    let value = if text.is_empty() {
        json!({})
    } else {
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(err) if status.is_success() => return Err(err.into()),
            Err(_) => Value::String(text),
        }
    };

    Ok((status, value))
}

/// Surface server-sent warnings as non-fatal diagnostics
fn emit_warnings(value: &Value) {
    let Some(warnings) = value.get("warnings").and_then(Value::as_array) else {
        return;
    };

    for warning in warnings {
        match warning.as_str() {
            Some(text) => tracing::warn!("Luraph API warning: {}", text),
            None => tracing::warn!("Luraph API warning: {}", warning),
        }
    }
}

/// Turn a failed response body into a structured [`ApiError`]
///
/// Uses the body's `errors` array verbatim when it is present, well
/// formed and non-empty; otherwise synthesizes a single generic entry
/// that preserves the body for diagnostics. Either way the resulting
/// error carries at least one entry.
fn classify_failure(body: Value) -> ApiError {
    let entries = body.get("errors").and_then(Value::as_array).and_then(|raw| {
        let entries = raw
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()))
            .collect::<std::result::Result<Vec<LuraphError>, _>>()
            .ok()?;
        (!entries.is_empty()).then_some(entries)
    });

    match entries {
        Some(entries) => ApiError::new(entries),
        None => ApiError::new(vec![LuraphError {
            param: None,
            message: UNKNOWN_ERROR_MESSAGE.to_string(),
            raw_body: Some(body),
        }]),
    }
}
