//! HTTP API Client
//!
//! Functions for communicating with the ChemViz analytics REST API.
//!
//! Every call takes an explicit [`Session`]: the credential is a value that
//! is threaded through request construction, not a process-wide default
//! header. A 401 from the backend is not specially interpreted; it surfaces
//! like any other request failure.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use gloo_net::http::{Request, RequestBuilder, Response};
use std::collections::BTreeMap;

/// Base URL of the analytics backend
pub const API_BASE: &str = "http://localhost:8000/api";

/// Per-login session: base URL plus the encoded `Basic` credential.
///
/// Constructed once at login and cloned into every request. Overwritten
/// wholesale on the next login attempt; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    base_url: String,
    username: String,
    auth_header: String,
}

impl Session {
    pub fn new(username: &str, password: &str) -> Self {
        Self::with_base_url(API_BASE, username, password)
    }

    pub fn with_base_url(base_url: &str, username: &str, password: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            auth_header: format!("Basic {}", basic_token(username, password)),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&format!("{}/{}", self.base_url, path))
            .header("Authorization", &self.auth_header)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&format!("{}/{}", self.base_url, path))
            .header("Authorization", &self.auth_header)
    }
}

/// Encode `username:password` for a `Basic` authorization header.
///
/// Infallible for any pair of strings, which is why login never shows the
/// "Invalid credentials" message in practice.
fn basic_token(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", username, password))
}

// ============ Response Types ============

/// Aggregate statistics for the most recently processed dataset.
///
/// Every field is optional: when nothing has been uploaded yet the backend
/// answers `{"message": "No data available"}` with status 200, and that body
/// must decode cleanly to an empty summary.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub total_equipment: Option<u32>,
    #[serde(default)]
    pub avg_flowrate: Option<f64>,
    #[serde(default)]
    pub avg_pressure: Option<f64>,
    #[serde(default)]
    pub avg_temperature: Option<f64>,
    #[serde(default)]
    pub type_distribution: Option<BTreeMap<String, u32>>,
}

impl Summary {
    /// Charts are only rendered for a summary that identifies a dataset.
    pub fn is_chartable(&self) -> bool {
        self.id.is_some()
    }
}

/// One row of the upload history table.
///
/// The backend returns full summary rows here; only the columns the table
/// renders are decoded, the rest are ignored.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub uploaded_at: String,
    pub total_equipment: u32,
}

/// Response body of a successful dataset upload.
#[derive(Debug, Default, serde::Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub dataset_id: Option<i64>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
}

/// Extract the backend's structured error from a non-OK response, falling
/// back to a generic message.
async fn error_message(response: Response) -> String {
    let status = response.status();
    response
        .json::<ApiError>()
        .await
        .map(|e| e.error)
        .unwrap_or_else(|_| format!("Request failed with status {}", status))
}

// ============ API Functions ============

/// Fetch the upload history (newest first, capped at 5 by the backend).
pub async fn fetch_history(session: &Session) -> Result<Vec<HistoryEntry>, String> {
    let response = session
        .get("history/")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the summary for the most recently processed dataset.
pub async fn fetch_summary(session: &Session) -> Result<Summary, String> {
    let response = session
        .get("summary/")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Upload a CSV dataset as a multipart form under the `file` field.
///
/// The browser supplies the multipart boundary, so no Content-Type header is
/// set here.
pub async fn upload_dataset(
    session: &Session,
    file: &web_sys::File,
) -> Result<UploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Failed to attach file".to_string())?;

    let response = session
        .post("upload/")
        .body(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Download the generated PDF report as raw bytes.
pub async fn fetch_report_pdf(session: &Session) -> Result<Vec<u8>, String> {
    let response = session
        .get("report_pdf/")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Read error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_token_encodes_colon_joined_pair() {
        assert_eq!(basic_token("user", "pass"), "dXNlcjpwYXNz");
    }

    #[test]
    fn session_header_is_never_empty() {
        let session = Session::new("", "");
        assert!(session.auth_header.starts_with("Basic "));
        assert!(session.auth_header.len() > "Basic ".len());
    }

    #[test]
    fn session_normalizes_trailing_slash() {
        let session = Session::with_base_url("http://localhost:8000/api/", "u", "p");
        assert_eq!(session.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn summary_decodes_full_payload() {
        let summary: Summary = serde_json::from_str(
            r#"{
                "id": 3,
                "uploaded_at": "2025-11-02T09:15:00Z",
                "total_equipment": 7,
                "avg_flowrate": 12.345,
                "avg_pressure": 1.2,
                "avg_temperature": 99.0,
                "type_distribution": {"Pump": 3, "Valve": 4}
            }"#,
        )
        .unwrap();

        assert!(summary.is_chartable());
        assert_eq!(summary.total_equipment, Some(7));
        let dist = summary.type_distribution.unwrap();
        assert_eq!(dist.get("Pump"), Some(&3));
        assert_eq!(dist.get("Valve"), Some(&4));
    }

    #[test]
    fn summary_tolerates_no_data_body() {
        // The backend answers 200 with a message when nothing was uploaded.
        let summary: Summary = serde_json::from_str(r#"{"message": "No data available"}"#).unwrap();
        assert!(!summary.is_chartable());
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn history_preserves_server_order_and_ignores_extra_fields() {
        let entries: Vec<HistoryEntry> = serde_json::from_str(
            r#"[
                {"id": 9, "uploaded_at": "2025-11-02T09:15:00Z", "total_equipment": 12, "avg_flowrate": 5.0},
                {"id": 8, "uploaded_at": "2025-11-01T17:00:00Z", "total_equipment": 4}
            ]"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 9);
        assert_eq!(entries[1].id, 8);
    }

    #[test]
    fn upload_response_tolerates_empty_body() {
        let response: UploadResponse = serde_json::from_str("{}").unwrap();
        assert!(response.message.is_none());
        assert!(response.dataset_id.is_none());
    }
}
