//! REST gateway for the licensing backend.
//!
//! `ApiClient` centralizes endpoint URL construction and auth-header
//! attachment; the `invoices` and `catalog` submodules wrap each operation
//! in a background task that writes its outcome into shared state.

pub mod catalog;
pub mod invoices;

use crate::types::{CreateResponse, Invoice, Licensor, MusicDraft};
use reqwest::Method;

/// Failure modes of a create submission. Server-reported messages are shown
/// to the operator; transport failures are only logged.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateError {
    Server(String),
    Transport(String),
}

/// HTTP client with constructor-injected base URL and bearer token.
///
/// Cheap to clone; each background task takes its own copy so token changes
/// apply to the next action, never to one in flight.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Join the base URL and an endpoint path without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.endpoint(path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// `GET /invoice/{id}` — fetch a single invoice record.
    pub async fn invoice(&self, id: &str) -> Result<Invoice, String> {
        let response = self
            .request(Method::GET, &format!("/invoice/{id}"))
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;

        if !response.status().is_success() {
            return Err(format!("Server returned {}", response.status()));
        }

        response
            .json::<Invoice>()
            .await
            .map_err(|e| format!("Parse error: {e}"))
    }

    /// `POST /invoice/pdf` — request a server-generated PDF for an invoice
    /// number and return the binary payload.
    pub async fn invoice_pdf(&self, invoice_number: &str) -> Result<Vec<u8>, String> {
        let response = self
            .request(Method::POST, "/invoice/pdf")
            .json(&serde_json::json!({ "invoiceNumber": invoice_number }))
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;

        if !response.status().is_success() {
            return Err(format!("Server returned {}", response.status()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read PDF payload: {e}"))?;

        Ok(bytes.to_vec())
    }

    /// `GET /licensors` — reference list for the music form picker.
    pub async fn licensors(&self) -> Result<Vec<Licensor>, String> {
        let response = self
            .request(Method::GET, "/licensors")
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;

        if !response.status().is_success() {
            return Err(format!("Server returned {}", response.status()));
        }

        response
            .json::<Vec<Licensor>>()
            .await
            .map_err(|e| format!("Parse error: {e}"))
    }

    /// `POST /music` — submit the full draft. A non-success status whose
    /// body carries `{message}` is a server-reported validation failure;
    /// anything else is a transport failure.
    pub async fn create_music(&self, draft: &MusicDraft) -> Result<String, CreateError> {
        let response = self
            .request(Method::POST, "/music")
            .json(draft)
            .send()
            .await
            .map_err(|e| CreateError::Transport(format!("{e}")))?;

        let status = response.status();
        let message = response
            .json::<CreateResponse>()
            .await
            .ok()
            .and_then(|body| body.message);

        if status.is_success() {
            Ok(message.unwrap_or_else(|| "Created".to_string()))
        } else {
            match message {
                Some(msg) => Err(CreateError::Server(msg)),
                None => Err(CreateError::Transport(format!("Request failed: {status}"))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:5000/api", None);
        assert_eq!(
            client.endpoint("/invoice/662f1"),
            "http://localhost:5000/api/invoice/662f1"
        );
    }

    #[test]
    fn endpoint_strips_trailing_slash_from_base() {
        let client = ApiClient::new("http://localhost:5000/api/", None);
        assert_eq!(
            client.endpoint("/licensors"),
            "http://localhost:5000/api/licensors"
        );
    }

    #[test]
    fn endpoints_parse_as_urls() {
        let client = ApiClient::new("https://api.example.com", None);
        for path in ["/invoice/abc", "/invoice/pdf", "/licensors", "/music"] {
            assert!(url::Url::parse(&client.endpoint(path)).is_ok());
        }
    }
}
