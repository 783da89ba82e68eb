//! Document sources: the concrete fetch collaborators behind
//! [`DocumentSource`].

use std::time::Duration;

use tracing::debug;

use rectify_core::{CatalogConfig, DocumentSource, FetchError};

/// Fetches the rules-overview document over HTTP. Owns its timeout;
/// failures surface as [`FetchError`] and nothing else.
pub struct HttpDocumentSource {
    client: reqwest::blocking::Client,
    url: String,
    timeout_secs: u64,
}

impl HttpDocumentSource {
    pub fn from_config(config: &CatalogConfig) -> Result<HttpDocumentSource, FetchError> {
        let timeout_secs = config.effective_timeout_secs();
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(config.effective_user_agent())
            .build()
            .map_err(|e| FetchError::Http {
                message: e.to_string(),
            })?;
        Ok(HttpDocumentSource {
            client,
            url: config.effective_document_url().to_string(),
            timeout_secs,
        })
    }
}

impl DocumentSource for HttpDocumentSource {
    fn fetch_document(&self) -> Result<String, FetchError> {
        debug!(url = %self.url, "fetching rules overview");
        let response = self.client.get(&self.url).send().map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    seconds: self.timeout_secs,
                }
            } else {
                FetchError::Http {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| FetchError::InvalidBody {
            message: e.to_string(),
        })?;
        if body.trim().is_empty() {
            return Err(FetchError::InvalidBody {
                message: "empty document body".to_string(),
            });
        }
        Ok(body)
    }
}

/// Serves a fixed document string. Test and offline use.
pub struct StaticDocumentSource {
    document: String,
}

impl StaticDocumentSource {
    pub fn new(document: impl Into<String>) -> StaticDocumentSource {
        StaticDocumentSource {
            document: document.into(),
        }
    }
}

impl DocumentSource for StaticDocumentSource {
    fn fetch_document(&self) -> Result<String, FetchError> {
        Ok(self.document.clone())
    }
}
