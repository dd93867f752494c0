use super::{ContactError, ContactForm, FormRelay, RelayResponse};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Relay backed by a Web3Forms-compatible JSON endpoint
pub struct Web3FormsRelay {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl Web3FormsRelay {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// JSON body for one submission
    pub fn payload(&self, form: &ContactForm) -> serde_json::Value {
        json!({
            "access_key": self.access_key,
            "name": form.name,
            "email": form.email,
            "subject": form.subject,
            "message": form.message,
            "from_name": form.name,
            "reply_to": form.email,
        })
    }
}

#[async_trait]
impl FormRelay for Web3FormsRelay {
    async fn submit(&self, form: &ContactForm) -> Result<RelayResponse, ContactError> {
        debug!("Posting contact form to {}", self.endpoint);
        let resp = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&self.payload(form))
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        // The body decides success, whatever the status code says
        let status = resp.status();
        let parsed: RelayResponse = resp
            .json()
            .await
            .map_err(|e| ContactError::Decode(format!("{} (HTTP {})", e, status)))?;
        Ok(parsed)
    }
}
