use super::{ContactError, ContactForm, FormRelay, RelayResponse};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// Relay that never leaves the process; records what it was given
pub struct MockRelay {
    outcome: Result<RelayResponse, ContactError>,
    delay: Duration,
    received: Mutex<Vec<ContactForm>>,
}

impl MockRelay {
    pub fn succeeding() -> Self {
        Self::with_outcome(Ok(RelayResponse {
            success: true,
            message: Some("Email sent".to_string()),
        }))
    }

    /// Used when no relay is configured: every submission fails
    pub fn unconfigured() -> Self {
        Self::with_outcome(Err(ContactError::Configuration(
            "no relay access key configured".to_string(),
        )))
    }

    pub fn with_outcome(outcome: Result<RelayResponse, ContactError>) -> Self {
        Self {
            outcome,
            delay: Duration::from_millis(0),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn received(&self) -> Vec<ContactForm> {
        self.received
            .lock()
            .map(|forms| forms.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl FormRelay for MockRelay {
    async fn submit(&self, form: &ContactForm) -> Result<RelayResponse, ContactError> {
        if let Ok(mut forms) = self.received.lock() {
            forms.push(form.clone());
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.clone()
    }
}
