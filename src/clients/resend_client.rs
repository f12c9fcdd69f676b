//! Resend API client module
//!
//! Encapsulates the outbound call to the transactional email provider. One
//! request per email, no retries: a failed send is terminal for the request
//! that triggered it.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::core::models::OutboundEmail;
use crate::errors::WaiverError;

const RESEND_SEND_URL: &str = "https://api.resend.com/emails";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Seam for dispatching a rendered email. The handler depends on this trait
/// so tests can substitute a sender that fails without touching the network.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<Value, WaiverError>;
}

/// Email dispatcher backed by the Resend send endpoint.
pub struct ResendClient {
    api_key: String,
}

impl ResendClient {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: &OutboundEmail) -> Result<Value, WaiverError> {
        debug!(subject = %email.subject, "Sending email via Resend");

        let response = HTTP_CLIENT
            .post(RESEND_SEND_URL)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|e| format!("failed to read error response: {e}"));
            return Err(WaiverError::EmailApi(detail));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| WaiverError::EmailApi(format!("invalid JSON response: {e}")))?;
        Ok(body)
    }
}
