use crate::errors::AppError;
use serde_json::json;
use std::time::Duration;

/// Production endpoint of the transactional-email provider (Resend).
pub const RESEND_API_BASE_URL: &str = "https://api.resend.com";

/// Client for the transactional-email provider's send endpoint.
#[derive(Clone)]
pub struct EmailClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl EmailClient {
    /// Creates a new `EmailClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the email provider API.
    /// * `api_key` - The API key for bearer authentication.
    pub fn new(base_url: String, api_key: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create email client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Sends one HTML email through the provider.
    ///
    /// # Arguments
    ///
    /// * `from` - Sender address, display-name form allowed.
    /// * `to` - Single recipient address.
    /// * `subject` - Subject line.
    /// * `html` - Rendered HTML body.
    ///
    /// # Returns
    ///
    /// * `Result<(), AppError>` - Ok if the provider accepted the email.
    pub async fn send(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), AppError> {
        let url = format!("{}/emails", self.base_url);
        tracing::debug!("Sending notification email: {}", subject);

        let body = json!({
            "from": from,
            "to": [to],
            "subject": subject,
            "html": html,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Email request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Email provider returned {}: {}",
                status, error_text
            )));
        }

        Ok(())
    }
}
