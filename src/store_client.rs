use crate::errors::AppError;
use crate::models::LeadRecord;
use std::time::Duration;

/// Client for the lead data store's REST interface.
///
/// Writes go through the store's PostgREST endpoint authenticated with the
/// service-role credential (sent both as `apikey` and bearer token, which is
/// what the store expects for server-side clients).
#[derive(Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl StoreClient {
    /// Creates a new `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the data store project.
    /// * `service_key` - The service-role credential for authentication.
    pub fn new(base_url: String, service_key: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create store client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        })
    }

    /// Inserts one row into the `leads` collection.
    ///
    /// # Arguments
    ///
    /// * `record` - The mapped lead record to persist.
    ///
    /// # Returns
    ///
    /// * `Result<(), AppError>` - Ok on a successful insert, or an error.
    pub async fn insert_lead(&self, record: &LeadRecord) -> Result<(), AppError> {
        let url = format!("{}/rest/v1/leads", self.base_url);
        tracing::debug!("Inserting lead into store: {}", url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Store request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Store insert returned {}: {}",
                status, error_text
            )));
        }

        tracing::debug!("Lead stored: {} {}", record.first_name, record.last_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = StoreClient::new(
            "https://example.supabase.co".to_string(),
            "service-key".to_string(),
        );
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_trailing_slash_stripped() {
        let client = StoreClient::new(
            "https://example.supabase.co/".to_string(),
            "service-key".to_string(),
        )
        .unwrap();
        assert_eq!(client.base_url, "https://example.supabase.co");
    }
}
