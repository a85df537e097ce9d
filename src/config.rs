#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub service_role_key: String,
    pub resend_api_key: Option<String>, // Optional: absence disables email notifications
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            supabase_url: std::env::var("SUPABASE_URL")
                .map_err(|_| anyhow::anyhow!("SUPABASE_URL environment variable required"))
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("SUPABASE_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("SUPABASE_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            service_role_key: std::env::var("SUPABASE_SERVICE_ROLE_KEY")
                .map_err(|_| {
                    anyhow::anyhow!("SUPABASE_SERVICE_ROLE_KEY environment variable required")
                })
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("SUPABASE_SERVICE_ROLE_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            resend_api_key: std::env::var("RESEND_API_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::debug!(
            "Store URL: {}...",
            &config.supabase_url[..20.min(config.supabase_url.len())]
        );
        tracing::debug!("Server Port: {}", config.port);
        if config.resend_api_key.is_none() {
            tracing::warn!("RESEND_API_KEY not set - lead notification emails disabled");
        }

        Ok(config)
    }
}
