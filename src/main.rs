use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rust_leads_api::config::Config;
use rust_leads_api::email_client::{EmailClient, RESEND_API_BASE_URL};
use rust_leads_api::handlers::{self, AppState};
use rust_leads_api::store_client::StoreClient;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, constructs the store and email
/// clients, and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_leads_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Initialize data store client (required - missing credentials are fatal)
    let store = StoreClient::new(
        config.supabase_url.clone(),
        config.service_role_key.clone(),
    )?;
    tracing::info!("Store client initialized: {}", config.supabase_url);

    // Initialize email client (optional - absence disables notifications)
    let email = match &config.resend_api_key {
        Some(key) => {
            let client = EmailClient::new(RESEND_API_BASE_URL.to_string(), key.clone())?;
            tracing::info!("✓ Email client initialized");
            Some(client)
        }
        None => None,
    };

    // Build application state
    let state = std::sync::Arc::new(AppState { store, email });

    let app = handlers::router(state)
        // Request size limit: 1MB max payload (prevents memory exhaustion)
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
