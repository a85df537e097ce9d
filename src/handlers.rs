use crate::email_client::EmailClient;
use crate::email_template;
use crate::errors::AppError;
use crate::models::{LeadRecord, LeadSubmission};
use crate::store_client::StoreClient;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the lead data store.
    pub store: StoreClient,
    /// Client for the email provider; `None` disables notifications.
    pub email: Option<EmailClient>,
}

const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/submit-lead", any(submit_lead))
        .with_state(state)
}

/// Health check endpoint.
///
/// Returns the service status, name, and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-leads-api",
            "version": "0.1.0"
        })),
    )
}

/// Lead submission endpoint.
///
/// `OPTIONS` requests short-circuit with a CORS preflight reply. Every other
/// method is processed identically: parse the JSON body, attempt the store
/// insert, attempt the notification email, report success. Store and email
/// failures are logged and swallowed so the submitting form never sees them;
/// only a body that fails to parse yields an error response.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    // Handle CORS preflight
    if method == Method::OPTIONS {
        return preflight_response();
    }

    match process_submission(&state, &body).await {
        Ok(()) => json_response(StatusCode::OK, json!({ "success": true })),
        Err(e) => {
            tracing::error!("Error: {}", e);
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": e.to_string() }),
            )
        }
    }
}

async fn process_submission(state: &AppState, body: &[u8]) -> Result<(), AppError> {
    let lead: LeadSubmission = serde_json::from_slice(body)?;
    tracing::info!(
        "Received lead: source={}, insurance_type={}",
        lead.source,
        lead.insurance_type
    );

    // Store lead in database (best-effort: failure never blocks the response)
    let record = LeadRecord::from(&lead);
    if let Err(e) = state.store.insert_lead(&record).await {
        tracing::error!("Database error: {}", e);
    }

    // Send email notification (best-effort, only when configured)
    if let Some(email) = &state.email {
        let subject = email_template::subject(&lead);
        let html = email_template::render_html(&lead);
        if let Err(e) = email
            .send(
                email_template::NOTIFY_FROM,
                email_template::NOTIFY_TO,
                &subject,
                &html,
            )
            .await
        {
            tracing::error!("Email send error: {}", e);
        }
    }

    Ok(())
}

fn preflight_response() -> Response {
    let mut response = (StatusCode::OK, "ok").into_response();
    apply_cors(response.headers_mut());
    response
}

fn json_response(status: StatusCode, body: serde_json::Value) -> Response {
    let mut response = (status, Json(body)).into_response();
    apply_cors(response.headers_mut());
    response
}

fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
}
