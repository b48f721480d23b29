use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::{
    handlers::contact_dtos::ContactRequest,
    models::contact_models::NewContact,
    rate_limit::ClientIp,
    AppState,
};

type JsonError = (StatusCode, Json<serde_json::Value>);

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Extension(ClientIp(ip_address)): Extension<ClientIp>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, JsonError> {
    let contact = match payload.validate() {
        Ok(contact) => contact,
        Err(errors) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": "Validation failed",
                    "errors": errors,
                })),
            ));
        }
    };

    // Persistence is best-effort: a storage failure must not turn an
    // accepted submission into a client-visible error.
    match &state.contacts {
        Some(repository) => {
            let entry = NewContact {
                name: contact.name.clone(),
                email: contact.email.clone(),
                subject: contact.subject.clone(),
                message: contact.message.clone(),
                ip_address,
                created_at: chrono::Utc::now().timestamp() as i32,
            };
            match repository.insert(entry) {
                Ok(()) => tracing::info!("contact saved to database"),
                Err(e) => tracing::error!("failed to save contact: {e:#}"),
            }
        }
        None => {
            tracing::info!(
                name = %contact.name,
                email = %contact.email,
                subject = %contact.subject,
                "contact received (demo mode - not saved to database)"
            );
        }
    }

    // Email relay is best-effort too.
    if let Some(mailer) = &state.mailer {
        if let Err(e) = mailer.send_notification(&contact).await {
            tracing::error!("failed to send notification email: {e:#}");
        }
        if let Err(e) = mailer.send_auto_reply(&contact).await {
            tracing::error!("failed to send auto-reply email: {e:#}");
        }
    }

    Ok(Json(json!({
        "success": true,
        "message": "Message sent successfully!",
    })))
}

pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, JsonError> {
    let storage_error = || {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "message": "Error retrieving contacts",
            })),
        )
    };

    let repository = state.contacts.as_ref().ok_or_else(|| {
        tracing::error!("contact storage is not configured");
        storage_error()
    })?;

    match repository.latest(50) {
        Ok(entries) => Ok(Json(json!({
            "success": true,
            "count": entries.len(),
            "data": entries,
        }))),
        Err(e) => {
            tracing::error!("failed to load contacts: {e:#}");
            Err(storage_error())
        }
    }
}

pub async fn not_found() -> JsonError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
        })),
    )
}
