//! Condolence feed: publish a message and list recent ones.

use axum::{extract::Extension, Json};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::domains::condolences::CondolenceEntry;
use crate::domains::submissions::{CondoleanceRequest, Submission};
use crate::server::app::AppState;
use crate::server::error::ApiError;

pub async fn submit_condolence(
    Extension(state): Extension<AppState>,
    Json(body): Json<CondoleanceRequest>,
) -> Result<Json<Value>, ApiError> {
    let condolence = body.validate()?;
    info!(nom = %condolence.nom, "new condolence message");

    if let Err(e) = state
        .deps
        .relay
        .notify(&Submission::Condolence(condolence.clone()))
        .await
    {
        error!(error = %e, "condolence email failed");
        return Err(ApiError::relay(
            "Erreur lors de l'envoi du message",
            e,
            state.deps.production,
        ));
    }

    // Appended only after the notification went out; a failed relay
    // leaves the feed unchanged.
    let entry = state.deps.condolences.append(
        condolence.nom,
        condolence.relation,
        condolence.message,
    );

    Ok(Json(json!({
        "success": true,
        "message": "Message de condoléances publié avec succès",
        "condoleance": entry,
    })))
}

pub async fn list_condolences(
    Extension(state): Extension<AppState>,
) -> Json<Vec<CondolenceEntry>> {
    Json(state.deps.condolences.list())
}
