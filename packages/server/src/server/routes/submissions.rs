//! POST handlers for the three email-only submission forms.
//!
//! Shared shape: validate the wire payload (400 before any email),
//! relay exactly one notification, answer with a human-readable French
//! confirmation. Each handled request logs one audit line.

use axum::{extract::Extension, Json};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::domains::submissions::{
    HotelReservationRequest, PagneRequest, PresenceRequest, Submission,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;

pub async fn reserve_hotel(
    Extension(state): Extension<AppState>,
    Json(body): Json<HotelReservationRequest>,
) -> Result<Json<Value>, ApiError> {
    let reservation = body.validate()?;
    info!(nom = %reservation.nom, hotel = %reservation.hotel, "hotel reservation request");

    if let Err(e) = state
        .deps
        .relay
        .notify(&Submission::Hotel(reservation))
        .await
    {
        error!(error = %e, "hotel reservation email failed");
        return Err(ApiError::relay(
            "Erreur lors de l'envoi de la demande de réservation",
            e,
            state.deps.production,
        ));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Demande de réservation envoyée. Nous vous contacterons pour confirmation.",
    })))
}

pub async fn confirm_presence(
    Extension(state): Extension<AppState>,
    Json(body): Json<PresenceRequest>,
) -> Result<Json<Value>, ApiError> {
    let confirmation = body.validate()?;
    info!(
        nom = %confirmation.nom,
        evenements = confirmation.evenements.len(),
        "attendance confirmation"
    );

    if let Err(e) = state
        .deps
        .relay
        .notify(&Submission::Attendance(confirmation))
        .await
    {
        error!(error = %e, "attendance confirmation email failed");
        return Err(ApiError::relay(
            "Erreur lors de l'enregistrement de la confirmation",
            e,
            state.deps.production,
        ));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Confirmation de présence enregistrée avec succès",
    })))
}

pub async fn order_pagne(
    Extension(state): Extension<AppState>,
    Json(body): Json<PagneRequest>,
) -> Result<Json<Value>, ApiError> {
    let order = body.validate()?;
    info!(nom = %order.nom, quantite = order.quantite, "pagne order");

    let montant = order.montant();
    if let Err(e) = state
        .deps
        .relay
        .notify(&Submission::Merchandise(order.clone()))
        .await
    {
        error!(error = %e, "pagne order email failed");
        return Err(ApiError::relay(
            "Erreur lors de l'enregistrement de la commande",
            e,
            state.deps.production,
        ));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Commande de pagne enregistrée avec succès. Nous vous contacterons pour la livraison.",
        "details": {
            "quantite": order.quantite,
            "taille": order.taille,
            "montant": montant,
        },
    })))
}
