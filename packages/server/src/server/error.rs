//! API error taxonomy mapped onto HTTP responses.
//!
//! Every failure the client can see becomes the uniform
//! `{success: false, message}` payload: 400 for validation, 500 for a
//! failed or timed-out relay, 404 for unmatched routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domains::notifications::RelayError;
use crate::domains::submissions::ValidationError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client's fault: missing or invalid required field. Detected
    /// before any email is attempted.
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// Mail dispatch failed or timed out. `message` is the generic
    /// user-facing text; `detail` only exists outside production.
    #[error("{message}")]
    Relay {
        message: String,
        detail: Option<String>,
    },
    #[error("Route non trouvée")]
    NotFound,
}

impl ApiError {
    /// Wrap a relay failure with the endpoint's user-facing message.
    pub fn relay(message: &str, err: RelayError, production: bool) -> Self {
        Self::Relay {
            message: message.to_string(),
            detail: (!production).then(|| err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string(), None),
            ApiError::Relay { message, detail } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, detail)
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                "Route non trouvée".to_string(),
                None,
            ),
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if let Some(detail) = detail {
            body["detail"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn relay_detail_is_hidden_in_production() {
        let err = ApiError::relay(
            "Erreur lors de l'envoi du message",
            RelayError::Dispatch(anyhow!("connection refused")),
            true,
        );
        match err {
            ApiError::Relay { detail, .. } => assert!(detail.is_none()),
            _ => panic!("expected relay error"),
        }

        let err = ApiError::relay(
            "Erreur lors de l'envoi du message",
            RelayError::Dispatch(anyhow!("connection refused")),
            false,
        );
        match err {
            ApiError::Relay { detail, .. } => {
                assert!(detail.unwrap().contains("connection refused"))
            }
            _ => panic!("expected relay error"),
        }
    }
}
