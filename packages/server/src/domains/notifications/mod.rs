//! Notification relay: turns a validated submission into exactly one
//! outbound email through the external mail collaborator.
//!
//! A single dispatch attempt per submission, bounded by a timeout and
//! never retried. There is no idempotency key; a client retry after a
//! timeout can produce a duplicate email.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;

use crate::domains::submissions::{render_submission, Submission};
use crate::kernel::{BaseMailer, OutgoingEmail};

/// Upper bound on a single mail dispatch.
pub const MAIL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("mail dispatch failed: {0}")]
    Dispatch(#[from] anyhow::Error),
    #[error("mail dispatch timed out after {0:?}")]
    Timeout(Duration),
}

pub struct NotificationRelay {
    mailer: Arc<dyn BaseMailer>,
    /// Fixed recipient of every notification.
    recipient: String,
    bound: Duration,
}

impl NotificationRelay {
    pub fn new(mailer: Arc<dyn BaseMailer>, recipient: impl Into<String>) -> Self {
        Self {
            mailer,
            recipient: recipient.into(),
            bound: MAIL_TIMEOUT,
        }
    }

    /// Override the dispatch bound (tests use a short one).
    pub fn with_bound(mut self, bound: Duration) -> Self {
        self.bound = bound;
        self
    }

    /// Render and dispatch the notification for one submission.
    ///
    /// On `Err` the caller must not assume the email was delivered; a
    /// timed-out send may still complete on the provider side.
    pub async fn notify(&self, submission: &Submission) -> Result<(), RelayError> {
        let rendered = render_submission(submission);
        let email = OutgoingEmail {
            to: self.recipient.clone(),
            subject: rendered.subject,
            html: rendered.html,
        };

        match timeout(self.bound, self.mailer.send(&email)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(RelayError::Dispatch(e)),
            Err(_) => Err(RelayError::Timeout(self.bound)),
        }
    }
}
