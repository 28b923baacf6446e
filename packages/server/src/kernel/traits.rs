// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. What goes
// into an email and when it is sent is decided by the notification
// relay; this seam only covers the external transport.

use anyhow::Result;
use async_trait::async_trait;

/// A fully rendered notification email, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// External mail-sending collaborator.
///
/// Implementations make exactly one delivery attempt per call; retry
/// policy (there is none) belongs to the caller.
#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Dispatch a single email.
    async fn send(&self, email: &OutgoingEmail) -> Result<()>;
}
