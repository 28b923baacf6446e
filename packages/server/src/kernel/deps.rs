//! Server dependencies for request handlers (using traits for testability)
//!
//! This module provides the central dependency container injected into
//! every route handler. The mail transport hides behind `BaseMailer`
//! so tests can observe or fail dispatches without a network.

use std::sync::Arc;

use crate::domains::condolences::CondolenceStore;
use crate::domains::notifications::NotificationRelay;

/// Server dependencies accessible to route handlers
#[derive(Clone)]
pub struct ServerDeps {
    /// Renders and dispatches one notification email per submission.
    pub relay: Arc<NotificationRelay>,
    /// Volatile condolence feed, owned here and passed explicitly.
    pub condolences: CondolenceStore,
    /// When set, 500 responses carry no diagnostic detail.
    pub production: bool,
}

impl ServerDeps {
    pub fn new(relay: NotificationRelay, production: bool) -> Self {
        Self {
            relay: Arc::new(relay),
            condolences: CondolenceStore::new(),
            production,
        }
    }
}
