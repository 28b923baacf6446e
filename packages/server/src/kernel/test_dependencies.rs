// Mock mail collaborators for tests.
//
// Injected in place of the real transport so tests can count and
// inspect dispatches, or force the two failure modes of the relay:
// provider rejection and a send that never completes within the bound.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseMailer, OutgoingEmail};

// =============================================================================
// Mock Mailer (records every dispatch, always succeeds)
// =============================================================================

pub struct MockMailer {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All emails dispatched so far, in order.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Check whether any dispatched email body contains the fragment.
    pub fn was_sent_containing(&self, fragment: &str) -> bool {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .any(|e| e.html.contains(fragment))
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

// =============================================================================
// Failing Mailer (provider rejects every send)
// =============================================================================

pub struct FailingMailer;

#[async_trait]
impl BaseMailer for FailingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<()> {
        anyhow::bail!("Mail API error 500: simulated outage")
    }
}

// =============================================================================
// Stalling Mailer (send never resolves within any reasonable bound)
// =============================================================================

pub struct StallingMailer {
    delay: Duration,
}

impl StallingMailer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl BaseMailer for StallingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
