// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{
    BaseAccessLedger, BaseMailer, InMemoryAccessLedger, OutboundEmail, ServerDeps, SiteProfile,
};

// =============================================================================
// Mock Mailer
// =============================================================================

/// Records every email instead of sending it. Can be switched into a failing
/// mode to exercise the log-and-swallow path.
#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails.
    pub fn failing() -> Self {
        let mailer = Self::new();
        mailer.set_failing(true);
        mailer
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    /// All emails that were attempted (including failed ones).
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// Emails addressed to `to`.
    pub fn sent_to(&self, to: &str) -> Vec<OutboundEmail> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.to == to)
            .cloned()
            .collect()
    }

    pub fn last(&self) -> Option<OutboundEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        self.sent.lock().unwrap().push(OutboundEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });

        if *self.fail.lock().unwrap() {
            anyhow::bail!("Mock SMTP failure");
        }
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub const TEST_OWNER_NAME: &str = "Test Owner";
pub const TEST_OWNER_EMAIL: &str = "owner@example.com";
pub const TEST_BASE_URL: &str = "http://gate.test/";

pub struct TestDependencies {
    pub ledger: InMemoryAccessLedger,
    pub mailer: MockMailer,
    pub notify_owner_on_request: bool,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            ledger: InMemoryAccessLedger::new(),
            mailer: MockMailer::new(),
            notify_owner_on_request: true,
        }
    }

    pub fn mock_mailer(mut self, mailer: MockMailer) -> Self {
        self.mailer = mailer;
        self
    }

    pub fn notify_owner_on_request(mut self, enabled: bool) -> Self {
        self.notify_owner_on_request = enabled;
        self
    }

    pub fn site(&self) -> SiteProfile {
        SiteProfile::new(
            TEST_OWNER_NAME.to_string(),
            TEST_OWNER_EMAIL.to_string(),
            TEST_BASE_URL,
            self.notify_owner_on_request,
        )
        .expect("test base URL is valid")
    }

    /// Build ServerDeps that share this struct's ledger and mailer handles.
    pub fn server_deps(&self) -> ServerDeps {
        let ledger: Arc<dyn BaseAccessLedger> = Arc::new(self.ledger.clone());
        let mailer: Arc<dyn BaseMailer> = Arc::new(self.mailer.clone());
        ServerDeps::new(ledger, mailer, self.site())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
