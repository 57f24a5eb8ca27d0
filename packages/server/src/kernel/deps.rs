//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container used by every route.
//! All external services use trait abstractions to enable testing.

use anyhow::{Context, Result};
use async_trait::async_trait;
use mailer::MailerService;
use std::sync::Arc;
use tracing::{error, info};
use url::Url;

use crate::common::{AccessRequestId, AccessToken};
use crate::kernel::{BaseAccessLedger, BaseMailer, OutboundEmail};

// =============================================================================
// MailerService Adapter (implements BaseMailer trait)
// =============================================================================

/// Wrapper around MailerService that implements BaseMailer trait
pub struct MailerAdapter(pub Arc<MailerService>);

impl MailerAdapter {
    pub fn new(service: Arc<MailerService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseMailer for MailerAdapter {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<()> {
        self.0
            .send_html(to, subject, html)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// SiteProfile
// =============================================================================

/// Owner identity and public URL used when rendering pages and links.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub owner_name: String,
    pub owner_email: String,
    /// Always ends with `/` so relative joins append instead of replacing.
    pub public_base_url: Url,
    pub notify_owner_on_request: bool,
}

impl SiteProfile {
    pub fn new(
        owner_name: String,
        owner_email: String,
        public_base_url: &str,
        notify_owner_on_request: bool,
    ) -> Result<Self> {
        let mut base = public_base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let public_base_url =
            Url::parse(&base).with_context(|| format!("Invalid public base URL: {}", base))?;

        Ok(Self {
            owner_name,
            owner_email,
            public_base_url,
            notify_owner_on_request,
        })
    }

    /// Link the owner clicks to approve a request.
    pub fn approval_link(&self, id: &AccessRequestId) -> Result<Url> {
        self.public_base_url
            .join(&format!("approve/{}", id))
            .context("Failed to build approval link")
    }

    /// Link the visitor uses to view the portfolio.
    pub fn portfolio_link(&self, token: &AccessToken) -> Result<Url> {
        self.public_base_url
            .join(&format!("portfolio/{}", token))
            .context("Failed to build portfolio link")
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to routes (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub ledger: Arc<dyn BaseAccessLedger>,
    pub mailer: Arc<dyn BaseMailer>,
    pub site: SiteProfile,
}

impl ServerDeps {
    pub fn new(
        ledger: Arc<dyn BaseAccessLedger>,
        mailer: Arc<dyn BaseMailer>,
        site: SiteProfile,
    ) -> Self {
        Self {
            ledger,
            mailer,
            site,
        }
    }

    /// Send an email, logging and swallowing any failure.
    ///
    /// Returns whether the message was handed to the mail server.
    pub async fn deliver(&self, email: OutboundEmail) -> bool {
        match self
            .mailer
            .send_html(&email.to, &email.subject, &email.html)
            .await
        {
            Ok(()) => {
                info!(to = %email.to, subject = %email.subject, "Email sent");
                true
            }
            Err(e) => {
                error!(to = %email.to, subject = %email.subject, error = %e, "Error sending email");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_append_to_base_path() {
        let site = SiteProfile::new(
            "Jane".to_string(),
            "owner@example.com".to_string(),
            "https://example.com/gate",
            true,
        )
        .unwrap();

        let id = AccessRequestId::generate();
        let link = site.approval_link(&id).unwrap();
        assert_eq!(link.as_str(), format!("https://example.com/gate/approve/{}", id));

        let token = AccessToken::generate();
        let link = site.portfolio_link(&token).unwrap();
        assert_eq!(
            link.as_str(),
            format!("https://example.com/gate/portfolio/{}", token)
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = SiteProfile::new(
            "Jane".to_string(),
            "owner@example.com".to_string(),
            "not a url",
            true,
        );
        assert!(result.is_err());
    }
}
