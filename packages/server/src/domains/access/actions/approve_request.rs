//! Approve request action

use tracing::{info, warn};

use crate::common::AccessRequestId;
use crate::domains::access::emails::visitor_approved_email;
use crate::domains::access::errors::AccessError;
use crate::domains::access::models::AccessGrant;
use crate::kernel::ServerDeps;

/// Approve a pending request and email the visitor their portfolio link.
///
/// Malformed, unknown and already-approved ids all map to
/// `AccessError::NotFound`; none of them touch the ledger.
pub async fn approve_request(raw_id: &str, deps: &ServerDeps) -> Result<AccessGrant, AccessError> {
    let id = AccessRequestId::parse(raw_id).map_err(|_| {
        warn!("Approval attempted with malformed request id");
        AccessError::NotFound
    })?;

    let grant = deps.ledger.approve(&id).await.map_err(|e| {
        warn!(request_id = %id, reason = %e, "Approval rejected");
        AccessError::from(e)
    })?;
    info!(request_id = %id, "Access approved");

    let portfolio_link = deps.site.portfolio_link(&grant.token)?;
    let email = visitor_approved_email(&deps.site.owner_name, &grant.visitor_email, &portfolio_link);
    deps.deliver(email).await;

    Ok(grant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{BaseAccessLedger, MockMailer, TestDependencies};

    #[tokio::test]
    async fn test_approve_emails_visitor() {
        let test_deps = TestDependencies::new().notify_owner_on_request(false);
        let deps = test_deps.server_deps();
        let request = deps.ledger.create_request("visitor@example.org").await.unwrap();

        let grant = approve_request(&request.id.to_string(), &deps)
            .await
            .unwrap();

        let sent = test_deps.mailer.sent_to("visitor@example.org");
        assert_eq!(sent.len(), 1);
        assert!(sent[0]
            .html
            .contains(&format!("http://gate.test/portfolio/{}", grant.token)));
    }

    #[tokio::test]
    async fn test_malformed_and_unknown_ids_are_not_found() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.server_deps();

        let result = approve_request("definitely-not-a-uuid", &deps).await;
        assert!(matches!(result, Err(AccessError::NotFound)));

        let result = approve_request(&AccessRequestId::generate().to_string(), &deps).await;
        assert!(matches!(result, Err(AccessError::NotFound)));

        assert!(test_deps.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_already_approved_is_not_found_and_sends_nothing() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.server_deps();
        let request = deps.ledger.create_request("visitor@example.org").await.unwrap();
        let raw_id = request.id.to_string();

        approve_request(&raw_id, &deps).await.unwrap();
        let second = approve_request(&raw_id, &deps).await;
        assert!(matches!(second, Err(AccessError::NotFound)));
        assert_eq!(test_deps.mailer.sent_to("visitor@example.org").len(), 1);
    }

    #[tokio::test]
    async fn test_mail_failure_still_approves() {
        let test_deps = TestDependencies::new().mock_mailer(MockMailer::failing());
        let deps = test_deps.server_deps();
        let request = deps.ledger.create_request("visitor@example.org").await.unwrap();

        let grant = approve_request(&request.id.to_string(), &deps)
            .await
            .unwrap();
        assert!(deps
            .ledger
            .is_valid_token(&grant.token.to_string())
            .await
            .unwrap());
    }
}
