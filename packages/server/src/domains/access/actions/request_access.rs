//! Request access action

use tracing::info;

use crate::domains::access::emails::owner_request_email;
use crate::domains::access::errors::AccessError;
use crate::domains::access::models::AccessRequest;
use crate::kernel::ServerDeps;

/// Record a visitor's access request and notify the owner.
///
/// Blank or missing emails are rejected before anything is stored.
/// Owner notification is best-effort: a mail failure is logged, and the
/// request still succeeds.
pub async fn request_access(
    visitor_email: Option<&str>,
    deps: &ServerDeps,
) -> Result<AccessRequest, AccessError> {
    let visitor_email = visitor_email
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .ok_or(AccessError::MissingEmail)?;

    let request = deps.ledger.create_request(visitor_email).await?;
    info!(request_id = %request.id, visitor = %visitor_email, "Access requested");

    if deps.site.notify_owner_on_request {
        let approval_link = deps.site.approval_link(&request.id)?;
        let email = owner_request_email(
            &deps.site.owner_name,
            &deps.site.owner_email,
            visitor_email,
            &approval_link,
        );
        deps.deliver(email).await;
    } else {
        info!(request_id = %request.id, "Owner notification disabled, skipping email");
    }

    Ok(request)
}
