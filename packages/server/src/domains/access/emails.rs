//! Email bodies for the approval workflow.
//!
//! Every user-supplied value is escaped before interpolation.

use url::Url;

use crate::common::html::escape;
use crate::kernel::OutboundEmail;

pub const OWNER_REQUEST_SUBJECT: &str = "New Portfolio Access Request";
pub const VISITOR_APPROVED_SUBJECT: &str = "Your Portfolio Access is Approved!";

/// Sent to the owner when a visitor asks for access.
pub fn owner_request_email(
    owner_name: &str,
    owner_email: &str,
    visitor_email: &str,
    approval_link: &Url,
) -> OutboundEmail {
    let html = format!(
        r#"
    <h3>Hi {owner},</h3>
    <p>You have a new request to access your portfolio from: <strong>{visitor}</strong></p>
    <p>To approve this request, click the link below:</p>
    <a href="{link}" style="padding: 10px 20px; background-color: #007bff; color: white; text-decoration: none; border-radius: 5px;">Approve Access</a>
    <p>This link is unique to this request.</p>
    "#,
        owner = escape(owner_name),
        visitor = escape(visitor_email),
        link = escape(approval_link.as_str()),
    );

    OutboundEmail {
        to: owner_email.to_string(),
        subject: OWNER_REQUEST_SUBJECT.to_string(),
        html,
    }
}

/// Sent to the visitor once the owner approves.
pub fn visitor_approved_email(
    owner_name: &str,
    visitor_email: &str,
    portfolio_link: &Url,
) -> OutboundEmail {
    let html = format!(
        r#"
    <h3>Hi there,</h3>
    <p>Your request to view {owner}'s portfolio has been approved!</p>
    <p>Click the unique link below to access it:</p>
    <a href="{link}" style="padding: 10px 20px; background-color: #28a745; color: white; text-decoration: none; border-radius: 5px;">View Portfolio</a>
    <p>This link is for you only. Please do not share it.</p>
    "#,
        owner = escape(owner_name),
        link = escape(portfolio_link.as_str()),
    );

    OutboundEmail {
        to: visitor_email.to_string(),
        subject: VISITOR_APPROVED_SUBJECT.to_string(),
        html,
    }
}
