use axum::{
    extract::{Extension, Form, Path},
    response::Html,
};
use serde::Deserialize;
use tracing::info;

use crate::domains::access::{approve_request, request_access, AccessError};
use crate::server::app::AxumAppState;
use crate::server::error::AppError;
use crate::server::middleware::ClientIp;
use crate::server::pages::{render, INDEX_PAGE};

pub const REQUEST_SENT_MESSAGE: &str =
    "Your request has been sent! You will receive an email if it is approved.";
pub const APPROVED_MESSAGE: &str = "Access approved! The visitor has been notified.";

#[derive(Debug, Deserialize)]
pub struct RequestAccessForm {
    pub email: Option<String>,
}

/// `GET /` - the access request form
pub async fn index_handler() -> Result<Html<String>, AppError> {
    Ok(render(INDEX_PAGE, &[("message", "")])?)
}

/// `POST /request_access`
///
/// A body that is not a readable form counts as a missing email.
pub async fn request_access_handler(
    Extension(state): Extension<AxumAppState>,
    client_ip: Option<Extension<ClientIp>>,
    form: Option<Form<RequestAccessForm>>,
) -> Result<Html<String>, AppError> {
    let email = form.and_then(|Form(form)| form.email);
    let request = request_access(email.as_deref(), &state.deps).await?;

    if let Some(Extension(ClientIp(ip))) = client_ip {
        info!(request_id = %request.id, client_ip = %ip, "Access request received");
    }

    Ok(render(INDEX_PAGE, &[("message", REQUEST_SENT_MESSAGE)])?)
}

/// `GET /approve/:request_id` - the link in the owner's email
pub async fn approve_handler(
    Extension(state): Extension<AxumAppState>,
    request_id: Option<Path<String>>,
) -> Result<&'static str, AppError> {
    let Some(Path(request_id)) = request_id else {
        return Err(AccessError::NotFound.into());
    };
    approve_request(&request_id, &state.deps).await?;
    Ok(APPROVED_MESSAGE)
}
