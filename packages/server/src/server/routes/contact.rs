use axum::{
    extract::{Extension, Form},
    http::{header::REFERER, HeaderMap},
    response::Redirect,
};
use serde::Deserialize;

use crate::common::AccessToken;
use crate::domains::contact::{send_message, ContactMessage};
use crate::server::app::AxumAppState;

#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Hidden field rendered into the portfolio page
    pub token: Option<String>,
}

/// `POST /send_message` - forward the message, then back to the portfolio
///
/// A body that is not a readable form is treated as an empty form.
pub async fn send_message_handler(
    Extension(state): Extension<AxumAppState>,
    headers: HeaderMap,
    form: Option<Form<ContactForm>>,
) -> Redirect {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let contact = ContactMessage {
        name: form.name.unwrap_or_default(),
        email: form.email.unwrap_or_default(),
        message: form.message.unwrap_or_default(),
    };
    send_message(&contact, &state.deps).await;

    let referer = headers.get(REFERER).and_then(|v| v.to_str().ok());
    match redirect_token(form.token.as_deref(), referer) {
        Some(token) => Redirect::to(&format!("/portfolio/{}?message_sent=true", token)),
        None => Redirect::to("/"),
    }
}

/// Pick the portfolio token to return to: the hidden form field first, then
/// the last path segment of the Referer. Only well-formed tokens are used.
pub fn redirect_token(form_token: Option<&str>, referer: Option<&str>) -> Option<AccessToken> {
    let from_form = form_token.and_then(|t| AccessToken::parse(t.trim()).ok());

    from_form.or_else(|| {
        let referer = referer?;
        let path = referer.split(['?', '#']).next()?;
        let segment = path.trim_end_matches('/').rsplit('/').next()?;
        AccessToken::parse(segment).ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_token_wins() {
        let form = AccessToken::generate();
        let referer = format!("http://gate.test/portfolio/{}", AccessToken::generate());
        assert_eq!(
            redirect_token(Some(&form.to_string()), Some(&referer)),
            Some(form)
        );
    }

    #[test]
    fn test_referer_fallback_ignores_query() {
        let token = AccessToken::generate();
        let referer = format!("http://gate.test/portfolio/{}?message_sent=true", token);
        assert_eq!(redirect_token(None, Some(&referer)), Some(token));
    }

    #[test]
    fn test_garbage_yields_none() {
        assert_eq!(redirect_token(Some("//evil.example"), None), None);
        assert_eq!(redirect_token(None, Some("http://gate.test/")), None);
        assert_eq!(redirect_token(None, None), None);
    }
}
