use axum::{
    extract::{Extension, Path, RawQuery},
    response::Html,
};

use crate::domains::access::{authorize_viewer, AccessError};
use crate::server::app::AxumAppState;
use crate::server::error::AppError;
use crate::server::pages::{render, PORTFOLIO_PAGE};

pub const MESSAGE_SENT_BANNER: &str = "Thanks! Your message has been sent.";

/// `GET /portfolio/:token` - 403 for anything but an approved token
///
/// The query string is only read after the token is accepted.
pub async fn portfolio_handler(
    Extension(state): Extension<AxumAppState>,
    token: Option<Path<String>>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>, AppError> {
    let Some(Path(token)) = token else {
        return Err(AccessError::Forbidden.into());
    };
    authorize_viewer(&token, &state.deps).await?;

    let message = if message_sent(query.as_deref()) {
        MESSAGE_SENT_BANNER
    } else {
        ""
    };

    Ok(render(
        PORTFOLIO_PAGE,
        &[
            ("your_name", state.deps.site.owner_name.as_str()),
            ("token", token.as_str()),
            ("message", message),
        ],
    )?)
}

/// True when any `message_sent` pair in the query is `true`.
fn message_sent(query: Option<&str>) -> bool {
    query.is_some_and(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .any(|(key, value)| key == "message_sent" && value == "true")
    })
}
