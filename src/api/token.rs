use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::Query,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    info,
    server::AppState,
    success,
    types::{TokenRequest, Upstream},
    utils, warning,
};

use super::ApiError;

/// Query parameters Etsy appends to the redirect URI.
///
/// On consent Etsy sends `code` and `state`; on refusal `error` and
/// `error_description`. Repeated keys are not rejected, the first value wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RedirectParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl RedirectParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = RedirectParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "code" => &mut params.code,
                "state" => &mut params.state,
                "error" => &mut params.error,
                "error_description" => &mut params.error_description,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Exchanges the configured refresh token for a fresh access token.
///
/// Etsy access tokens live for one hour; the refresh token for 90 days and
/// is rotated with each exchange.
pub async fn refresh_token(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let Some(refresh_token) = state.refresh_token.as_deref() else {
        return Err(ApiError::MissingRefreshToken);
    };

    let request = TokenRequest::refresh(&state.credentials, refresh_token);
    let outcome = state.etsy.request_token(&request).await?;

    Ok(forward_token(&request, outcome))
}

/// Exchanges the authorization code Etsy sends back after consent.
///
/// The configured verifier must be the one whose challenge was sent to the
/// consent page, otherwise Etsy answers `invalid_grant`.
pub async fn oauth_redirect(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let params = RedirectParams::from_pairs(pairs);

    if let Some(error) = &params.error {
        warning!(
            "Etsy redirect reported {}: {}",
            error,
            params.error_description.as_deref().unwrap_or("no description")
        );
    }

    match &params.code {
        Some(code) => info!(
            "Received authorization code {} (state: {})",
            utils::mask_secret(code),
            params.state.as_deref().unwrap_or("-")
        ),
        None => warning!("Redirect carried no authorization code"),
    }

    let request = TokenRequest::authorization_code(&state.credentials, params.code);
    let outcome = state.etsy.request_token(&request).await?;

    Ok(forward_token(&request, outcome))
}

fn forward_token(request: &TokenRequest, outcome: Upstream) -> Response {
    let grant_type = request.grant_type();
    match outcome {
        Upstream::Success(token) => {
            success!("Token issued for {} grant", grant_type);
            Json(token).into_response()
        }
        Upstream::Failure { status, body } => {
            warning!("Token exchange ({}) failed with {}: {}", grant_type, status, body);
            match serde_json::from_str::<Value>(&body) {
                Ok(json) => (status, Json(json)).into_response(),
                Err(_) => (status, body).into_response(),
            }
        }
    }
}
