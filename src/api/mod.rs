//! # API Module
//!
//! HTTP handlers for the proxy's public routes. Every handler performs at
//! most one outbound call to the Etsy Open API and forwards the result.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, renders the `index` view
//! - [`ping`] - `GET /ping`, forwards Etsy's openapi-ping answer
//! - [`refresh_token`] - `GET /refresh_token`, exchanges the configured refresh token
//! - [`oauth_redirect`] - `GET /oauth/redirect`, exchanges the authorization code
//!   Etsy sends back after the user grants consent
//!
//! ## Responses
//!
//! Upstream 2xx bodies are forwarded verbatim as JSON. Upstream failures keep
//! the upstream status code: `/ping` answers the body `oops`, the token routes
//! forward Etsy's raw error body. Local failures go through [`ApiError`].
//!
//! ## State
//!
//! Handlers receive [`crate::server::AppState`] through an `Extension` layer.
//! It is immutable, so requests never contend on it.

mod index;
mod ping;
mod token;

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use handlebars::RenderError;

use crate::warning;

pub use index::index;
pub use ping::ping;
pub use token::{RedirectParams, oauth_redirect, refresh_token};

#[derive(Debug)]
pub enum ApiError {
    /// The outbound request failed before a usable response arrived.
    Upstream(reqwest::Error),
    Render(RenderError),
    MissingRefreshToken,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Upstream(e) => write!(f, "upstream request failed: {}", e),
            ApiError::Render(e) => write!(f, "cannot render view: {}", e),
            ApiError::MissingRefreshToken => write!(f, "no refresh token configured"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Upstream(err)
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        ApiError::Render(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Render(_) | ApiError::MissingRefreshToken => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warning!("{}", self);
        (self.status(), self.to_string()).into_response()
    }
}
