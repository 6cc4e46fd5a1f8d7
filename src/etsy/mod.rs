//! # Etsy Integration Module
//!
//! Outbound client for the Etsy Open API v3. Every call goes to a single
//! configurable base URL (`https://api.etsy.com/v3` in production) and is
//! turned into an [`Upstream`] value: a parsed JSON body for 2xx responses,
//! the raw status and body for everything else.
//!
//! ## Endpoints
//!
//! - `GET /application/openapi-ping` - API key check, see [`ping`]
//! - `POST /public/oauth/token` - refresh and authorization-code grants, see [`oauth`]
//!
//! ## Error Types
//!
//! Methods return `Result<Upstream, reqwest::Error>`. An `Err` means the
//! request never produced a usable response (DNS, connection refused, a 2xx
//! body that is not JSON). Non-2xx statuses are `Ok(Upstream::Failure)`.
//!
//! ## Connection Reuse
//!
//! [`EtsyClient`] wraps one `reqwest::Client`; clones share its connection
//! pool. No timeouts are configured.

pub mod oauth;
pub mod ping;

use reqwest::{Client, Response};

use crate::types::Upstream;

#[derive(Debug, Clone)]
pub struct EtsyClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl EtsyClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        EtsyClient {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn read_upstream(response: Response) -> Result<Upstream, reqwest::Error> {
    let status = response.status();
    if status.is_success() {
        Ok(Upstream::Success(response.json().await?))
    } else {
        Ok(Upstream::Failure {
            status,
            body: response.text().await?,
        })
    }
}
