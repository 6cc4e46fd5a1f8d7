use reqwest::Url;

use crate::{
    Res,
    types::{ClientCredentials, TokenRequest, Upstream},
};

use super::{EtsyClient, read_upstream};

pub const TOKEN_PATH: &str = "/public/oauth/token";

impl EtsyClient {
    /// Posts a token request to `/public/oauth/token` as JSON.
    ///
    /// A 2xx answer carries the token payload (`access_token`,
    /// `refresh_token`, `expires_in`, `token_type`), returned unchanged.
    pub async fn request_token(&self, body: &TokenRequest) -> Result<Upstream, reqwest::Error> {
        let response = self
            .http
            .post(self.url(TOKEN_PATH))
            .json(body)
            .send()
            .await?;

        read_upstream(response).await
    }
}

/// Builds the consent page URL that starts the authorization-code flow.
///
/// `scope` is space separated, e.g. `"listings_r transactions_r"`.
pub fn authorization_url(
    connect_url: &str,
    credentials: &ClientCredentials,
    scope: &str,
    state: &str,
    code_challenge: &str,
) -> Res<Url> {
    let mut url = Url::parse(connect_url)?;
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &credentials.client_id)
        .append_pair("redirect_uri", &credentials.redirect_uri)
        .append_pair("scope", scope)
        .append_pair("state", state)
        .append_pair("code_challenge", code_challenge)
        .append_pair("code_challenge_method", "S256");
    Ok(url)
}
