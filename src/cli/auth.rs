use crate::{
    config::{self, Overrides},
    error,
    etsy::oauth::authorization_url,
    info, success, utils, warning,
};

/// Prints the consent URL that starts the authorization-code flow.
///
/// The challenge is derived from the configured `ETSY_CODE_VERIFIER`, so the
/// code Etsy later sends to `/oauth/redirect` can be exchanged by the server.
pub async fn auth_url(scope: Option<String>, open: bool) {
    let config = match config::load(&Overrides::default()).await {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let code_challenge = utils::generate_code_challenge(&config.credentials.code_verifier);
    let state = utils::generate_state();
    let scope = scope.unwrap_or(config.scope);

    let url = match authorization_url(
        &config.connect_url,
        &config.credentials,
        &scope,
        &state,
        &code_challenge,
    ) {
        Ok(url) => url,
        Err(e) => error!("Cannot build authorization URL: {}", e),
    };

    info!("Redirect URI: {}", config.credentials.redirect_uri);
    info!("State: {}", state);
    println!("{}", url);

    if open && webbrowser::open(url.as_str()).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.")
    }
}

pub fn verifier() {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    success!("Generated PKCE pair. Store the verifier in your .env file.");
    println!("ETSY_CODE_VERIFIER={}", code_verifier);
    println!("code_challenge={}", code_challenge);
}
