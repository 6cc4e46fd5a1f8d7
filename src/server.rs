use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::{
    Res, api,
    config::Config,
    etsy::EtsyClient,
    info, success,
    types::ClientCredentials,
    views::Views,
    warning,
};

/// Everything the handlers share. Built once at startup, never mutated.
#[derive(Debug)]
pub struct AppState {
    pub etsy: EtsyClient,
    pub credentials: ClientCredentials,
    pub refresh_token: Option<String>,
    pub views: Views,
}

impl AppState {
    /// Builds the state from a resolved configuration.
    ///
    /// An unreadable views directory is not fatal: the server starts with no
    /// templates and `/` answers 500.
    pub fn from_config(config: &Config) -> Self {
        let views = match Views::load(&config.views_dir) {
            Ok(views) => views,
            Err(e) => {
                warning!(
                    "Cannot load views from {}: {}",
                    config.views_dir.display(),
                    e
                );
                Views::empty()
            }
        };

        if !views.has("index") {
            warning!("No index view registered, / will answer 500");
        }

        if config.refresh_token.is_none() {
            warning!("No refresh token configured, /refresh_token will fail");
        }

        AppState {
            etsy: EtsyClient::new(config.api_url.clone(), config.api_key.clone()),
            credentials: config.credentials.clone(),
            refresh_token: config.refresh_token.clone(),
            views,
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/ping", get(api::ping))
        .route("/refresh_token", get(api::refresh_token))
        .route("/oauth/redirect", get(api::oauth_redirect))
        .layer(Extension(state))
}

pub async fn start_api_server(config: Config) -> Res<()> {
    let state = Arc::new(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    success!("Listening at http://{}", config.server_addr);
    info!("Proxying {}", state.etsy.base_url());

    axum::serve(listener, app(state)).await?;
    Ok(())
}
