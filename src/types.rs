use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// OAuth client settings shared by every token exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub code_verifier: String,
    pub redirect_uri: String,
}

/// Body of a `POST /public/oauth/token` request.
///
/// Each variant carries exactly the fields of one grant flow, so a refresh
/// request can never leak a `code` or `redirect_uri`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "grant_type", rename_all = "snake_case")]
pub enum TokenRequest {
    RefreshToken {
        client_id: String,
        refresh_token: String,
    },
    AuthorizationCode {
        client_id: String,
        redirect_uri: String,
        // Omitted when the redirect carried no code; Etsy rejects the request.
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        code_verifier: String,
    },
}

impl TokenRequest {
    pub fn refresh(credentials: &ClientCredentials, refresh_token: &str) -> Self {
        TokenRequest::RefreshToken {
            client_id: credentials.client_id.clone(),
            refresh_token: refresh_token.to_string(),
        }
    }

    pub fn authorization_code(credentials: &ClientCredentials, code: Option<String>) -> Self {
        TokenRequest::AuthorizationCode {
            client_id: credentials.client_id.clone(),
            redirect_uri: credentials.redirect_uri.clone(),
            code,
            code_verifier: credentials.code_verifier.clone(),
        }
    }

    pub fn grant_type(&self) -> &'static str {
        match self {
            TokenRequest::RefreshToken { .. } => "refresh_token",
            TokenRequest::AuthorizationCode { .. } => "authorization_code",
        }
    }
}

/// Outcome of a call that reached the upstream API.
///
/// Transport failures are not represented here; they surface as
/// `reqwest::Error` from the client.
#[derive(Debug, Clone, PartialEq)]
pub enum Upstream {
    /// 2xx response with its parsed JSON body.
    Success(Value),
    /// Any other status with the raw body as received.
    Failure { status: StatusCode, body: String },
}
