use std::sync::Arc;

use axum::{
    Extension, Json,
    response::{IntoResponse, Response},
};

use crate::{server::AppState, success, types::Upstream, warning};

use super::ApiError;

pub const PING_FAILURE_BODY: &str = "oops";

pub async fn ping(Extension(state): Extension<Arc<AppState>>) -> Result<Response, ApiError> {
    match state.etsy.ping().await? {
        Upstream::Success(data) => {
            success!("Etsy ping succeeded");
            Ok(Json(data).into_response())
        }
        Upstream::Failure { status, body } => {
            warning!("Etsy ping failed with {}: {}", status, body);
            Ok((status, PING_FAILURE_BODY).into_response())
        }
    }
}
