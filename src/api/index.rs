use std::sync::Arc;

use axum::{Extension, response::Html};

use crate::server::AppState;

use super::ApiError;

pub async fn index(Extension(state): Extension<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.views.render("index")?))
}
