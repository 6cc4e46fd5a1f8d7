use crate::types::Upstream;

use super::{EtsyClient, read_upstream};

pub const PING_PATH: &str = "/application/openapi-ping";

impl EtsyClient {
    /// Checks the API key against `GET /application/openapi-ping`.
    ///
    /// The key travels in the `x-api-key` header. A 2xx answer yields the
    /// parsed body (`{"application_id": ...}`), anything else the raw status
    /// and body.
    pub async fn ping(&self) -> Result<Upstream, reqwest::Error> {
        let response = self
            .http
            .get(self.url(PING_PATH))
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        read_upstream(response).await
    }
}
