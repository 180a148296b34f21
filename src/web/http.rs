//! `gloo-net` backed [`JsonTransport`].

use serde_json::Value;

use crate::net::api::{ApiError, JsonTransport, check_status};

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl JsonTransport for GlooTransport {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        check_status(resp.status())?;
        resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}
