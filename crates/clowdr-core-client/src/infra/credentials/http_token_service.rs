// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::domain::credentials::models::{IssuedToken, TokenRequest};
use crate::domain::credentials::services::TokenService;

/// Requests realtime tokens from the conference's chat backend via
/// `POST {callback_url}/chat/token`.
pub struct HttpTokenService {
    http_client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorResponse {
    status: Option<String>,
}

impl HttpTokenService {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }

    fn endpoint(callback_url: &Url) -> String {
        format!("{}/chat/token", callback_url.as_str().trim_end_matches('/'))
    }
}

impl Default for HttpTokenService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenService for HttpTokenService {
    async fn request_token(
        &self,
        callback_url: &Url,
        request: &TokenRequest,
    ) -> Result<IssuedToken> {
        let endpoint = Self::endpoint(callback_url);
        info!("Requesting realtime token from {}.", endpoint);

        let response = self
            .http_client
            .post(&endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.status)
                .unwrap_or_else(|| status.to_string());
            bail!(message)
        }

        Ok(response.json::<IssuedToken>().await?)
    }
}
