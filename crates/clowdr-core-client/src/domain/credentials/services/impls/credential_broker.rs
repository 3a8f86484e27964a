// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{error, info, warn};
use url::Url;

use clowdr_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynConfigurationService, DynTimeProvider, DynTokenCacheRepository,
    DynTokenService,
};
use crate::domain::credentials::models::{Credential, CredentialError, TokenRequest};
use crate::domain::shared::models::{ConferenceId, SessionContext};

use super::super::CredentialBroker as CredentialBrokerTrait;

#[derive(DependenciesStruct)]
pub struct CredentialBroker {
    configuration_service: DynConfigurationService,
    ctx: DynAppContext,
    time_provider: DynTimeProvider,
    token_cache_repo: DynTokenCacheRepository,
    token_service: DynTokenService,

    #[state]
    current: RwLock<Option<Credential>>,
    #[state]
    callback_urls: RwLock<HashMap<ConferenceId, Url>>,
}

#[async_trait]
impl CredentialBrokerTrait for CredentialBroker {
    #[tracing::instrument(skip(self, ctx), fields(conference = %ctx.conference_id))]
    async fn fetch_token(&self, ctx: &SessionContext) -> Result<Credential, CredentialError> {
        let now = self.time_provider.now();

        if let Some(credential) = self.current.read().as_ref() {
            if credential.is_valid_for(&ctx.conference_id, &ctx.profile_id, now) {
                return Ok(credential.clone());
            }
        }

        match self.token_cache_repo.get().await {
            Ok(Some(credential))
                if credential.is_valid_for(&ctx.conference_id, &ctx.profile_id, now) =>
            {
                info!("Cached realtime token is valid.");
                self.current.write().replace(credential.clone());
                return Ok(credential);
            }
            Ok(Some(_)) => {
                info!("Cached realtime token is invalid (expired, different conference or profile).");
                self.discard_token().await;
            }
            Ok(None) => (),
            Err(err) => warn!("Failed to read the token cache. {}", err.to_string()),
        }

        self.fetch_fresh_token(ctx).await
    }

    #[tracing::instrument(skip(self, ctx), fields(conference = %ctx.conference_id))]
    async fn fetch_fresh_token(
        &self,
        ctx: &SessionContext,
    ) -> Result<Credential, CredentialError> {
        let callback_url = self.callback_url(ctx).await?;

        info!(
            "Fetching fresh realtime token for profile {} in conference {}.",
            ctx.profile_id, ctx.conference_id
        );

        let request = TokenRequest {
            identity: ctx.session_identity.clone(),
            conference: ctx.conference_id.clone(),
        };

        let issued = match self.token_service.request_token(&callback_url, &request).await {
            Ok(issued) if !issued.token.is_empty() => issued,
            Ok(_) => {
                warn!("Realtime token not obtained.");
                self.discard_token().await;
                return Err(CredentialError::TokenUnavailable {
                    msg: "The token endpoint returned an empty token.".to_string(),
                });
            }
            Err(err) => {
                warn!("Realtime token not obtained. {}", err.to_string());
                self.discard_token().await;
                return Err(CredentialError::TokenUnavailable {
                    msg: err.to_string(),
                });
            }
        };

        let credential = Credential {
            token: issued.token,
            expires_at: issued.expiry,
            conference_id: ctx.conference_id.clone(),
            profile_id: ctx.profile_id.clone(),
        };

        self.current.write().replace(credential.clone());
        if let Err(err) = self.token_cache_repo.set(&credential).await {
            error!("Failed to cache realtime token. {}", err.to_string());
        }

        info!("Realtime token obtained.");
        Ok(credential)
    }

    async fn callback_url(&self, ctx: &SessionContext) -> Result<Url, CredentialError> {
        if let Some(url) = self.callback_urls.read().get(&ctx.conference_id) {
            return Ok(url.clone());
        }

        let key = &self.ctx.config.realtime_callback_url_key;
        let values = self
            .configuration_service
            .get_by_key(key, &ctx.conference_id)
            .await
            .map_err(|err| CredentialError::TokenUnavailable {
                msg: format!("Failed to load configuration '{}'. {}", key, err.to_string()),
            })?;

        let Some(value) = values.into_iter().map(|v| v.value).find(|v| !v.is_empty()) else {
            error!(
                "'{}' is not configured for conference {}.",
                key, ctx.conference_id
            );
            return Err(CredentialError::NotConfigured {
                conference: ctx.conference_id.clone(),
            });
        };

        let url = Url::parse(&value)
            .map_err(|_| CredentialError::InvalidCallbackUrl { url: value.clone() })?;

        self.callback_urls
            .write()
            .insert(ctx.conference_id.clone(), url.clone());
        Ok(url)
    }

    async fn invalidate(&self) {
        info!("Invalidating realtime token.");
        self.discard_token().await
    }

    async fn clear(&self) {
        self.discard_token().await;
        self.callback_urls.write().clear();
    }
}

impl CredentialBroker {
    async fn discard_token(&self) {
        self.current.write().take();
        if let Err(err) = self.token_cache_repo.clear().await {
            error!("Failed to clear the token cache. {}", err.to_string());
        }
    }
}
