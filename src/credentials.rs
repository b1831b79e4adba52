// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Service-principal authentication against Entra ID.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::debug;
use url::Url;

use crate::constants;
use crate::error::{Error, Result};

/// Default timeout for token requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// An OAuth2 access token and its expiry.
#[derive(Clone, Debug)]
pub struct AccessToken {
    pub token: String,
    pub expires_on: OffsetDateTime,
}

/// Produces access tokens for a set of scopes.
///
/// This trait is the seam between clients and the concrete credential, so
/// tests and other callers can substitute their own token source.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    async fn get_token(&self, scopes: &[&str]) -> Result<AccessToken>;
}

/// Authenticates a service principal with a client secret using the OAuth2
/// client-credentials grant.
pub struct ClientSecretCredential {
    http: reqwest::Client,
    authority: Url,
    tenant_id: String,
    client_id: String,
    client_secret: String,
}

impl ClientSecretCredential {
    /// Creates a credential for the Azure global cloud authority.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            authority: Url::parse(constants::AZURE_PUBLIC_CLOUD_AUTHORITY)
                .expect("well-known endpoint is a valid URL"),
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        })
    }

    /// Overrides the token authority.
    pub fn with_authority(mut self, authority: Url) -> Self {
        self.authority = authority;
        self
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[async_trait]
impl TokenCredential for ClientSecretCredential {
    async fn get_token(&self, scopes: &[&str]) -> Result<AccessToken> {
        let url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.authority.as_str().trim_end_matches('/'),
            self.tenant_id
        );
        let scope = scopes.join(" ");

        debug!(tenant_id = %self.tenant_id, scope = %scope, "requesting access token");

        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", scope.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let response = self.http.post(&url).form(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Auth(format!(
                "token request for tenant '{}' failed with {status}: {body}",
                self.tenant_id
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(AccessToken {
            token: token.access_token,
            expires_on: OffsetDateTime::now_utc() + time::Duration::seconds(token.expires_in),
        })
    }
}
