// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use super::models::{DatabaseAccount, DatabaseAccountKeys, DatabaseAccountListResult};
use crate::constants;
use crate::credentials::TokenCredential;
use crate::error::{Error, Result};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Azure API version for Cosmos DB management operations.
const COSMOS_DB_API_VERSION: &str = "2023-04-15";

/// Resource provider namespace for Cosmos DB.
const RESOURCE_PROVIDER: &str = "Microsoft.DocumentDB";

/// Azure Resource Manager client scoped to a single subscription.
#[derive(Clone)]
pub struct ArmClient {
    /// HTTP client.
    http: reqwest::Client,
    /// Credential used to obtain bearer tokens.
    credential: Arc<dyn TokenCredential>,
    /// Resource Manager endpoint, without a trailing slash.
    endpoint: String,
    /// Subscription ID.
    subscription_id: String,
}

impl ArmClient {
    /// Creates a client for the Azure global cloud.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        credential: Arc<dyn TokenCredential>,
        subscription_id: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            credential,
            endpoint: constants::AZURE_PUBLIC_CLOUD_MANAGEMENT_ENDPOINT.to_string(),
            subscription_id: subscription_id.into(),
        })
    }

    /// Overrides the Resource Manager endpoint.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint.as_str().trim_end_matches('/').to_string();
        self
    }

    /// Lists every Cosmos DB account visible under the subscription.
    pub async fn list_database_accounts(&self) -> Result<Vec<DatabaseAccount>> {
        let url = format!(
            "{}/subscriptions/{}/providers/{}/databaseAccounts?api-version={}",
            self.endpoint, self.subscription_id, RESOURCE_PROVIDER, COSMOS_DB_API_VERSION
        );
        self.collect_account_pages(url).await
    }

    /// Lists the Cosmos DB accounts in one resource group.
    pub async fn list_database_accounts_in_group(
        &self,
        resource_group: &str,
    ) -> Result<Vec<DatabaseAccount>> {
        let url = format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/{}/databaseAccounts?api-version={}",
            self.endpoint,
            self.subscription_id,
            resource_group,
            RESOURCE_PROVIDER,
            COSMOS_DB_API_VERSION
        );
        self.collect_account_pages(url).await
    }

    /// Retrieves the access keys for an account by its full resource ID.
    pub async fn list_keys(&self, account_id: &str) -> Result<DatabaseAccountKeys> {
        let url = format!(
            "{}{}/listKeys?api-version={}",
            self.endpoint, account_id, COSMOS_DB_API_VERSION
        );

        debug!(url = %url, "POST request");

        let token = self.credential.get_token(&[constants::MANAGEMENT_SCOPE]).await?;
        let response = self.http.post(&url).bearer_auth(&token.token).send().await?;
        self.handle_response(response).await
    }

    /// Follows `nextLink` pages until the listing is exhausted. Each page is
    /// visited exactly once.
    async fn collect_account_pages(&self, first_page: String) -> Result<Vec<DatabaseAccount>> {
        let mut accounts = Vec::new();
        let mut next = Some(first_page);

        while let Some(url) = next {
            let page: DatabaseAccountListResult = self.get(&url).await?;
            accounts.extend(page.value);
            next = page.next_link;
        }

        Ok(accounts)
    }

    /// Make an authenticated GET request.
    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "GET request");

        let token = self.credential.get_token(&[constants::MANAGEMENT_SCOPE]).await?;
        let response = self.http.get(url).bearer_auth(&token.token).send().await?;
        self.handle_response(response).await
    }

    /// Handle API response.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|e| {
                warn!(error = %e, body = %text, "failed to parse response");
                Error::Json(e)
            })
        } else if status == StatusCode::NOT_FOUND {
            Err(Error::NotFound(text))
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(Error::Auth(text))
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
