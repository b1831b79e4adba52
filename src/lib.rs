// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

#![doc = include_str!("../README.md")]

use std::sync::Arc;

pub mod account;
pub mod clients;
pub mod config;
pub mod constants;
mod credentials;
mod error;
mod feed;
pub mod management;
pub mod models;
mod options;
pub(crate) mod pipeline;
mod response;
pub mod throughput;

#[doc(inline)]
pub use clients::CosmosClient;

pub use config::{AppConfig, ServicePrincipal};
pub use credentials::{AccessToken, ClientSecretCredential, TokenCredential};
pub use error::{Error, Result};
pub use feed::FeedPage;
pub use options::FeedOptions;
pub use response::Response;

use management::ArmClient;

/// Resolves the configured account and reads the minimum allowed throughput
/// for the configured collection, falling back to its database.
///
/// This is the whole lookup in one call: authenticate, locate the account
/// and its primary master key, find the offer, and read the
/// minimum-throughput header from a direct offer read.
pub async fn min_throughput(config: &AppConfig) -> Result<i32> {
    let credential: Arc<dyn TokenCredential> = Arc::new(
        ClientSecretCredential::new(
            &config.credentials.tenant_id,
            &config.credentials.client_id,
            &config.credentials.client_secret,
        )?
        .with_authority(config.authority.clone()),
    );

    let arm = ArmClient::new(credential, &config.subscription_id)?
        .with_endpoint(config.management_endpoint.clone());

    let account = account::resolve(&arm, &config.account_name, config.resource_group.as_deref()).await?;

    let client = CosmosClient::with_primary_key(account.endpoint.clone(), &account.primary_master_key)?;

    let offer_link =
        throughput::find_offer_link(&client, &config.database_name, &config.collection_name).await?;

    throughput::read_min_throughput(&client, &offer_link).await
}
