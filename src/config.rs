// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Injected run configuration. Nothing in this crate reads credentials or
//! resource names from compile-time constants.

use url::Url;

use crate::constants;

/// Service-principal credentials used to authenticate against the
/// management plane.
#[derive(Clone, Debug)]
pub struct ServicePrincipal {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl ServicePrincipal {
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// Everything one throughput lookup needs: which account, database, and
/// collection to inspect, and how to sign in.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub account_name: String,
    pub database_name: String,
    pub collection_name: String,
    /// When set, the account lookup only considers this resource group.
    pub resource_group: Option<String>,
    pub subscription_id: String,
    pub credentials: ServicePrincipal,
    pub management_endpoint: Url,
    pub authority: Url,
}

impl AppConfig {
    /// Creates a configuration targeting the Azure global cloud.
    pub fn new(
        account_name: impl Into<String>,
        database_name: impl Into<String>,
        collection_name: impl Into<String>,
        subscription_id: impl Into<String>,
        credentials: ServicePrincipal,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            database_name: database_name.into(),
            collection_name: collection_name.into(),
            resource_group: None,
            subscription_id: subscription_id.into(),
            credentials,
            management_endpoint: Url::parse(constants::AZURE_PUBLIC_CLOUD_MANAGEMENT_ENDPOINT)
                .expect("well-known endpoint is a valid URL"),
            authority: Url::parse(constants::AZURE_PUBLIC_CLOUD_AUTHORITY)
                .expect("well-known endpoint is a valid URL"),
        }
    }

    /// Scopes the account lookup to a single resource group.
    pub fn with_resource_group(mut self, resource_group: impl Into<String>) -> Self {
        self.resource_group = Some(resource_group.into());
        self
    }

    /// Overrides the Resource Manager endpoint.
    pub fn with_management_endpoint(mut self, endpoint: Url) -> Self {
        self.management_endpoint = endpoint;
        self
    }

    /// Overrides the token authority.
    pub fn with_authority(mut self, authority: Url) -> Self {
        self.authority = authority;
        self
    }
}
