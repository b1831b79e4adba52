// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Resource Manager request and response models.

use serde::Deserialize;

/// A Cosmos DB database account resource.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccount {
    /// Full resource ID
    /// (`/subscriptions/{sub}/resourceGroups/{rg}/providers/...`).
    pub id: String,
    /// Account name.
    pub name: String,
    /// Account properties.
    pub properties: DatabaseAccountProperties,
}

/// Properties of a database account.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountProperties {
    /// Data-plane endpoint for the account.
    pub document_endpoint: String,
}

/// One page of a database account listing.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountListResult {
    /// Accounts on this page.
    #[serde(default)]
    pub value: Vec<DatabaseAccount>,
    /// Absolute URL of the next page, when more results remain.
    pub next_link: Option<String>,
}

/// Access keys for a database account.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseAccountKeys {
    /// Primary read-write master key.
    pub primary_master_key: String,
    /// Secondary read-write master key.
    pub secondary_master_key: Option<String>,
    /// Primary read-only key.
    pub primary_readonly_master_key: Option<String>,
    /// Secondary read-only key.
    pub secondary_readonly_master_key: Option<String>,
}
