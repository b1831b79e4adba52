// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Resolves a Cosmos DB account by name and fetches its primary master key.

use tracing::{error, info, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::management::ArmClient;

/// Everything the data plane needs to talk to one account.
#[derive(Clone, Debug)]
pub struct AccountInfo {
    /// Account name.
    pub name: String,
    /// Data-plane endpoint.
    pub endpoint: Url,
    /// Primary read-write master key, base64 encoded.
    pub primary_master_key: String,
}

/// Finds the account with the given name under the subscription and
/// retrieves its primary master key.
///
/// The name comparison is case-insensitive and must match exactly one
/// account. When `resource_group` is set, only accounts in that group are
/// considered.
pub async fn resolve(
    arm: &ArmClient,
    account_name: &str,
    resource_group: Option<&str>,
) -> Result<AccountInfo> {
    if account_name.trim().is_empty() {
        return Err(Error::EmptyAccountName);
    }

    let accounts = match resource_group {
        None => arm.list_database_accounts().await?,
        Some(group) => arm.list_database_accounts_in_group(group).await?,
    };

    let mut matches: Vec<_> = accounts
        .into_iter()
        .filter(|account| account.name.eq_ignore_ascii_case(account_name))
        .collect();

    let account = match matches.len() {
        1 => matches.remove(0),
        0 => {
            error!(account_name, "account could not be found");
            return Err(Error::AccountNotFound(account_name.to_string()));
        }
        count => {
            error!(account_name, count, "account name is ambiguous");
            return Err(Error::AccountAmbiguous {
                name: account_name.to_string(),
                count,
            });
        }
    };

    let keys = match arm.list_keys(&account.id).await {
        Ok(keys) => keys,
        Err(cause) => {
            error!(
                account_id = %account.id,
                "no permission to access the master keys of the account"
            );
            warn!(error = %cause, "key listing failed");
            return Err(Error::KeyAccessDenied {
                account_id: account.id,
                source: Box::new(cause),
            });
        }
    };

    let endpoint = Url::parse(&account.properties.document_endpoint)?;

    info!(account_name = %account.name, "account found and initialized");

    Ok(AccountInfo {
        name: account.name,
        endpoint,
        primary_master_key: keys.primary_master_key,
    })
}
