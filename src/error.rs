// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Error types for account resolution and throughput lookup.

use thiserror::Error;

/// Errors that can occur while resolving an account or reading throughput.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured account name is empty or whitespace.
    #[error("account name must not be empty")]
    EmptyAccountName,

    /// No account with the configured name is visible under the subscription.
    #[error("invalid account name '{0}': the account could not be found")]
    AccountNotFound(String),

    /// The configured name matched more than one account.
    #[error("account name '{name}' matches {count} accounts where exactly one was expected")]
    AccountAmbiguous { name: String, count: usize },

    /// The caller is not allowed to read the account's master keys.
    #[error("no permission to access the master keys of account '{account_id}'")]
    KeyAccessDenied {
        account_id: String,
        #[source]
        source: Box<Error>,
    },

    /// The offer feed was exhausted without a match. Every database and
    /// collection implicitly has an offer, so this indicates a service-side
    /// inconsistency.
    #[error("an offer for either the database or the collection should always exist")]
    OfferNotFound,

    /// A required response header was not present.
    #[error("response is missing the '{0}' header")]
    MissingHeader(&'static str),

    /// A response header was present but could not be parsed.
    #[error("header '{header}' carries '{value}', which is not a valid throughput value")]
    MalformedHeader {
        header: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The service reported that a resource does not exist.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Authentication or authorization failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The service returned an unexpected error response.
    #[error("the service returned an error: {status} {message}")]
    Api { status: u16, message: String },

    /// The account master key could not be decoded.
    #[error("the account master key is not valid base64")]
    InvalidKey(#[source] base64::DecodeError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("failed to format the request date")]
    DateFormat(#[from] time::error::Format),
}

pub type Result<T> = std::result::Result<T, Error>;
