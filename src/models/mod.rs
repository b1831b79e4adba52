// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Resource models returned by the data plane.

mod collection;
mod database;
mod offer;

pub use collection::CollectionProperties;
pub use database::DatabaseProperties;
pub use offer::{Offer, OfferContent, OfferFeed};

use serde::{Deserialize, Serialize};

/// System-generated metadata common to every Cosmos DB resource.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SystemProperties {
    /// Stable path addressing this resource instance.
    #[serde(rename = "_self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// System-assigned resource ID.
    #[serde(rename = "_rid", default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    #[serde(rename = "_etag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    #[serde(rename = "_ts", default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}
