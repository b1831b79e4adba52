// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};

use crate::models::SystemProperties;

/// A throughput provisioning record. Every database and collection is
/// governed by exactly one offer, associated through [`Offer::resource_link`].
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,

    /// System resource ID of the governed resource.
    pub offer_resource_id: String,

    pub offer_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_type: Option<String>,

    /// Self-link of the database or collection this offer governs.
    #[serde(rename = "resource")]
    pub resource_link: String,

    pub content: OfferContent,

    #[serde(flatten)]
    pub system_properties: SystemProperties,
}

/// Provisioned throughput settings carried by an offer.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_throughput: Option<i32>,
}

/// Envelope for one page of the offers feed.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OfferFeed {
    #[serde(rename = "Offers")]
    pub offers: Vec<Offer>,

    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}
