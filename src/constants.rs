// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Header names, API versions, and well-known endpoints.

/// Carries the minimum throughput the service allows for the offer's
/// resource, as a decimal integer string. Only returned on direct offer
/// reads, never as a queryable field.
pub const MIN_THROUGHPUT: &str = "x-ms-cosmos-min-throughput";

/// Continuation token for feed reads. Sent on the request to resume a feed,
/// returned on the response while more pages remain.
pub const CONTINUATION: &str = "x-ms-continuation";

/// Maximum number of items to return from a feed read.
pub const MAX_ITEM_COUNT: &str = "x-ms-max-item-count";

pub const VERSION: &str = "x-ms-version";
pub const DATE: &str = "x-ms-date";
pub const ACTIVITY_ID: &str = "x-ms-activity-id";
pub const CONSISTENCY_LEVEL: &str = "x-ms-consistency-level";

/// Data-plane REST API version.
pub const API_VERSION: &str = "2018-12-31";

/// Default number of items requested per offer feed page.
pub const DEFAULT_FEED_PAGE_SIZE: i32 = 100;

/// Azure global cloud Resource Manager endpoint.
pub const AZURE_PUBLIC_CLOUD_MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";

/// Azure global cloud Entra ID authority.
pub const AZURE_PUBLIC_CLOUD_AUTHORITY: &str = "https://login.microsoftonline.com";

/// Token scope for management-plane calls in the global cloud.
pub const MANAGEMENT_SCOPE: &str = "https://management.azure.com/.default";
