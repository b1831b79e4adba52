// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};

use crate::models::SystemProperties;

/// Properties of a Cosmos DB database.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DatabaseProperties {
    /// User-assigned database name.
    pub id: String,

    #[serde(flatten)]
    pub system_properties: SystemProperties,
}
