// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Management-plane (Azure Resource Manager) client for Cosmos DB accounts.

mod client;
mod models;

pub use client::ArmClient;
pub use models::{DatabaseAccount, DatabaseAccountKeys, DatabaseAccountProperties};
