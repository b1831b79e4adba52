// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Clients for the Cosmos DB data plane.

mod cosmos_client;

pub use cosmos_client::CosmosClient;
