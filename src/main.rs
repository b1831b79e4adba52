// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use std::error::Error as _;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cosmos_min_throughput::{min_throughput, AppConfig, ServicePrincipal};

#[derive(Debug, Parser)]
#[clap(about, version)]
struct Args {
    /// Name of the Cosmos DB account to inspect.
    #[clap(long, env = "AZURE_COSMOS_ACCOUNT")]
    account: String,

    /// Name of the database.
    #[clap(long, env = "AZURE_COSMOS_DATABASE")]
    database: String,

    /// Name of the collection.
    #[clap(long, env = "AZURE_COSMOS_COLLECTION")]
    collection: String,

    /// Restrict the account lookup to this resource group.
    #[clap(long, env = "AZURE_RESOURCE_GROUP")]
    resource_group: Option<String>,

    /// Subscription the account lives under.
    #[clap(long, env = "AZURE_SUBSCRIPTION_ID")]
    subscription_id: String,

    /// Entra ID tenant of the service principal.
    #[clap(long, env = "AZURE_TENANT_ID")]
    tenant_id: String,

    /// Client ID of the service principal.
    #[clap(long, env = "AZURE_CLIENT_ID")]
    client_id: String,

    /// Client secret of the service principal.
    #[clap(long, env = "AZURE_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = AppConfig::new(
        args.account,
        args.database,
        args.collection,
        args.subscription_id,
        ServicePrincipal::new(args.tenant_id, args.client_id, args.client_secret),
    );
    if let Some(group) = args.resource_group {
        config = config.with_resource_group(group);
    }

    match min_throughput(&config).await {
        Ok(value) => println!("Min Throughput: {value}"),
        Err(error) => {
            eprintln!("EXCEPTION: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
