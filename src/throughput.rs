// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Locates the offer backing a database or collection and reads the
//! minimum throughput the service allows for it.

use futures::{pin_mut, StreamExt};
use tracing::debug;

use crate::clients::CosmosClient;
use crate::constants;
use crate::error::{Error, Result};
use crate::models::Offer;
use crate::options::FeedOptions;

/// Finds the self-link of the offer governing the collection.
///
/// The offer feed is scanned page by page. A match on the database is
/// remembered as a fallback while the scan continues, so a
/// collection-specific offer still wins wherever it appears in the feed; a
/// match on the collection returns immediately. Exhausting the feed with
/// neither match is a service-side inconsistency, since every database and
/// collection implicitly has an offer.
pub async fn find_offer_link(
    client: &CosmosClient,
    database_name: &str,
    collection_name: &str,
) -> Result<String> {
    let database = client.read_database(database_name).await?.deserialize_body()?;
    let collection = client
        .read_collection(database_name, collection_name)
        .await?
        .deserialize_body()?;

    let database_link = database
        .system_properties
        .self_link
        .expect("service should always return a '_self' link for a database");
    let collection_link = collection
        .system_properties
        .self_link
        .expect("service should always return a '_self' link for a collection");

    let mut database_offer = None;

    let pages = client.offers(
        FeedOptions::builder()
            .max_item_count(constants::DEFAULT_FEED_PAGE_SIZE)
            .build(),
    );
    pin_mut!(pages);

    while let Some(page) = pages.next().await {
        for offer in page?.into_items() {
            if offer.resource_link == database_link {
                database_offer = Some(offer);
                continue;
            }

            if offer.resource_link == collection_link {
                return Ok(offer_self_link(offer));
            }
        }
    }

    if let Some(offer) = database_offer {
        debug!(
            collection_name,
            "collection has no dedicated offer, using the database offer"
        );
        return Ok(offer_self_link(offer));
    }

    Err(Error::OfferNotFound)
}

fn offer_self_link(offer: Offer) -> String {
    offer
        .system_properties
        .self_link
        .expect("service should always return a '_self' link for an offer")
}

/// Reads the minimum allowed throughput for the offer behind `offer_link`.
///
/// The value travels only as a response header on direct offer reads and is
/// parsed as a base-10 integer.
pub async fn read_min_throughput(client: &CosmosClient, offer_link: &str) -> Result<i32> {
    let response = client.read_offer(offer_link).await?;

    let value = response
        .header_str(constants::MIN_THROUGHPUT)
        .ok_or(Error::MissingHeader(constants::MIN_THROUGHPUT))?;

    value.parse().map_err(|source| Error::MalformedHeader {
        header: constants::MIN_THROUGHPUT,
        value: value.to_string(),
        source,
    })
}
