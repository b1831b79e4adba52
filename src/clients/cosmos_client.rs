// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use futures::Stream;
use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::constants;
use crate::error::Result;
use crate::feed::FeedPage;
use crate::models::{CollectionProperties, DatabaseProperties, Offer, OfferFeed};
use crate::options::FeedOptions;
use crate::pipeline::{CosmosPipeline, ResourceType};
use crate::response::Response;

/// A client for the data plane of a single Cosmos DB account.
///
/// The client owns its HTTP connections and releases them when dropped, on
/// every exit path.
pub struct CosmosClient {
    endpoint: Url,
    pipeline: CosmosPipeline,
}

impl CosmosClient {
    /// Creates a client that authenticates with the account's base64-encoded
    /// master key.
    pub fn with_primary_key(endpoint: Url, key: &str) -> Result<Self> {
        Ok(Self {
            endpoint,
            pipeline: CosmosPipeline::new(key)?,
        })
    }

    /// Reads the properties of a database.
    ///
    /// Fails with a not-found error if the database does not exist.
    pub async fn read_database(&self, database_name: &str) -> Result<Response<DatabaseProperties>> {
        let link = format!("dbs/{database_name}");
        let url = self.endpoint.join(&link)?;
        self.pipeline
            .send(Method::GET, url, ResourceType::Databases, &link, &[])
            .await
    }

    /// Reads the properties of a collection.
    ///
    /// Fails with a not-found error if the collection does not exist.
    pub async fn read_collection(
        &self,
        database_name: &str,
        collection_name: &str,
    ) -> Result<Response<CollectionProperties>> {
        let link = format!("dbs/{database_name}/colls/{collection_name}");
        let url = self.endpoint.join(&link)?;
        self.pipeline
            .send(Method::GET, url, ResourceType::Collections, &link, &[])
            .await
    }

    /// Reads the account's offer feed as a stream of pages.
    ///
    /// Each page is fetched when polled. The stream ends after the page
    /// whose continuation token is absent or empty, so every page is
    /// visited at most once.
    pub fn offers(&self, options: FeedOptions) -> impl Stream<Item = Result<FeedPage<Offer>>> + '_ {
        enum State {
            Next(Option<String>),
            Done,
        }

        futures::stream::unfold(State::Next(None), move |state| {
            let options = options.clone();
            async move {
                match state {
                    State::Done => None,
                    State::Next(continuation) => {
                        match self.read_offers_page(&options, continuation.as_deref()).await {
                            Ok(page) => {
                                let next = match page.continuation() {
                                    Some(token) => State::Next(Some(token.to_string())),
                                    None => State::Done,
                                };
                                Some((Ok(page), next))
                            }
                            Err(error) => Some((Err(error), State::Done)),
                        }
                    }
                }
            }
        })
    }

    /// Re-reads one offer directly by its self-link. The minimum allowed
    /// throughput for the offer's resource is only exposed on the headers
    /// of this response.
    pub async fn read_offer(&self, self_link: &str) -> Result<Response<Offer>> {
        let url = self.endpoint.join(self_link)?;
        // Offer resource ids are signed lowercase, unlike every other
        // resource class.
        let link = self_link.trim_end_matches('/').to_lowercase();
        self.pipeline
            .send(Method::GET, url, ResourceType::Offers, &link, &[])
            .await
    }

    async fn read_offers_page(
        &self,
        options: &FeedOptions,
        continuation: Option<&str>,
    ) -> Result<FeedPage<Offer>> {
        let url = self.endpoint.join("offers")?;

        let mut headers = vec![(
            constants::MAX_ITEM_COUNT,
            options.max_item_count().to_string(),
        )];
        if let Some(token) = continuation {
            headers.push((constants::CONTINUATION, token.to_string()));
        }

        let response: Response<OfferFeed> = self
            .pipeline
            .send(Method::GET, url, ResourceType::Offers, "", &headers)
            .await?;

        // An absent or empty token means the feed is exhausted.
        let continuation = response
            .header_str(constants::CONTINUATION)
            .filter(|token| !token.is_empty())
            .map(ToOwned::to_owned);
        let feed = response.deserialize_body()?;

        debug!(
            count = feed.offers.len(),
            more_pages = continuation.is_some(),
            "read offers feed page"
        );

        Ok(FeedPage::new(feed.offers, continuation))
    }
}
