// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use crate::constants;

/// Options applied to feed (paged) read operations.
#[derive(Clone, Debug)]
pub struct FeedOptions {
    max_item_count: i32,
}

impl FeedOptions {
    /// Creates a new [`FeedOptionsBuilder`](FeedOptionsBuilder) that can be used to construct a [`FeedOptions`].
    pub fn builder() -> FeedOptionsBuilder {
        FeedOptionsBuilder::default()
    }

    pub(crate) fn max_item_count(&self) -> i32 {
        self.max_item_count
    }
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            max_item_count: constants::DEFAULT_FEED_PAGE_SIZE,
        }
    }
}

/// Builder used to construct a [`FeedOptions`].
///
/// Obtain a [`FeedOptionsBuilder`] by calling [`FeedOptions::builder()`].
#[derive(Default)]
pub struct FeedOptionsBuilder(FeedOptions);

impl FeedOptionsBuilder {
    /// Sets the maximum number of items returned per page.
    pub fn max_item_count(&mut self, max_item_count: i32) -> &mut Self {
        self.0.max_item_count = max_item_count;
        self
    }

    /// Builds a [`FeedOptions`] from the builder.
    ///
    /// This does not consume the builder, and can be called multiple times.
    pub fn build(&self) -> FeedOptions {
        self.0.clone()
    }
}
