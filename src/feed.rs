// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

/// One page of results from a feed read.
#[derive(Clone, Debug)]
pub struct FeedPage<T> {
    items: Vec<T>,
    continuation: Option<String>,
}

impl<T> FeedPage<T> {
    pub(crate) fn new(items: Vec<T>, continuation: Option<String>) -> Self {
        Self {
            items,
            continuation,
        }
    }

    /// The items in this page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Token addressing the next page, or `None` when the feed is
    /// exhausted.
    pub fn continuation(&self) -> Option<&str> {
        self.continuation.as_deref()
    }
}
