// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use std::marker::PhantomData;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// An HTTP response whose body has been fully buffered.
///
/// The type parameter `T` is a marker type indicating what the caller should
/// expect to deserialize the body into; the raw status, headers, and body
/// stay available until then.
pub struct Response<T = Bytes> {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    _marker: PhantomData<T>,
}

impl<T> Response<T> {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
            _marker: PhantomData,
        }
    }

    /// Get the status code from the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers from the response.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns one header as a string, when present and valid UTF-8.
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Consumes the response and returns the raw body.
    pub fn into_body(self) -> Bytes {
        self.body
    }
}

impl<T: DeserializeOwned> Response<T> {
    /// Deserializes the buffered body into `T`.
    pub fn deserialize_body(self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
