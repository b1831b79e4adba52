// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Signed request pipeline for the Cosmos DB data plane.

mod authorization;

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{header, Method, StatusCode};
use time::OffsetDateTime;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::constants;
use crate::error::{Error, Result};
use crate::response::Response;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resource classes addressed by this tool, named as they appear in
/// authorization payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ResourceType {
    Databases,
    Collections,
    Offers,
}

impl ResourceType {
    fn auth_name(self) -> &'static str {
        match self {
            Self::Databases => "dbs",
            Self::Collections => "colls",
            Self::Offers => "offers",
        }
    }
}

/// Sends master-key-signed requests and classifies the responses.
#[derive(Clone)]
pub(crate) struct CosmosPipeline {
    http: reqwest::Client,
    key: Vec<u8>,
}

impl CosmosPipeline {
    /// Creates a pipeline from a base64-encoded account master key.
    pub(crate) fn new(key: &str) -> Result<Self> {
        let key = BASE64.decode(key).map_err(Error::InvalidKey)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http, key })
    }

    /// Sends one request. `resource_link` is the link signed into the
    /// authorization header; `extra_headers` are appended after the
    /// standard ones.
    pub(crate) async fn send<T>(
        &self,
        method: Method,
        url: Url,
        resource_type: ResourceType,
        resource_link: &str,
        extra_headers: &[(&'static str, String)],
    ) -> Result<Response<T>> {
        let date = authorization::format_http_date(OffsetDateTime::now_utc())?;
        let token = authorization::primary_key_token(
            &self.key,
            method.as_str(),
            resource_type,
            resource_link,
            &date,
        );

        debug!(url = %url, resource_link, "sending request");

        let mut request = self
            .http
            .request(method, url.clone())
            .header(header::AUTHORIZATION, token)
            .header(constants::DATE, date)
            .header(constants::VERSION, constants::API_VERSION)
            .header(constants::ACTIVITY_ID, Uuid::new_v4().to_string())
            .header(constants::CONSISTENCY_LEVEL, "Eventual");
        for (name, value) in extra_headers {
            request = request.header(*name, value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.bytes().await?;

        if status.is_success() {
            Ok(Response::new(status, response_headers, body))
        } else if status == StatusCode::NOT_FOUND {
            Err(Error::NotFound(url.to_string()))
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(Error::Auth(String::from_utf8_lossy(&body).into_owned()))
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            })
        }
    }
}
