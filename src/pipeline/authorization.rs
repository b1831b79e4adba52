// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Master-key request signing.
//!
//! Every data-plane request carries an `authorization` header derived from
//! the account master key: an HMAC-SHA256 signature over the request verb,
//! resource type, resource link, and date.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha2::Sha256;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use super::ResourceType;

type HmacSha256 = Hmac<Sha256>;

/// RFC 1123 layout required by the `x-ms-date` header.
const HTTP_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Characters escaped when the finished token is url-encoded.
const TOKEN_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn format_http_date(date: OffsetDateTime) -> Result<String, time::error::Format> {
    date.format(&HTTP_DATE_FORMAT)
}

/// Builds the signature payload. Verb, resource type, and date are signed
/// lowercase; the resource link is case-sensitive.
pub(crate) fn string_to_sign(
    verb: &str,
    resource_type: ResourceType,
    resource_link: &str,
    date: &str,
) -> String {
    format!(
        "{}\n{}\n{}\n{}\n\n",
        verb.to_lowercase(),
        resource_type.auth_name(),
        resource_link,
        date.to_lowercase()
    )
}

/// Produces the url-encoded `type=master&ver=1.0&sig=...` token for one
/// request.
pub(crate) fn primary_key_token(
    key: &[u8],
    verb: &str,
    resource_type: ResourceType,
    resource_link: &str,
    date: &str,
) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(string_to_sign(verb, resource_type, resource_link, date).as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    let token = format!("type=master&ver=1.0&sig={signature}");
    utf8_percent_encode(&token, TOKEN_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use time::macros::datetime;

    // Sample master key from the REST authorization documentation.
    const KEY: &str =
        "dsZQi3KtZmCv1ljt3VNWNm7sQUF1y5rJfC6kv5JiwvW0EndXdDku/dkKBp8/ufDToSxLzR4y+O/0H/t4bQtVNw==";
    const DATE: &str = "Thu, 27 Apr 2017 00:51:12 GMT";

    fn key_bytes() -> Vec<u8> {
        BASE64.decode(KEY).unwrap()
    }

    #[test]
    fn http_date_uses_rfc_1123_layout() {
        let date = format_http_date(datetime!(2017-04-27 00:51:12 UTC)).unwrap();
        assert_eq!(date, DATE);
    }

    #[test]
    fn payload_lowercases_everything_but_the_link() {
        let payload = string_to_sign("GET", ResourceType::Databases, "dbs/ToDoList", DATE);
        assert_eq!(
            payload,
            "get\ndbs\ndbs/ToDoList\nthu, 27 apr 2017 00:51:12 gmt\n\n"
        );
    }

    #[test]
    fn token_matches_the_documented_signing_vector() {
        let token = primary_key_token(
            &key_bytes(),
            "GET",
            ResourceType::Databases,
            "dbs/ToDoList",
            DATE,
        );
        assert_eq!(
            token,
            "type%3Dmaster%26ver%3D1.0%26sig%3Dc09PEVJrgp2uQRkr934kFbTqhByc7TVr3OHyqlu%2Bc%2Bc%3D"
        );
    }

    #[test]
    fn offer_reads_sign_with_the_offers_resource_type() {
        let token = primary_key_token(&key_bytes(), "GET", ResourceType::Offers, "offers/v8qn", DATE);
        assert_eq!(
            token,
            "type%3Dmaster%26ver%3D1.0%26sig%3DBs45As%2FKKOuGwHMgOW%2BWAMX5gUonsUeMtSv84VvnlxI%3D"
        );
    }

    #[test]
    fn changing_the_verb_changes_the_signature() {
        let get = primary_key_token(&key_bytes(), "GET", ResourceType::Offers, "", DATE);
        let post = primary_key_token(&key_bytes(), "POST", ResourceType::Offers, "", DATE);
        assert_ne!(get, post);
    }
}
