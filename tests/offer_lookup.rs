// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use serde_json::json;
use url::Url;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cosmos_min_throughput::throughput::{find_offer_link, read_min_throughput};
use cosmos_min_throughput::{CosmosClient, Error};

const KEY: &str = "dGVzdC1rZXk=";

fn client(server: &MockServer) -> CosmosClient {
    CosmosClient::with_primary_key(Url::parse(&server.uri()).unwrap(), KEY).unwrap()
}

fn offer_json(id: &str, resource_link: &str) -> serde_json::Value {
    json!({
        "id": id,
        "offerResourceId": "rid",
        "offerVersion": "V2",
        "offerType": "Invalid",
        "resource": resource_link,
        "content": { "offerThroughput": 400 },
        "_self": format!("offers/{id}/")
    })
}

async fn mount_resources(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/dbs/db1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "db1",
            "_rid": "dbRid",
            "_self": "dbs/dbRid/"
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dbs/db1/colls/coll1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "coll1",
            "_rid": "collRid",
            "_self": "dbs/dbRid/colls/collRid/"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn prefers_the_collection_offer_over_the_database_offer() {
    let server = MockServer::start().await;
    mount_resources(&server).await;
    // Page 1 only holds the database offer and points at a second page.
    Mock::given(method("GET"))
        .and(path("/offers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "_count": 1, "Offers": [offer_json("dboffer", "dbs/dbRid/")] }))
                .insert_header("x-ms-continuation", "feed-page-2"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/offers"))
        .and(header("x-ms-continuation", "feed-page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "_count": 1, "Offers": [offer_json("colloffer", "dbs/dbRid/colls/collRid/")] }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let link = find_offer_link(&client, "db1", "coll1").await.unwrap();

    assert_eq!(link, "offers/colloffer/");
}

#[tokio::test]
async fn falls_back_to_the_database_offer() {
    let server = MockServer::start().await;
    mount_resources(&server).await;
    Mock::given(method("GET"))
        .and(path("/offers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "_count": 1, "Offers": [offer_json("dboffer", "dbs/dbRid/")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let link = find_offer_link(&client, "db1", "coll1").await.unwrap();

    assert_eq!(link, "offers/dboffer/");
}

#[tokio::test]
async fn fails_when_the_feed_holds_no_matching_offer() {
    let server = MockServer::start().await;
    mount_resources(&server).await;
    Mock::given(method("GET"))
        .and(path("/offers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "_count": 1, "Offers": [offer_json("stray", "dbs/otherRid/")] })),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let result = find_offer_link(&client, "db1", "coll1").await;

    assert!(matches!(result, Err(Error::OfferNotFound)));
}

#[tokio::test]
async fn fails_when_the_database_does_not_exist() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dbs/db1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("database missing"))
        .mount(&server)
        .await;

    let client = client(&server);
    let result = find_offer_link(&client, "db1", "coll1").await;

    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn an_empty_continuation_token_ends_the_feed() {
    let server = MockServer::start().await;
    mount_resources(&server).await;
    // A present-but-empty token also means "no further pages"; exactly one
    // feed request may be issued.
    Mock::given(method("GET"))
        .and(path("/offers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "_count": 1, "Offers": [offer_json("dboffer", "dbs/dbRid/")] }))
                .insert_header("x-ms-continuation", ""),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let link = find_offer_link(&client, "db1", "coll1").await.unwrap();

    assert_eq!(link, "offers/dboffer/");
}

#[tokio::test]
async fn requests_are_signed_and_versioned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dbs/db1"))
        .and(header_exists("authorization"))
        .and(header("x-ms-version", "2018-12-31"))
        .and(header("x-ms-consistency-level", "Eventual"))
        .and(header_exists("x-ms-date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "db1",
            "_self": "dbs/dbRid/"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let database = client
        .read_database("db1")
        .await
        .unwrap()
        .deserialize_body()
        .unwrap();

    assert_eq!(database.id, "db1");
}

#[tokio::test]
async fn reads_the_minimum_throughput_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/offers/colloffer/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(offer_json("colloffer", "dbs/dbRid/colls/collRid/"))
                .insert_header("x-ms-cosmos-min-throughput", "400"),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let value = read_min_throughput(&client, "offers/colloffer/").await.unwrap();

    assert_eq!(value, 400);
}

#[tokio::test]
async fn fails_when_the_throughput_header_is_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/offers/colloffer/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(offer_json("colloffer", "dbs/dbRid/colls/collRid/")),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let result = read_min_throughput(&client, "offers/colloffer/").await;

    assert!(matches!(result, Err(Error::MissingHeader(_))));
}

#[tokio::test]
async fn fails_when_the_throughput_header_is_not_numeric() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/offers/colloffer/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(offer_json("colloffer", "dbs/dbRid/colls/collRid/"))
                .insert_header("x-ms-cosmos-min-throughput", "lots"),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    let result = read_min_throughput(&client, "offers/colloffer/").await;

    assert!(matches!(result, Err(Error::MalformedHeader { .. })));
}
