//! Integration tests for OAuth1 signing of requests to `http` stores.
//!
//! The mock store records every request; the tests recompute the signature
//! from what actually arrived on the wire.

use chrono::{TimeZone, Utc};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use woocommerce_api::auth::oauth::hmac::compute_signature_base64;
use woocommerce_api::auth::oauth::{
    canonical_parameter_string, signature_base_string, signing_key, SIGNATURE_METHOD,
};
use woocommerce_api::{ApiVersion, ClientOptions, HttpMethod, ParameterSet, RestClient};

/// Collects the decoded query parameters of a received request.
fn received_params(request: &Request) -> ParameterSet {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Recomputes the signature the server would expect for `request`.
fn expected_signature(
    request: &Request,
    method: HttpMethod,
    signed_url: &str,
    options: &ClientOptions,
) -> String {
    let mut params = received_params(request);
    params.remove("oauth_signature");
    let base = signature_base_string(method, signed_url, &canonical_parameter_string(&params));
    let key = signing_key("cs_test", options.api(), options.version());
    compute_signature_base64(base.as_bytes(), &key)
}

async fn mount_ok(server: &MockServer) {
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_carries_valid_oauth_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/products"))
        .and(query_param("oauth_consumer_key", "ck_test"))
        .and(query_param("oauth_signature_method", SIGNATURE_METHOD))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let options = ClientOptions::default();
    let client = RestClient::new(&server.uri(), "ck_test", "cs_test", Some(options.clone())).unwrap();
    let params: ParameterSet = [("per_page", "10")].into_iter().collect();
    client.get("products", Some(params)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let params = received_params(request);

    assert!(!params.contains_key("consumer_key"));
    assert!(!params.contains_key("consumer_secret"));
    assert_eq!(params.get("oauth_nonce").map(str::len), Some(40));
    assert!(params
        .get("oauth_timestamp")
        .is_some_and(|ts| ts.parse::<i64>().is_ok()));

    let signed_url = format!("{}/wp-json/wc/v2/products", server.uri());
    assert_eq!(
        params.get("oauth_signature"),
        Some(expected_signature(request, HttpMethod::Get, &signed_url, &options).as_str())
    );
}

#[tokio::test]
async fn test_delete_signature_covers_the_sent_method() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let options = ClientOptions::default();
    let client = RestClient::new(&server.uri(), "ck_test", "cs_test", Some(options.clone())).unwrap();
    let params: ParameterSet = [("force", "true")].into_iter().collect();
    client.delete("orders/7", Some(params)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let signed_url = format!("{}/wp-json/wc/v2/orders/7", server.uri());

    assert_eq!(
        received_params(request).get("oauth_signature"),
        Some(expected_signature(request, HttpMethod::Post, &signed_url, &options).as_str())
    );
}

#[tokio::test]
async fn test_legacy_api_signs_with_bare_secret() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let options = ClientOptions::builder()
        .api(true)
        .version(ApiVersion::V2)
        .build();
    let client = RestClient::new(&server.uri(), "ck_test", "cs_test", Some(options.clone())).unwrap();
    client.get("orders", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert_eq!(request.url.path(), "/wc-api/v2/orders");

    let signed_url = format!("{}/wc-api/v2/orders", server.uri());
    let mut params = received_params(request);
    let sent = params.remove("oauth_signature").unwrap();
    let base = signature_base_string(
        HttpMethod::Get,
        &signed_url,
        &canonical_parameter_string(&params),
    );
    assert_eq!(sent[0], compute_signature_base64(base.as_bytes(), "cs_test"));
}

#[tokio::test]
async fn test_pinned_timestamp_is_sent() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let pinned = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
    let options = ClientOptions::builder().oauth_timestamp(pinned).build();
    let client = RestClient::new(&server.uri(), "ck_test", "cs_test", Some(options)).unwrap();
    client.get("orders", None).await.unwrap();
    client.get("orders", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let first = received_params(&requests[0]);
    let second = received_params(&requests[1]);

    assert_eq!(first.get("oauth_timestamp"), Some("1700000000"));
    assert_eq!(second.get("oauth_timestamp"), Some("1700000000"));
    assert_ne!(first.get("oauth_nonce"), second.get("oauth_nonce"));
    assert_ne!(first.get("oauth_signature"), second.get("oauth_signature"));
}

#[tokio::test]
async fn test_caller_supplied_oauth_params_are_replaced() {
    let server = MockServer::start().await;
    mount_ok(&server).await;

    let client = RestClient::new(&server.uri(), "ck_test", "cs_test", None).unwrap();
    let params: ParameterSet = [("oauth_consumer_key", "ck_spoofed"), ("status", "pending")]
        .into_iter()
        .collect();
    client.get("orders", Some(params)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let params = received_params(&requests[0]);
    assert_eq!(params.get_all("oauth_consumer_key"), ["ck_test".to_string()]);
    assert_eq!(params.get("status"), Some("pending"));
}
