mod common;

use std::time::Duration;

use httpmock::Method::GET;

use common::{QUOTE_BODY, builder_for, client_for, setup_server};
use fmp_client::{Endpoint, FmpError, Tier};

#[tokio::test]
async fn fetch_sends_key_and_query_params() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/quote")
            .query_param("symbol", "AAPL")
            .query_param("apikey", "test-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(QUOTE_BODY);
    });

    let client = client_for(&server);
    let rows = client
        .fetch_list(Endpoint::Quote, &[], &[("symbol", "AAPL".to_string())])
        .await
        .unwrap();

    mock.assert();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["symbol"], "AAPL");
}

#[tokio::test]
async fn timeout_is_retried_up_to_three_attempts() {
    let server = setup_server();
    // Longer than the client timeout, so every attempt times out.
    let slow = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200).delay(Duration::from_millis(600)).body("[]");
    });

    let client = client_for(&server);
    let err = client
        .fetch(Endpoint::Quote, &[], &[])
        .await
        .unwrap_err();

    slow.assert_hits(3);
    assert!(matches!(err, FmpError::Http(_)));
}

#[tokio::test]
async fn http_error_status_is_not_retried() {
    let server = setup_server();
    let not_found = server.mock(|when, then| {
        when.method(GET).path("/stable/profile");
        then.status(404).body("not found");
    });

    let client = client_for(&server);
    let err = client
        .fetch(Endpoint::Profile, &[], &[])
        .await
        .unwrap_err();

    not_found.assert_hits(1);
    match err {
        FmpError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn upstream_429_maps_to_rate_limited() {
    let server = setup_server();
    let throttled = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(429).body("Too Many Requests");
    });

    let client = client_for(&server);
    let err = client.fetch(Endpoint::Quote, &[], &[]).await.unwrap_err();

    throttled.assert_hits(1);
    assert!(matches!(err, FmpError::RateLimited));
}

#[tokio::test]
async fn vendor_error_in_200_body_is_an_api_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"Error Message": "Invalid API KEY."}"#);
    });

    let client = client_for(&server);
    let err = client.fetch(Endpoint::Quote, &[], &[]).await.unwrap_err();

    mock.assert_hits(1);
    match err {
        FmpError::Api { status, message } => {
            assert_eq!(status, 200);
            assert_eq!(message, "Invalid API KEY.");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn tier_gate_rejects_before_any_network_traffic() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stable/price-target-summary");
        then.status(200).body("[]");
    });

    let client = builder_for(&server).tier(Tier::Starter).build().unwrap();
    let err = client
        .fetch(Endpoint::PriceTargetSummary, &[], &[])
        .await
        .unwrap_err();

    mock.assert_hits(0);
    match err {
        FmpError::TierDenied {
            endpoint,
            required,
            current,
        } => {
            assert_eq!(endpoint, "price_target_summary");
            assert_eq!(required, Tier::Ultimate);
            assert_eq!(current, Tier::Starter);
        }
        other => panic!("expected TierDenied, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_list_unwraps_a_data_envelope() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data": [{"symbol": "AAPL"}, {"symbol": "MSFT"}]}"#);
    });

    let client = client_for(&server);
    let rows = client.fetch_list(Endpoint::Quote, &[], &[]).await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn fetch_list_promotes_a_lone_object() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"symbol": "AAPL"}"#);
    });

    let client = client_for(&server);
    let rows = client.fetch_list(Endpoint::Quote, &[], &[]).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["symbol"], "AAPL");
}

#[tokio::test]
async fn fetch_object_wraps_a_bare_array() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/stable/dividends");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"dividend": 0.25}]"#);
    });

    let client = client_for(&server);
    let map = client
        .fetch_object(Endpoint::DividendsHistorical, &[], &[])
        .await
        .unwrap();
    assert!(map["data"].is_array());
}

#[tokio::test]
async fn empty_array_is_a_valid_success() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let client = client_for(&server);
    let rows = client.fetch_list(Endpoint::Quote, &[], &[]).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn close_then_reuse_reopens_the_session() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let client = client_for(&server);
    client.fetch_list(Endpoint::Quote, &[], &[]).await.unwrap();
    client.close().await;
    client.close().await;
    client.fetch_list(Endpoint::Quote, &[], &[]).await.unwrap();

    mock.assert_hits(2);
}
