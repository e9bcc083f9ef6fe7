mod common;

use std::sync::Arc;

use httpmock::Method::GET;

use common::{INCOME_BODY, PROFILE_BODY, QUOTE_BODY, builder_for, client_for, setup_server};
use fmp_client::{DataRequest, FmpError, MemoryCache, Tier};

#[tokio::test]
async fn aggregate_assembles_requested_sections() {
    let server = setup_server();
    let quote = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/quote")
            .query_param("symbol", "AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(QUOTE_BODY);
    });
    let profile = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/profile")
            .query_param("symbol", "AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(PROFILE_BODY);
    });
    let income = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/income-statement")
            .query_param("symbol", "AAPL")
            .query_param("period", "quarter")
            .query_param("limit", "4");
        then.status(200)
            .header("content-type", "application/json")
            .body(INCOME_BODY);
    });

    let client = client_for(&server);
    let req = DataRequest::builder("aapl")
        .quote(true)
        .profile(true)
        .income_statements(true)
        .build()
        .unwrap();
    let data = client.get_ticker_data(&req).await.unwrap();

    quote.assert();
    profile.assert();
    income.assert();

    assert_eq!(data.symbol, "AAPL");
    assert_eq!(data.quote.as_ref().unwrap().price, Some(228.5));
    assert_eq!(
        data.profile.as_ref().unwrap().company_name.as_deref(),
        Some("Apple Inc.")
    );
    assert_eq!(data.income_statements.len(), 2);
    assert_eq!(
        data.latest_income_statement().unwrap().eps,
        Some(1.57)
    );
    assert!(data.has_fundamentals());
    assert!(data.fetched_at.is_some());
    assert!(!data.cache_hit);
    // Unrequested slots stay empty.
    assert!(data.news.is_none());
    assert!(data.balance_sheets.is_empty());
}

#[tokio::test]
async fn one_failed_section_does_not_fail_the_aggregate() {
    common::init_tracing();
    let server = setup_server();
    let quote = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200)
            .header("content-type", "application/json")
            .body(QUOTE_BODY);
    });
    let profile = server.mock(|when, then| {
        when.method(GET).path("/stable/profile");
        then.status(500).body("internal error");
    });

    let client = client_for(&server);
    let req = DataRequest::builder("AAPL")
        .quote(true)
        .profile(true)
        .build()
        .unwrap();
    let data = client.get_ticker_data(&req).await.unwrap();

    quote.assert();
    profile.assert();
    assert!(data.quote.is_some());
    assert!(data.profile.is_none());
}

#[tokio::test]
async fn umbrella_and_individual_flag_dispatch_each_section_once() {
    let server = setup_server();
    let income = server.mock(|when, then| {
        when.method(GET).path("/stable/income-statement");
        then.status(200)
            .header("content-type", "application/json")
            .body(INCOME_BODY);
    });
    // The other five fundamental sections.
    for path in [
        "/stable/balance-sheet-statement",
        "/stable/cash-flow-statement",
        "/stable/key-metrics",
        "/stable/ratios",
        "/stable/financial-scores",
    ] {
        server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(200)
                .header("content-type", "application/json")
                .body("[]");
        });
    }

    let client = client_for(&server);
    let req = DataRequest::builder("AAPL")
        .fundamentals(true)
        .income_statements(true)
        .build()
        .unwrap();
    client.get_ticker_data(&req).await.unwrap();

    income.assert_hits(1);
}

#[tokio::test]
async fn second_call_is_served_from_the_shared_cache() {
    let server = setup_server();
    let quote = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200)
            .header("content-type", "application/json")
            .body(QUOTE_BODY);
    });

    let cache = Arc::new(MemoryCache::new());
    let client = builder_for(&server).cache(cache).build().unwrap();
    let req = DataRequest::builder("AAPL").quote(true).build().unwrap();

    let first = client.get_ticker_data(&req).await.unwrap();
    let second = client.get_ticker_data(&req).await.unwrap();

    quote.assert_hits(1);
    assert!(!first.cache_hit);
    assert!(second.cache_hit);
    assert_eq!(first.quote, second.quote);
}

#[tokio::test]
async fn empty_results_are_never_cached() {
    let server = setup_server();
    let mut empty = server.mock(|when, then| {
        when.method(GET).path("/stable/income-statement");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let cache = Arc::new(MemoryCache::new());
    let client = builder_for(&server).cache(cache).build().unwrap();
    let req = DataRequest::builder("AAPL")
        .income_statements(true)
        .build()
        .unwrap();

    let first = client.get_ticker_data(&req).await.unwrap();
    empty.assert_hits(1);
    assert!(first.income_statements.is_empty());

    // Once the upstream has data, a new call must reach it: the earlier
    // empty result must not have been pinned under the permanent TTL.
    empty.delete();
    let filled = server.mock(|when, then| {
        when.method(GET).path("/stable/income-statement");
        then.status(200)
            .header("content-type", "application/json")
            .body(INCOME_BODY);
    });

    let second = client.get_ticker_data(&req).await.unwrap();
    filled.assert_hits(1);
    assert!(!second.cache_hit);
    assert_eq!(second.income_statements.len(), 2);

    // The non-empty result does get cached.
    let third = client.get_ticker_data(&req).await.unwrap();
    filled.assert_hits(1);
    assert!(third.cache_hit);
}

#[tokio::test]
async fn overlapping_calls_share_the_cache_consistently() {
    let server = setup_server();
    let quote = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200)
            .header("content-type", "application/json")
            .body(QUOTE_BODY);
    });

    let cache = Arc::new(MemoryCache::new());
    let client = builder_for(&server).cache(cache).build().unwrap();
    let req = DataRequest::builder("AAPL").quote(true).build().unwrap();

    let (a, b) = tokio::join!(client.get_ticker_data(&req), client.get_ticker_data(&req));
    let a = a.unwrap();
    let b = b.unwrap();

    // Whichever call wins the race populates the cache; both must decode the
    // same quote, and the upstream is queried at most once per call.
    assert_eq!(a.quote, b.quote);
    assert_eq!(a.quote.as_ref().unwrap().price, Some(228.5));
    assert!(quote.hits() >= 1 && quote.hits() <= 2);

    let third = client.get_ticker_data(&req).await.unwrap();
    assert!(third.cache_hit);
    assert_eq!(third.quote, a.quote);
}

#[tokio::test]
async fn clear_cache_forces_a_refetch() {
    let server = setup_server();
    let quote = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200)
            .header("content-type", "application/json")
            .body(QUOTE_BODY);
    });

    let cache = Arc::new(MemoryCache::new());
    let client = builder_for(&server).cache(cache).build().unwrap();
    let req = DataRequest::builder("AAPL").quote(true).build().unwrap();

    client.get_ticker_data(&req).await.unwrap();
    client.clear_cache(Some("AAPL")).await.unwrap();
    client.get_ticker_data(&req).await.unwrap();

    quote.assert_hits(2);
}

#[tokio::test]
async fn period_parameters_key_the_cache_separately() {
    let server = setup_server();
    let quarterly = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/income-statement")
            .query_param("period", "quarter");
        then.status(200)
            .header("content-type", "application/json")
            .body(INCOME_BODY);
    });
    let annual = server.mock(|when, then| {
        when.method(GET)
            .path("/stable/income-statement")
            .query_param("period", "annual");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let cache = Arc::new(MemoryCache::new());
    let client = builder_for(&server).cache(cache).build().unwrap();

    let quarterly_req = DataRequest::builder("AAPL")
        .income_statements(true)
        .build()
        .unwrap();
    let annual_req = DataRequest::builder("AAPL")
        .income_statements(true)
        .period_type(fmp_client::PeriodType::Annual)
        .periods(10)
        .build()
        .unwrap();

    client.get_ticker_data(&quarterly_req).await.unwrap();
    client.get_ticker_data(&annual_req).await.unwrap();
    client.get_ticker_data(&quarterly_req).await.unwrap();

    quarterly.assert_hits(1);
    annual.assert_hits(1);
}

#[tokio::test]
async fn tier_denied_section_is_isolated_and_never_sent() {
    let server = setup_server();
    let quote = server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(200)
            .header("content-type", "application/json")
            .body(QUOTE_BODY);
    });
    let aftermarket = server.mock(|when, then| {
        when.method(GET).path("/stable/aftermarket-quote");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let client = builder_for(&server).tier(Tier::Starter).build().unwrap();
    let req = DataRequest::builder("AAPL")
        .quote(true)
        .aftermarket_quote(true)
        .build()
        .unwrap();
    let data = client.get_ticker_data(&req).await.unwrap();

    quote.assert();
    aftermarket.assert_hits(0);
    assert!(data.quote.is_some());
    assert!(data.aftermarket_quote.is_none());
}

#[tokio::test]
async fn invalid_request_is_rejected_before_dispatch() {
    let server = setup_server();
    let client = client_for(&server);

    let mut req = DataRequest::builder("AAPL").quote(true).build().unwrap();
    req.periods = 0;
    let err = client.get_ticker_data(&req).await.unwrap_err();
    assert!(matches!(err, FmpError::Validation(_)));
}

#[tokio::test]
async fn get_quote_propagates_its_section_failure() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/stable/quote");
        then.status(500).body("boom");
    });

    let client = client_for(&server);
    let err = client.get_quote("AAPL").await.unwrap_err();
    assert!(matches!(err, FmpError::Api { status: 500, .. }));
}

#[tokio::test]
async fn get_profile_returns_the_typed_record() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET)
            .path("/stable/profile")
            .query_param("symbol", "MSFT");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"symbol": "MSFT", "companyName": "Microsoft Corporation"}]"#);
    });

    let client = client_for(&server);
    let profile = client.get_profile("msft").await.unwrap().unwrap();
    assert_eq!(profile.symbol, "MSFT");
    assert_eq!(
        profile.company_name.as_deref(),
        Some("Microsoft Corporation")
    );
}
