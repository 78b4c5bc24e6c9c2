//! `ApiClient` over the real reqwest transport against a local mock server.

use httpmock::prelude::*;
use tickchart_core::{ApiClient, ApiConfig, ChartError, QuoteRequest, Symbol, TimeSeriesFunction};
use tickchart_tests::{daily_body, error_body, intraday_body, TEST_API_KEY};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(TEST_API_KEY, server.url("/query")).with_timeout_ms(2_000))
}

fn request(function: TimeSeriesFunction) -> QuoteRequest {
    QuoteRequest::parse(
        Symbol::parse("IBM").expect("valid"),
        function,
        "2023-01-01",
        "2023-01-05",
    )
    .expect("valid request")
}

#[tokio::test]
async fn daily_fetch_sends_expected_query_and_returns_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/query")
                .query_param("function", "TIME_SERIES_DAILY")
                .query_param("symbol", "IBM")
                .query_param("apikey", TEST_API_KEY);
            then.status(200)
                .header("content-type", "application/json")
                .body(daily_body());
        })
        .await;

    let body = client_for(&server)
        .fetch_series(&request(TimeSeriesFunction::Daily))
        .await
        .expect("fetch succeeds");

    mock.assert_async().await;
    assert!(body.get("Time Series (Daily)").is_some());
}

#[tokio::test]
async fn intraday_fetch_adds_five_minute_interval() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/query")
                .query_param("function", "TIME_SERIES_INTRADAY")
                .query_param("interval", "5min");
            then.status(200).body(intraday_body());
        })
        .await;

    client_for(&server)
        .fetch_series(&request(TimeSeriesFunction::Intraday))
        .await
        .expect("fetch succeeds");

    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_status_surfaces_as_api_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/query");
            then.status(500).body("internal error");
        })
        .await;

    let error = client_for(&server)
        .fetch_series(&request(TimeSeriesFunction::Weekly))
        .await
        .expect_err("status 500");

    assert_eq!(error, ChartError::ApiStatus { status_code: 500 });
}

#[tokio::test]
async fn error_payload_with_ok_status_surfaces_its_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/query");
            then.status(200)
                .body(error_body("Invalid API call. Please retry or visit the documentation."));
        })
        .await;

    let error = client_for(&server)
        .fetch_series(&request(TimeSeriesFunction::Monthly))
        .await
        .expect_err("in-band error");

    assert_eq!(
        error,
        ChartError::ApiLogical {
            message: String::from("Invalid API call. Please retry or visit the documentation.")
        }
    );
}

#[tokio::test]
async fn unreachable_host_surfaces_as_api_unavailable() {
    // Port 9 (discard) on localhost is closed in test environments.
    let client = ApiClient::new(ApiConfig::new(TEST_API_KEY, "http://127.0.0.1:9/query"));

    let error = client
        .fetch_series(&request(TimeSeriesFunction::Daily))
        .await
        .expect_err("connection refused");

    assert!(matches!(error, ChartError::ApiUnavailable { .. }));
}

#[tokio::test]
async fn symbol_search_matches_any_best_match() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/query")
                .query_param("function", "SYMBOL_SEARCH")
                .query_param("keywords", "IBM");
            then.status(200).body(
                serde_json::json!({
                    "bestMatches": [
                        { "1. symbol": "IBMX", "2. name": "Other" },
                        { "1. symbol": "IBM", "2. name": "International Business Machines" }
                    ]
                })
                .to_string(),
            );
        })
        .await;

    let known = client_for(&server)
        .search_symbol(&Symbol::parse("IBM").expect("valid"))
        .await
        .expect("search succeeds");

    mock.assert_async().await;
    assert!(known);
}
